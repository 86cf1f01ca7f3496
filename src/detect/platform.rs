//! Platform-level signals: WordPress itself, PHP, and Cloudflare.

use std::sync::LazyLock;

use regex::Regex;

use crate::page::PageDocument;

static WP_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WordPress ([\d.]+)").expect("static regex"));

static PHP_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PHP[/\s]+([\d.]+)").expect("static regex"));

/// Path fragments that only WordPress serves assets from.
const WP_PATH_FRAGMENTS: [&str; 2] = ["wp-content", "wp-includes"];

/// Determines whether the page is WordPress and, when the generator meta tag
/// says so, which version.
///
/// Two independent positive signals, either sufficient:
/// - a generator meta tag naming WordPress (also the only version source)
/// - any link or script resource under `wp-content`/`wp-includes`
pub(crate) fn detect_platform(page: &PageDocument) -> (bool, Option<String>) {
    let mut is_wordpress = false;
    let mut wp_version = None;

    for content in page.generator_contents() {
        if content.contains("WordPress") {
            is_wordpress = true;
            wp_version = WP_VERSION
                .captures(content)
                .map(|caps| caps[1].to_string());
            break;
        }
    }

    if !is_wordpress
        && WP_PATH_FRAGMENTS
            .iter()
            .any(|fragment| page.any_resource_contains(fragment))
    {
        // Asset paths prove the platform but carry no version
        is_wordpress = true;
    }

    (is_wordpress, wp_version)
}

/// Best-effort PHP version: first "PHP/x.y.z" (or "PHP x.y.z") substring
/// anywhere in the raw markup.
pub(crate) fn detect_php_version(page: &PageDocument) -> Option<String> {
    PHP_VERSION
        .captures(page.raw_html())
        .map(|caps| caps[1].to_string())
}

/// Cloudflare presence: `cf-ray` meta tag, a cloudflare-hosted script, or
/// either marker anywhere in the raw markup.
pub(crate) fn detect_cloudflare(page: &PageDocument) -> bool {
    if page.has_meta("cf-ray") {
        return true;
    }
    if page.script_srcs().iter().any(|src| src.contains("cloudflare")) {
        return true;
    }
    page.raw_html().contains("cloudflare") || page.raw_html().contains("cf-ray")
}
