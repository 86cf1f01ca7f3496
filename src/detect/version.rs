//! Version string extraction helpers shared by the detectors.

use std::sync::LazyLock;

use regex::Regex;

static DOTTED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d.]*").expect("static regex"));

static VER_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]ver=([\d.]+)").expect("static regex"));

/// First run of digits and dots in `text` (e.g. `"Yoast SEO 21.5"` -> `"21.5"`).
pub(crate) fn first_dotted_run(text: &str) -> Option<String> {
    DOTTED_RUN.find(text).map(|m| m.as_str().to_string())
}

/// Value of a `ver=` query parameter in `url`, if one is present.
pub(crate) fn ver_query_param(url: &str) -> Option<String> {
    VER_PARAM
        .captures(url)
        .map(|caps| caps[1].to_string())
}

/// First `ver=` parameter found across `urls`, scanned in order.
pub(crate) fn first_ver_query_param<'a>(
    urls: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    urls.into_iter().find_map(ver_query_param)
}
