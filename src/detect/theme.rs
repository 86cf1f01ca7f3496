//! Theme identification from stylesheet paths.

use std::sync::LazyLock;

use regex::Regex;

use crate::detect::version::ver_query_param;
use crate::page::PageDocument;

static THEME_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/themes/([^/]+)").expect("static regex"));

/// A detected theme and, when its stylesheet URL carried one, a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThemeFinding {
    pub name: String,
    pub version: Option<String>,
}

/// Identifies the active theme. Only called on WordPress-positive pages.
///
/// The first link href containing `/themes/` wins; the identifier is the
/// path segment after it and the version comes from that href's `ver`
/// query parameter. A dedicated `<meta name="theme">` tag is consulted only
/// when the path-based method found nothing. No reconciliation between
/// conflicting signals is attempted.
pub(crate) fn detect_theme(page: &PageDocument) -> Option<ThemeFinding> {
    theme_from_stylesheet_path(page).or_else(|| theme_from_meta(page))
}

fn theme_from_stylesheet_path(page: &PageDocument) -> Option<ThemeFinding> {
    let href = page
        .link_hrefs()
        .iter()
        .find(|href| href.contains("/themes/"))?;
    let name = THEME_PATH.captures(href).map(|caps| caps[1].to_string())?;

    Some(ThemeFinding {
        name,
        version: ver_query_param(href),
    })
}

fn theme_from_meta(page: &PageDocument) -> Option<ThemeFinding> {
    page.meta_content("theme").map(|content| ThemeFinding {
        name: content.to_string(),
        version: None,
    })
}
