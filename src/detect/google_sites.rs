//! Google Sites detection.
//!
//! Google Sites and WordPress are mutually exclusive outcomes. This check
//! runs unconditionally at the end of a run and, when it fires, overrides
//! the platform and builder conclusions (see `detect::inspect`).

use crate::page::PageDocument;

const SCRIPT_PATH_FRAGMENT: &str = "scs/sites";
const HOSTNAME_FRAGMENT: &str = "sites.google.com";
const CLASS_MARKERS: [&str; 3] = ["sites-embed", "sites-layout", "sites-navigation"];

/// Whether the page is a Google Sites page. Any single marker suffices.
pub(crate) fn detect_google_sites(page: &PageDocument) -> bool {
    if page
        .generator_contents()
        .any(|content| content.contains("Google Sites"))
    {
        return true;
    }
    if page.any_resource_contains(SCRIPT_PATH_FRAGMENT) {
        return true;
    }
    if page.hostname().contains(HOSTNAME_FRAGMENT) {
        return true;
    }
    CLASS_MARKERS
        .iter()
        .any(|marker| page.any_class_contains(marker))
}
