//! Client-side library (jQuery) version detection.
//!
//! Without a script runtime the version is read from static markup: a
//! script src whose filename or path carries a jQuery version, or a
//! `ver=` query parameter on a jQuery script (the form WordPress core
//! enqueues). Absence of a versioned script leaves the fields unset --
//! never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::detect::version::ver_query_param;
use crate::page::PageDocument;

static JQUERY_FILE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"jquery[-./](\d+(?:\.\d+)+)").expect("static regex"));

/// A detected library version plus the outdated verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LibraryFinding {
    pub version: String,
    pub outdated: bool,
}

/// Looks for a versioned jQuery script; the first one found wins.
pub(crate) fn detect_client_library(page: &PageDocument) -> Option<LibraryFinding> {
    let version = page
        .script_srcs()
        .iter()
        .filter(|src| src.to_lowercase().contains("jquery"))
        .find_map(|src| {
            JQUERY_FILE_VERSION
                .captures(src)
                .map(|caps| caps[1].to_string())
                .or_else(|| ver_query_param(src))
        })?;

    let outdated = is_outdated(&version);
    Some(LibraryFinding { version, outdated })
}

/// Versions below 3.5 are flagged as outdated: major < 3, or major == 3 and
/// minor < 5. Unparseable components never flag.
fn is_outdated(version: &str) -> bool {
    let mut parts = version.split('.');
    let major: u32 = match parts.next().and_then(|p| p.parse().ok()) {
        Some(major) => major,
        None => return false,
    };
    let minor: Option<u32> = parts.next().and_then(|p| p.parse().ok());

    major < 3 || (major == 3 && minor.is_some_and(|m| m < 5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> PageDocument {
        PageDocument::parse(Url::parse("https://example.com/").expect("test url"), html)
    }

    #[test]
    fn test_outdated_boundary() {
        assert!(is_outdated("3.4.9"));
        assert!(!is_outdated("3.5.0"));
        assert!(is_outdated("2.9.9"));
        assert!(!is_outdated("4.0"));
        assert!(is_outdated("1.12.4"));
    }

    #[test]
    fn test_unparseable_versions_never_flag() {
        assert!(!is_outdated("unknown"));
        assert!(!is_outdated(""));
        // Bare major 3 has no minor to compare against
        assert!(!is_outdated("3"));
    }

    #[test]
    fn test_version_from_filename() {
        let page = doc(r#"<script src="https://code.jquery.com/jquery-3.6.0.min.js"></script>"#);
        let found = detect_client_library(&page).expect("library detected");
        assert_eq!(found.version, "3.6.0");
        assert!(!found.outdated);
    }

    #[test]
    fn test_version_from_cdn_path() {
        let page = doc(r#"<script src="https://cdn.example.com/libs/jquery/3.4.1/jquery.min.js"></script>"#);
        let found = detect_client_library(&page).expect("library detected");
        assert_eq!(found.version, "3.4.1");
        assert!(found.outdated);
    }

    #[test]
    fn test_version_from_ver_param() {
        // The form WordPress core enqueues
        let page = doc(r#"<script src="/wp-includes/js/jquery/jquery.min.js?ver=3.7.1"></script>"#);
        let found = detect_client_library(&page).expect("library detected");
        assert_eq!(found.version, "3.7.1");
        assert!(!found.outdated);
    }

    #[test]
    fn test_jquery_ui_does_not_count_as_core_version() {
        let page = doc(r#"<script src="/assets/jquery-ui-1.13.2.min.js"></script>"#);
        // "jquery-ui" is not followed by digits, and there is no ver= param
        assert!(detect_client_library(&page).is_none());
    }

    #[test]
    fn test_unversioned_script_leaves_fields_unset() {
        let page = doc(r#"<script src="/assets/jquery.min.js"></script>"#);
        assert!(detect_client_library(&page).is_none());
    }

    #[test]
    fn test_no_jquery_at_all() {
        let page = doc(r#"<script src="/assets/app.js?ver=2.0"></script>"#);
        assert!(detect_client_library(&page).is_none());
    }
}
