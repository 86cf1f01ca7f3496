//! Page builder identification.
//!
//! Unlike the catalogue rules this produces a single display label, possibly
//! composed from two builders, which is why it lives outside the generic
//! matcher. Priority: Elementor, then an independent Divi check that can
//! extend or set the label, then a fixed chain of lower-confidence
//! class-marker fallbacks.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CLASS_COUNT_THRESHOLD;
use crate::models::PluginMatch;
use crate::page::PageDocument;

static ELEMENTOR_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Elementor ([\d.]+)").expect("static regex"));

/// Lower-confidence fallback fingerprints, checked in order; the first class
/// substring hit sets the label and stops the chain.
const FALLBACK_BUILDERS: [(&str, &[&str]); 3] = [
    ("WPBakery (Visual Composer)", &["vc_", "wpb_"]),
    ("Beaver Builder", &["fl-builder"]),
    ("Gutenberg (Block Editor)", &["wp-block-"]),
];

/// The outcome of the builder chain: a display label and, for Elementor,
/// a plugin entry that joins the shared plugin list.
#[derive(Debug, Clone)]
pub(crate) struct BuilderFinding {
    pub label: String,
    pub plugin: Option<PluginMatch>,
}

/// Runs the builder priority chain against the page evidence.
pub(crate) fn detect_builder(page: &PageDocument) -> Option<BuilderFinding> {
    let mut label: Option<String> = None;
    let mut plugin: Option<PluginMatch> = None;

    if elementor_present(page) {
        let version = page
            .generator_contents()
            .find(|content| content.contains("Elementor"))
            .and_then(|content| {
                ELEMENTOR_VERSION
                    .captures(content)
                    .map(|caps| caps[1].to_string())
            });

        label = Some(match &version {
            Some(v) => format!("Elementor {v}"),
            None => "Elementor".to_string(),
        });
        plugin = Some(PluginMatch {
            name: "Elementor".to_string(),
            slug: "elementor".to_string(),
            version,
        });
    }

    // Divi is checked independently of Elementor; it is the only builder
    // that can share the label with another one.
    if divi_present(page) {
        label = Some(match label {
            Some(existing) => format!("{existing} + Divi"),
            None => "Divi".to_string(),
        });
    }

    if label.is_none() {
        label = FALLBACK_BUILDERS.iter().find_map(|(name, markers)| {
            markers
                .iter()
                .any(|marker| page.any_class_contains(marker))
                .then(|| name.to_string())
        });
    }

    label.map(|label| {
        log::debug!("Page builder identified: {label}");
        BuilderFinding { label, plugin }
    })
}

fn elementor_present(page: &PageDocument) -> bool {
    page.any_resource_contains("elementor") || page.any_class_contains("elementor")
}

fn divi_present(page: &PageDocument) -> bool {
    // Asset URLs appear with either capitalization in the wild
    if page.any_resource_contains("divi") || page.any_resource_contains("Divi") {
        return true;
    }
    page.count_hooks_matching(&["et_pb", "et-"], &["et-"]) > CLASS_COUNT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> PageDocument {
        PageDocument::parse(Url::parse("https://example.com/").expect("test url"), html)
    }

    #[test]
    fn test_elementor_label_and_plugin_without_version() {
        let page = doc(r#"<link rel="stylesheet" href="/wp-content/plugins/elementor/css/frontend.css">"#);
        let found = detect_builder(&page).expect("builder detected");
        assert_eq!(found.label, "Elementor");
        let plugin = found.plugin.expect("elementor plugin entry");
        assert_eq!(plugin.slug, "elementor");
        assert_eq!(plugin.version, None);
    }

    #[test]
    fn test_elementor_version_from_generator_meta() {
        let page = doc(r#"
            <meta name="generator" content="Elementor 3.18.0; features: e_dom_optimization">
            <div class="elementor elementor-123"></div>
        "#);
        let found = detect_builder(&page).expect("builder detected");
        assert_eq!(found.label, "Elementor 3.18.0");
        assert_eq!(
            found.plugin.expect("plugin").version.as_deref(),
            Some("3.18.0")
        );
    }

    #[test]
    fn test_divi_composes_with_elementor() {
        let page = doc(r#"
            <div class="elementor"></div>
            <script src="/wp-content/themes/Divi/js/scripts.js"></script>
        "#);
        let found = detect_builder(&page).expect("builder detected");
        assert_eq!(found.label, "Elementor + Divi");
    }

    #[test]
    fn test_divi_standalone_via_class_count() {
        // Six elements carrying Divi hooks clears the threshold
        let html = r#"<div class="et_pb_section"></div>"#.repeat(4)
            + &r#"<div id="et-main-area"></div>"#.repeat(2);
        let found = detect_builder(&doc(&html)).expect("builder detected");
        assert_eq!(found.label, "Divi");
        assert!(found.plugin.is_none());
    }

    #[test]
    fn test_divi_class_count_threshold_is_strict() {
        let html = r#"<div class="et_pb_section"></div>"#.repeat(5);
        assert!(detect_builder(&doc(&html)).is_none());
    }

    #[test]
    fn test_fallback_chain_order() {
        // Both WPBakery and Beaver markers present: the chain stops at WPBakery
        let page = doc(r#"
            <div class="vc_row"></div>
            <div class="fl-builder-content"></div>
        "#);
        let found = detect_builder(&page).expect("builder detected");
        assert_eq!(found.label, "WPBakery (Visual Composer)");
    }

    #[test]
    fn test_gutenberg_fallback() {
        let page = doc(r#"<p class="wp-block-paragraph">text</p>"#);
        let found = detect_builder(&page).expect("builder detected");
        assert_eq!(found.label, "Gutenberg (Block Editor)");
        assert!(found.plugin.is_none());
    }

    #[test]
    fn test_primary_builder_suppresses_fallbacks() {
        let page = doc(r#"
            <div class="elementor"></div>
            <div class="vc_row"></div>
        "#);
        assert_eq!(detect_builder(&page).expect("builder").label, "Elementor");
    }

    #[test]
    fn test_no_builder() {
        let page = doc("<html><body><article>words</article></body></html>");
        assert!(detect_builder(&page).is_none());
    }
}
