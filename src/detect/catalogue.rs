//! The plugin signature catalogue and its generic matcher.
//!
//! This is the heart of the detector: a declarative table of
//! [`SignatureRule`]s matched against page evidence by one uniform
//! procedure. The catalogue is embedded JSON, deserialized once on first
//! use and never mutated; rules are evaluated in declaration order and do
//! not interact with each other.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::detect::version::{first_dotted_run, first_ver_query_param};
use crate::models::PluginMatch;
use crate::page::PageDocument;

/// One detectable plugin: its identity plus the evidence patterns that
/// betray it. Pure data -- the matching algorithm is the same for every rule.
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureRule {
    /// Plugin registry slug; also the de-duplication key.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Substrings matched against script src and link href URLs.
    #[serde(default)]
    pub url: Vec<String>,
    /// Substrings matched against element class attributes (detection only,
    /// never yields a version).
    #[serde(default)]
    pub classes: Vec<String>,
    /// Substring matched against generator meta tag contents, the
    /// highest-confidence signal.
    #[serde(default)]
    pub generator: Option<String>,
}

static CATALOGUE: LazyLock<Vec<SignatureRule>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/catalogue.json"))
        .unwrap_or_else(|e| panic!("embedded plugin catalogue is invalid: {e}"))
});

/// The process-wide plugin catalogue, loaded once and read-only thereafter.
pub fn catalogue() -> &'static [SignatureRule] {
    &CATALOGUE
}

/// Evaluates one rule against the page evidence.
///
/// Checks run in fixed priority order, stopping at the first that succeeds:
/// 1. generator meta substring -- version is the first digit run in the
///    matching tag's content
/// 2. URL substring over script srcs and link hrefs -- version from the
///    first `ver=` query parameter on a matching script, then a matching
///    link, in document order
/// 3. class substring -- detection only, no version
pub(crate) fn match_rule(rule: &SignatureRule, page: &PageDocument) -> Option<PluginMatch> {
    if let Some(generator) = &rule.generator {
        for content in page.generator_contents() {
            if content.contains(generator.as_str()) {
                log::debug!("Plugin '{}' matched via generator meta", rule.slug);
                return Some(PluginMatch {
                    name: rule.name.clone(),
                    slug: rule.slug.clone(),
                    version: first_dotted_run(content),
                });
            }
        }
    }

    for needle in &rule.url {
        let matching_scripts: Vec<&str> = page
            .script_srcs()
            .iter()
            .filter(|src| src.contains(needle.as_str()))
            .map(|s| s.as_str())
            .collect();
        let matching_links: Vec<&str> = page
            .link_hrefs()
            .iter()
            .filter(|href| href.contains(needle.as_str()))
            .map(|s| s.as_str())
            .collect();

        if !matching_scripts.is_empty() || !matching_links.is_empty() {
            let version = first_ver_query_param(matching_scripts)
                .or_else(|| first_ver_query_param(matching_links));
            log::debug!("Plugin '{}' matched via URL substring '{}'", rule.slug, needle);
            return Some(PluginMatch {
                name: rule.name.clone(),
                slug: rule.slug.clone(),
                version,
            });
        }
    }

    for needle in &rule.classes {
        if page.any_class_contains(needle) {
            log::debug!("Plugin '{}' matched via class substring '{}'", rule.slug, needle);
            return Some(PluginMatch {
                name: rule.name.clone(),
                slug: rule.slug.clone(),
                version: None,
            });
        }
    }

    None
}
