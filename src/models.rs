//! Detection result types.
//!
//! A `PageInfo` is produced once per detection run and is immutable once the
//! run completes. `PluginMatch` entries are slug-unique: the first detection
//! of a slug wins and later duplicates are discarded.

use serde::{Deserialize, Serialize};

/// A single detected plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMatch {
    /// Display name (e.g. "Yoast SEO").
    pub name: String,
    /// Directory slug on the plugin registry (e.g. "wordpress-seo").
    pub slug: String,
    /// Best-effort version string, when one could be extracted.
    pub version: Option<String>,
}

/// Everything the detector learned about one page.
///
/// All fields default to negative/unset; detectors only ever fill them in.
/// The Google Sites override is the single exception: it resets
/// `is_wordpress` and `page_builder` after the fact (see `detect::inspect`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether the page looks like a WordPress site.
    pub is_wordpress: bool,
    /// WordPress core version, from the generator meta tag only.
    pub wp_version: Option<String>,
    /// PHP version, parsed from any "PHP/x.y.z" substring in the raw markup.
    pub php_version: Option<String>,
    /// Page builder display label; may be composed (e.g. "Elementor + Divi").
    pub page_builder: Option<String>,
    /// Active theme identifier.
    pub theme: Option<String>,
    /// Theme version, from the theme stylesheet's `ver` query parameter.
    pub theme_version: Option<String>,
    /// Whether Cloudflare markers were found.
    pub cloudflare: bool,
    /// Detected jQuery version, when a versioned script was found.
    pub client_library_version: Option<String>,
    /// Whether the detected jQuery version is older than 3.5.
    pub client_library_outdated: bool,
    /// Whether a sitemap was discovered by any tier.
    pub sitemap: bool,
    /// Discovered sitemap URL, when a URL-bearing tier succeeded.
    pub sitemap_url: Option<String>,
    /// Whether an e-commerce plugin (WooCommerce) is active.
    pub commerce_enabled: bool,
    /// Detected plugins in detection order, at most one entry per slug.
    pub plugins: Vec<PluginMatch>,
}

impl PageInfo {
    /// Appends a plugin unless one with the same slug is already present.
    ///
    /// First detection wins; later duplicates are dropped silently.
    pub fn push_plugin(&mut self, plugin: PluginMatch) {
        if self.plugins.iter().any(|p| p.slug == plugin.slug) {
            log::debug!("Skipping duplicate plugin detection for '{}'", plugin.slug);
            return;
        }
        self.plugins.push(plugin);
    }
}
