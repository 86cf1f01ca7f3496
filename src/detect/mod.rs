//! The detection suite.
//!
//! `inspect` runs every detector against the extracted page evidence and
//! assembles the single [`PageInfo`] for the run. Evidence order is fixed:
//! platform, theme, Cloudflare, client library, sitemap, commerce, the
//! plugin catalogue, page builders, PHP, and finally the Google Sites
//! override, which supersedes the platform and builder conclusions while
//! leaving earlier auxiliary findings in place.

mod builder;
mod catalogue;
mod commerce;
mod google_sites;
mod library;
mod platform;
mod sitemap;
mod theme;
mod version;

pub use catalogue::{catalogue, SignatureRule};

use crate::models::PageInfo;
use crate::page::PageDocument;

/// Runs a full detection pass over one page.
///
/// Never fails: missing evidence degrades to unset fields, and network
/// failures inside the sitemap tiers are swallowed. `skip_probes` disables
/// the robots.txt fetch and sitemap path probes.
pub async fn inspect(
    page: &PageDocument,
    client: &reqwest::Client,
    skip_probes: bool,
) -> PageInfo {
    let mut info = PageInfo::default();

    let (is_wordpress, wp_version) = platform::detect_platform(page);
    info.is_wordpress = is_wordpress;
    info.wp_version = wp_version;

    if info.is_wordpress {
        if let Some(theme) = theme::detect_theme(page) {
            info.theme = Some(theme.name);
            info.theme_version = theme.version;
        }
    }

    info.cloudflare = platform::detect_cloudflare(page);

    if let Some(library) = library::detect_client_library(page) {
        info.client_library_version = Some(library.version);
        info.client_library_outdated = library.outdated;
    }

    let sitemap = sitemap::detect_sitemap(page, client, skip_probes).await;
    info.sitemap = sitemap.found;
    info.sitemap_url = sitemap.url;

    if let Some(plugin) = commerce::detect_commerce(page) {
        info.commerce_enabled = true;
        info.push_plugin(plugin);
    }

    for rule in catalogue() {
        if let Some(plugin) = catalogue::match_rule(rule, page) {
            info.push_plugin(plugin);
        }
    }

    if let Some(found) = builder::detect_builder(page) {
        info.page_builder = Some(found.label);
        if let Some(plugin) = found.plugin {
            info.push_plugin(plugin);
        }
    }

    info.php_version = platform::detect_php_version(page);

    // Mutually exclusive platforms: this override always runs last so it
    // takes precedence over everything computed before it. Auxiliary
    // findings (CDN, library, sitemap) are deliberately left in place.
    if google_sites::detect_google_sites(page) {
        info.is_wordpress = false;
        info.page_builder = Some("Google Sites".to_string());
        return info;
    }

    info
}
