//! Sitemap discovery.
//!
//! A five-tier fallback chain. In-page tiers run first; network tiers
//! (robots.txt, then conventional path probes) only run while no URL is
//! known. Tier 3 (robots meta) can only set the flag and deliberately does
//! not stop the URL-bearing tiers that follow. Every network failure is
//! swallowed and treated as "this tier found nothing".

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ROBOTS_TXT_PATH, SITEMAP_CANDIDATE_PATHS};
use crate::page::PageDocument;

static ROBOTS_SITEMAP_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Sitemap:\s*(.+)").expect("static regex"));

/// What the chain learned: whether a sitemap exists, and its URL when a
/// URL-bearing tier succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SitemapFinding {
    pub found: bool,
    pub url: Option<String>,
}

/// Runs the sitemap fallback chain. Network tiers are skipped entirely when
/// `skip_probes` is set.
pub(crate) async fn detect_sitemap(
    page: &PageDocument,
    client: &reqwest::Client,
    skip_probes: bool,
) -> SitemapFinding {
    let mut finding = SitemapFinding::default();

    // Tier 1: legacy in-page references
    if let Some(url) = legacy_reference(page) {
        finding.found = true;
        finding.url = Some(url);
    }

    // Tier 2: modern SEO-plugin and core sitemap references
    if !finding.found {
        if let Some(url) = modern_reference(page) {
            finding.found = true;
            finding.url = Some(url);
        }
    }

    // Tier 3: robots meta names a sitemap but carries no URL; later tiers
    // still get a chance to find one
    if !finding.found && robots_meta_mentions_sitemap(page) {
        finding.found = true;
    }

    if skip_probes {
        return finding;
    }

    // Tier 4: the origin's robots.txt
    if finding.url.is_none() {
        if let Some(url) = sitemap_from_robots_txt(page, client).await {
            finding.found = true;
            finding.url = Some(url);
        }
    }

    // Tier 5: conventional locations, probed one at a time
    if finding.url.is_none() {
        if let Some(url) = probe_candidate_paths(page, client).await {
            finding.found = true;
            finding.url = Some(url);
        }
    }

    finding
}

fn legacy_reference(page: &PageDocument) -> Option<String> {
    page.link_hrefs()
        .iter()
        .find(|href| href.contains("sitemap"))
        .or_else(|| {
            page.anchor_hrefs()
                .iter()
                .find(|href| href.contains("sitemap.xml"))
        })
        .cloned()
}

fn modern_reference(page: &PageDocument) -> Option<String> {
    const MARKERS: [&str; 2] = ["sitemap_index.xml", "wp-sitemap"];

    page.link_hrefs()
        .iter()
        .chain(page.anchor_hrefs().iter())
        .find(|href| MARKERS.iter().any(|marker| href.contains(marker)))
        .cloned()
}

fn robots_meta_mentions_sitemap(page: &PageDocument) -> bool {
    page.meta_content("robots")
        .is_some_and(|content| content.to_lowercase().contains("sitemap"))
}

async fn sitemap_from_robots_txt(page: &PageDocument, client: &reqwest::Client) -> Option<String> {
    let robots_url = page.origin_join(ROBOTS_TXT_PATH)?;

    let response = match client.get(&robots_url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::debug!("robots.txt fetch failed for {robots_url}: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        log::debug!(
            "robots.txt returned {} for {robots_url}",
            response.status()
        );
        return None;
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::debug!("robots.txt body read failed for {robots_url}: {e}");
            return None;
        }
    };

    ROBOTS_SITEMAP_DIRECTIVE
        .captures(&body)
        .map(|caps| caps[1].trim().to_string())
}

async fn probe_candidate_paths(page: &PageDocument, client: &reqwest::Client) -> Option<String> {
    for path in SITEMAP_CANDIDATE_PATHS {
        let Some(candidate) = page.origin_join(path) else {
            continue;
        };

        match client.head(&candidate).send().await {
            Ok(resp) if resp.status().is_success() => {
                log::debug!("Sitemap found at {candidate}");
                return Some(candidate);
            }
            Ok(resp) => {
                log::debug!("Sitemap probe {candidate} returned {}", resp.status());
            }
            Err(e) => {
                log::debug!("Sitemap probe {candidate} failed: {e}");
            }
        }
    }
    None
}
