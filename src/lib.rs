//! wp_scout library: WordPress stack detection for a fetched page.
//!
//! Given a URL, wp_scout fetches the page, distills its markup into
//! detection evidence, and runs a suite of heuristic detectors: WordPress
//! itself, the active theme, the page builder, a catalogue of popular
//! plugins, plus Cloudflare, jQuery, sitemap, and WooCommerce checks.
//! Detection is best-effort substring/pattern matching over static markup;
//! false negatives and false positives are expected and accepted.
//!
//! # Example
//!
//! ```no_run
//! use wp_scout::{run_probe, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     delay_ms: 0,
//!     ..Default::default()
//! };
//!
//! let report = run_probe(config).await?;
//! if report.info.is_wordpress {
//!     println!("WordPress {:?}, {} plugins", report.info.wp_version, report.info.plugins.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod config;
mod detect;
mod error_handling;
pub mod initialization;
mod models;
mod page;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use detect::{catalogue, inspect, SignatureRule};
pub use error_handling::{InitializationError, ProbeError};
pub use models::{PageInfo, PluginMatch};
pub use page::PageDocument;
pub use run::{run_probe, ProbeReport};

// Internal run module (contains the one-shot probe logic)
mod run {
    use std::time::{Duration, Instant};

    use log::{info, warn};
    use url::Url;

    use crate::config::Config;
    use crate::detect;
    use crate::error_handling::ProbeError;
    use crate::initialization::init_client;
    use crate::models::PageInfo;
    use crate::page::PageDocument;

    /// Result of one probe run.
    #[derive(Debug, Clone)]
    pub struct ProbeReport {
        /// The URL the page was finally served from (after redirects).
        pub url: String,
        /// The detection result.
        pub info: PageInfo,
        /// Elapsed time in seconds, excluding the settle delay.
        pub elapsed_seconds: f64,
    }

    /// Fetches the configured page and runs the detection suite against it.
    ///
    /// This is the single request/response exchange of the tool: exactly one
    /// detection run per call, returning the full result or the one
    /// user-visible error. A fixed settle delay (`config.delay_ms`) elapses
    /// before the request is issued.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] when the URL cannot be parsed, the HTTP
    /// client cannot be built, or the page cannot be fetched. Failures in
    /// individual detection tiers never surface here.
    pub async fn run_probe(config: Config) -> Result<ProbeReport, ProbeError> {
        let target = normalize_url(&config.url)?;
        let client = init_client(&config).await?;

        if config.delay_ms > 0 {
            // Heuristic wait, not a synchronization primitive
            tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
        }

        let start = Instant::now();
        info!("Inspecting {target}");

        let response = client
            .get(target.clone())
            .send()
            .await
            .map_err(|source| ProbeError::Fetch {
                url: target.to_string(),
                source,
            })?;

        let final_url = response.url().clone();
        let status = response.status();
        if !status.is_success() {
            // Error pages still render inspectable markup; report and continue
            warn!("{final_url} returned HTTP {status}, inspecting the body anyway");
        }

        let body = response
            .text()
            .await
            .map_err(|source| ProbeError::Body {
                url: final_url.to_string(),
                source,
            })?;

        let page = PageDocument::parse(final_url.clone(), &body);
        let info = detect::inspect(&page, &client, config.skip_probes).await;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Detection finished for {final_url} in {elapsed_seconds:.2}s ({} plugins)",
            info.plugins.len()
        );

        Ok(ProbeReport {
            url: final_url.to_string(),
            info,
            elapsed_seconds,
        })
    }

    /// Parses the target URL, assuming https:// when no scheme was given.
    fn normalize_url(raw: &str) -> Result<Url, ProbeError> {
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{raw}")
        };

        Url::parse(&candidate).map_err(|source| ProbeError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }

}
