//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DELAY_MS, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Probe configuration.
///
/// Doubles as the CLI surface (clap derive) and the library configuration.
/// Library callers can construct it with `Default` and override fields:
///
/// ```no_run
/// use wp_scout::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     delay_ms: 0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wp_scout",
    version,
    about = "Inspect a web page for WordPress, its theme, page builder, and plugins",
    long_about = None
)]
pub struct Config {
    /// URL of the page to inspect (https:// is assumed when no scheme is given)
    pub url: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Settle delay before the detection request is issued, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Print the detection result as JSON instead of the report
    #[arg(long)]
    pub json: bool,

    /// Skip robots.txt and sitemap path probes (no network beyond the page fetch)
    #[arg(long)]
    pub skip_probes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay_ms: DEFAULT_DELAY_MS,
            json: false,
            skip_probes: false,
        }
    }
}
