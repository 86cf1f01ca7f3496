//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Errors a probe run can surface to the user.
///
/// Detection itself never fails -- missing evidence degrades to unset
/// fields -- so the only failure mode is not being able to obtain the page
/// in the first place.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The target URL could not be parsed.
    #[error("Invalid page URL '{url}': {source}")]
    InvalidUrl {
        /// The URL as given on the command line.
        url: String,
        /// The underlying parse error.
        source: url::ParseError,
    },

    /// The page request could not be sent or did not complete.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// The URL that was being fetched.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        /// The URL whose body failed to stream.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// A required subsystem failed to initialize.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}
