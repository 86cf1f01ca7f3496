//! Error types and handling.
//!
//! Three kinds of failure exist in this tool:
//! - expected absence: a signature simply does not match; never an error,
//!   detectors return `None`/`false` instead
//! - network failure during sitemap discovery: caught and logged at debug
//!   level, treated as "this tier found nothing"
//! - probe failure: the page itself could not be fetched; the only condition
//!   surfaced to the user, as a [`ProbeError`]

mod types;

pub use types::{InitializationError, ProbeError};
