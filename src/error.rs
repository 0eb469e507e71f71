//! Error taxonomy for gloss runs.
//!
//! Startup-fatal conditions (missing credential, unusable HTTP client,
//! unparseable command line) abort the process before any file I/O.
//! Everything else is recoverable at the per-file task boundary: the error
//! is logged with the file path and the run continues.

use std::io;

use thiserror::Error;

/// Errors surfaced while configuring or executing a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlossError {
    /// No API credential was supplied via flag or environment.
    #[error("AI API key is required (use --api-key or set OPENAI_API_KEY)")]
    MissingApiKey,

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Networking failed while calling the rewrite service.
    #[error("network error talking to the rewrite service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The rewrite service returned a non-transport failure.
    #[error("rewrite service error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

/// Maps an [`io::Error`] into [`GlossError::Io`].
#[must_use]
pub fn io_error(error: &io::Error) -> GlossError {
    GlossError::Io {
        message: error.to_string(),
    }
}
