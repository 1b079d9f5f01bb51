//! Error types for model calls.

use thiserror::Error;

/// Errors that can occur while calling a language model.
///
/// Pipeline stages treat every variant the same way ("stage failed"); the
/// distinction only matters for logs.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The backend is misconfigured (missing key, bad URL, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be delivered.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the provider.
        message: String,
    },

    /// The response could not be processed.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The call exceeded its deadline.
    #[error("request timed out")]
    Timeout,

    /// The backend is temporarily unavailable.
    #[error("brain unavailable: {0}")]
    Unavailable(String),
}
