//! Error types for orchestrator operations.

use brain_core::BrainError;
use concierge_core::ProviderError;
use thiserror::Error;

/// Errors that can occur during orchestration.
///
/// Only `InvalidRequest` and `Provider` ever leave [`crate::Orchestrator::process`];
/// the other variants describe stage failures that are absorbed into that
/// stage's fallback value.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The inbound request was rejected before any stage ran.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A model call failed.
    #[error("brain error: {0}")]
    Brain(#[from] BrainError),

    /// A model answered with output that failed parsing or validation.
    #[error("invalid model output: {0}")]
    InvalidOutput(String),

    /// A model answered with no content.
    #[error("model returned no content")]
    EmptyOutput,

    /// An option provider failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}
