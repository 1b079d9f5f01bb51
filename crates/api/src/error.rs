//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::OrchestratorError;
use thiserror::Error;

/// Generic user-facing text for failed requests.
pub const FAILURE_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected before processing.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The pipeline failed.
    #[error("Processing failed: {0}")]
    Processing(OrchestratorError),

    /// The request ran past its wall-clock budget.
    #[error("Request timed out")]
    Timeout,
}

impl From<OrchestratorError> for ApiError {
    fn from(err: OrchestratorError) -> Self {
        match err {
            OrchestratorError::InvalidRequest(message) => ApiError::BadRequest(message),
            other => ApiError::Processing(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Processing(err) => {
                tracing::error!(error = %err, "Chat processing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, failure_body())
            }
            ApiError::Timeout => {
                tracing::error!("Chat request timed out");
                (StatusCode::GATEWAY_TIMEOUT, failure_body())
            }
        };

        (status, Json(body)).into_response()
    }
}

fn failure_body() -> serde_json::Value {
    serde_json::json!({
        "error": "Failed to process message",
        "message": FAILURE_MESSAGE
    })
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
