//! Chat endpoint.

use axum::extract::State;
use axum::Json;
use orchestrator::{ChatRequest, PipelineResponse};
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// `POST /api/chat`: run one message through the pipeline.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<PipelineResponse>> {
    // Reject before spending the time budget.
    request.validate()?;
    debug!(
        session_id = ?request.session_id,
        adaptive = request.use_adaptive_mode,
        "Chat request"
    );

    let response = tokio::time::timeout(state.request_timeout, state.orchestrator.process(request))
        .await
        .map_err(|_| ApiError::Timeout)??;

    info!(
        session_id = %response.session_id,
        clinics = response.cards.clinics.len(),
        "Chat response sent"
    );
    Ok(Json(response))
}
