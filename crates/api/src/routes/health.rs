//! Liveness probe.

use axum::Json;
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
