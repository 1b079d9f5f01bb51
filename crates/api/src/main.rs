//! HTTP gateway for the medical travel concierge.
//!
//! Exposes the orchestrator pipeline as `POST /api/chat` backed by the
//! option catalog.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use catalog::{Catalog, CatalogProvider};
use orchestrator::Orchestrator;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        addr = %config.addr,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting concierge API"
    );

    let provider = match &config.catalog_path {
        Some(path) => CatalogProvider::new(Catalog::from_path(path)?),
        None => CatalogProvider::seeded()?,
    };
    let orchestrator = Orchestrator::from_env(provider)?;

    let state = AppState::new(Arc::new(orchestrator), config.request_timeout);
    let app = routes::router().with_state(state);

    info!(addr = %config.addr, "Concierge API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
