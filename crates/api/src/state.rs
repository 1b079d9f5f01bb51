//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use catalog::CatalogProvider;
use orchestrator::Orchestrator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The concierge pipeline.
    pub orchestrator: Arc<Orchestrator<CatalogProvider>>,
    /// Wall-clock budget per chat request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Create new application state.
    pub fn new(orchestrator: Arc<Orchestrator<CatalogProvider>>, request_timeout: Duration) -> Self {
        Self {
            orchestrator,
            request_timeout,
        }
    }
}
