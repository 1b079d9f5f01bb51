//! Option provider contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::intent::Intent;
use crate::options::{Clinic, Flight, FlightQuery, Hotel, HotelQuery};

/// Errors raised by option providers.
///
/// Unlike model failures these are not absorbed by a stage: the orchestrator
/// turns them into a generic failure response.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backing store or supplier could not be reached.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something unusable.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Search backend for clinics, hotels and flights.
///
/// Implementations must treat absent optional filters as unconstrained.
#[async_trait]
pub trait OptionProvider: Send + Sync {
    /// Clinics matching the intent, best first, at most `limit`.
    async fn search_clinics(&self, intent: &Intent, limit: usize)
        -> Result<Vec<Clinic>, ProviderError>;

    /// Hotels for a destination, cheapest first.
    async fn search_hotels(&self, query: &HotelQuery) -> Result<Vec<Hotel>, ProviderError>;

    /// Flights for a route, cheapest first.
    async fn search_flights(&self, query: &FlightQuery) -> Result<Vec<Flight>, ProviderError>;

    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;
}
