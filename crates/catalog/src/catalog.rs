//! Catalog data and loading.

use std::path::Path;

use concierge_core::{Clinic, Flight, Hotel};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

/// The built-in seed catalog.
pub const SEED_CATALOG: &str = include_str!("../data/catalog.json");

/// All option records a provider can serve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub clinics: Vec<Clinic>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded seed catalog.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            clinics = catalog.clinics.len(),
            hotels = catalog.hotels.len(),
            flights = catalog.flights.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}
