//! In-memory option catalog for the concierge pipeline.
//!
//! [`CatalogProvider`] implements [`concierge_core::OptionProvider`] over a
//! JSON catalog of clinics, hotels and flights. The catalog is either the
//! embedded seed or a file named by `CATALOG_PATH`.
//!
//! # Example
//!
//! ```rust
//! use catalog::CatalogProvider;
//! use concierge_core::{Category, Intent, OptionProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CatalogProvider::seeded()?;
//!     let intent = Intent {
//!         category: Some(Category::Dental),
//!         ..Default::default()
//!     };
//!
//!     let clinics = provider.search_clinics(&intent, 10).await?;
//!     assert_eq!(clinics[0].city, "Istanbul");
//!     Ok(())
//! }
//! ```

mod catalog;
mod error;
mod provider;

pub use catalog::{Catalog, SEED_CATALOG};
pub use error::CatalogError;
pub use provider::{CatalogProvider, MAX_PACKAGES_PER_CLINIC, MAX_TRAVEL_RESULTS};
