//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not match the expected shape.
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
