//! Error types for the book catalog

use std::path::PathBuf;

use thiserror::Error;

/// Unrecoverable catalog errors.
///
/// Expected conditions (duplicate books, unknown ids, invalid statuses,
/// missing or malformed catalog files) are not errors: the catalog reports
/// them through its return values and a diagnostic.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
