//! Error types for cart persistence.

use std::path::PathBuf;

/// Result type for cart store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for cart store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access cart file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid cart data in {context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cart store lock poisoned")]
    Poisoned,
}
