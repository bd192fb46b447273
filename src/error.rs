//! Error types for storage operations
//!
//! Only the persistence edge can fail. Scene, history, and selection
//! operations are total, so nothing here reaches the pointer handlers.

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key cannot be mapped onto the backing store
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Backend-specific failure
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<tempfile::PersistError> for StoreError {
    fn from(err: tempfile::PersistError) -> Self {
        StoreError::Io(err.error)
    }
}
