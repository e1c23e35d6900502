//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage backend refuses writes (disabled or read-only).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
