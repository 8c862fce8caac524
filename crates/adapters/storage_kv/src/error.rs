//! Storage-specific error type.

use std::path::PathBuf;

use hotelier_domain::error::HotelError;

/// Errors originating from the key-value storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing a slot file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a collection.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// The slot holds bytes that are not text.
    #[error("slot {key} holds undecodable content")]
    Corrupt { key: String },

    /// A writer panicked while holding the in-memory store.
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for HotelError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
