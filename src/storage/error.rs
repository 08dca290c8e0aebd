//! Storage error type.

use thiserror::Error;

use crate::control::PanicError;

/// Why a storage operation failed.
///
/// The display text is the reason reported in the `Left` of every failed
/// [`Storage`](super::Storage) call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The key cannot be stored by this backend.
    #[error("invalid key '{0}'")]
    InvalidKey(String),

    /// The backend failed to read or write.
    #[error("backend error: {0}")]
    Backend(String),

    /// The value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backend panicked.
    #[error("backend panicked: {0}")]
    Panicked(String),
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        Self::Backend(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<PanicError> for StorageError {
    fn from(error: PanicError) -> Self {
        Self::Panicked(error.message)
    }
}
