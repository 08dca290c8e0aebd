//! Key-value persistence that reports failure as data.
//!
//! [`KeyValueStore`] is the raw string backend; [`Storage`] layers JSON
//! encoding on top and turns every failure, including a panicking backend,
//! into `Left(StorageError)`.
//!
//! Backends:
//!
//! - [`MemoryStore`]: process-local, never fails
//! - [`DirectoryStore`]: one file per key under a root directory

mod adapter;
mod directory;
mod error;
mod memory;

use std::sync::Arc;

pub use adapter::Storage;
pub use directory::DirectoryStore;
pub use error::StorageError;
pub use memory::MemoryStore;

/// A string key-value backend.
///
/// `get_item` returns `Ok(None)` for a missing key; `remove_item` on a
/// missing key succeeds.
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Backend-specific read failures.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Backend-specific write failures.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Backend-specific write failures.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
