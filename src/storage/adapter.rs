//! The `Either`-returning persistence adapter.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, StorageError};
use crate::control::Either;

/// JSON persistence over a [`KeyValueStore`] that never panics.
///
/// Every operation returns an [`Either`]: backend errors, JSON errors and
/// backend panics all become `Left(StorageError)`. Failures are logged at
/// `warn`, successes at `debug`.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::Either;
/// use fp_kit::storage::{MemoryStore, Storage};
///
/// let storage = Storage::new(MemoryStore::new());
/// assert_eq!(storage.set("answer", &42), Either::of(()));
/// assert_eq!(storage.get::<i32>("answer"), Either::of(42));
///
/// // a missing key reads as JSON `null`
/// assert_eq!(storage.get::<Option<i32>>("missing"), Either::of(None));
/// assert!(storage.get::<i32>("missing").is_left());
/// ```
#[derive(Debug, Default)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    /// Wraps a backend.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped backend.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the backend.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads and decodes the value stored under `key`.
    ///
    /// A missing key decodes from `null`, so it succeeds exactly for types
    /// that accept `null` (such as `Option<T>` or `()`).
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Either<StorageError, T> {
        let outcome = guarded(|| self.store.get_item(key)).chain(|raw| {
            Either::try_catch(
                || serde_json::from_str::<T>(raw.as_deref().unwrap_or("null")),
                StorageError::from,
            )
        });
        logged("get", key, outcome)
    }

    /// Encodes `value` as JSON and stores it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Either<StorageError, ()> {
        let outcome = Either::try_catch(|| serde_json::to_string(value), StorageError::from)
            .chain(|json| guarded(|| self.store.set_item(key, &json)));
        logged("set", key, outcome)
    }

    /// Removes `key`. Removing a missing key succeeds.
    pub fn remove(&self, key: &str) -> Either<StorageError, ()> {
        let outcome = guarded(|| self.store.remove_item(key));
        logged("remove", key, outcome)
    }
}

fn guarded<R, F>(operation: F) -> Either<StorageError, R>
where
    F: FnOnce() -> Result<R, StorageError>,
{
    Either::try_catch_unwind(operation, StorageError::from).chain(Either::from)
}

fn logged<R>(operation: &'static str, key: &str, outcome: Either<StorageError, R>) -> Either<StorageError, R> {
    match &outcome {
        Either::Left(error) => tracing::warn!(operation, key, reason = %error, "storage operation failed"),
        Either::Right(_) => tracing::debug!(operation, key, "storage operation succeeded"),
    }
    outcome
}
