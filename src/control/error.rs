//! Error types raised by the synchronous containers.
//!
//! None of these are thrown across the algebra: they are either returned as
//! data (`try_get`, `pluck`, `ap_dyn`, `try_catch_unwind`) or used as the
//! message of the single documented panic, `Maybe::unsafely_get`.

use thiserror::Error;

/// Raised when the value of a `Nothing` is requested.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::{EmptyAccessError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert_eq!(absent.try_get(), Err(EmptyAccessError));
/// assert_eq!(EmptyAccessError.to_string(), "Tried to `unsafely_get(Nothing)`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Tried to `unsafely_get(Nothing)`")]
pub struct EmptyAccessError;

/// Errors raised while constructing a `Maybe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaybeError {
    /// `Maybe::try_just` was given an absent value.
    #[error("Tried to construct `Just` with an absent value")]
    NullJust,
}

/// A keyed lookup found nothing (or a JSON `null`) under `key`.
///
/// The display text is exactly `'<key>' not found`. Failure types used with
/// `pluck` convert from this error, which `String` already does.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::PropertyNotFound;
///
/// let error = PropertyNotFound::new("guff");
/// assert_eq!(error.to_string(), "'guff' not found");
/// assert_eq!(String::from(error), "'guff' not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{key}' not found")]
pub struct PropertyNotFound {
    /// The key that was looked up.
    pub key: String,
}

impl PropertyNotFound {
    /// Creates the error for a missing `key`.
    pub fn new(key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl From<PropertyNotFound> for String {
    fn from(error: PropertyNotFound) -> Self {
        error.to_string()
    }
}

/// Invalid applicative usage detected at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// The payload on the function side of `ap_dyn` is not a function of the
    /// expected type.
    #[error("value is not a function")]
    NotAFunction,
}

impl From<ApplyError> for String {
    fn from(error: ApplyError) -> Self {
        error.to_string()
    }
}

/// A panic captured by `Either::try_catch_unwind`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("panicked: {message}")]
pub struct PanicError {
    /// The panic payload rendered as text.
    pub message: String,
}

impl PanicError {
    /// Renders a panic payload.
    ///
    /// `&str` and `String` payloads keep their text; anything else becomes
    /// `"Box<dyn Any>"`.
    pub fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());
        Self { message }
    }
}
