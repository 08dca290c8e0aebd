//! # fp-kit
//!
//! Algebraic containers for representing "value or absence", "success or
//! failure" and "eventual value" uniformly, with one consistent set of
//! composition operations.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, the shared contract
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, `curry2!` macros
//! - **Control Structures**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`NonEmptyList`](control::NonEmptyList) and safe property access
//! - **Effects**: [`Deferred`](effect::Deferred) and
//!   [`DeferredResult`](effect::DeferredResult), lazy re-runnable async computations
//! - **Storage**: a key-value persistence adapter that reports every failure as `Either`
//!
//! ## Feature Flags
//!
//! - `async`: the `effect` module (`Deferred`, `DeferredResult`)
//! - `serde`: tagged serialization of `Maybe` and `Either`, JSON property access
//! - `storage`: the persistence adapter (implies `serde`)
//! - `full`: enable all features
//!
//! ## Point-free style
//!
//! Every combinator exists as a method and as a free function that takes the
//! container last:
//!
//! ```rust
//! use fp_kit::control::{maybe, Maybe};
//! use fp_kit::pipe;
//!
//! let direct = Maybe::just(41).map(|x| x + 1).get_or(0);
//! let piped = pipe!(Maybe::just(41), maybe::map(|x: i32| x + 1), maybe::get_or(0));
//! assert_eq!(direct, piped);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fp_kit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;

    #[cfg(feature = "storage")]
    pub use crate::storage::*;
}

pub mod compose;
pub mod control;
pub mod typeclass;

#[cfg(feature = "async")]
pub mod effect;

#[cfg(feature = "storage")]
pub mod storage;
