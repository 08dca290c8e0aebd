//! Type class traits shared by every container in the crate.
//!
//! - [`Functor`]: Mapping over container values
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them.
//!
//! The asynchronous containers (`Deferred`, `DeferredResult`) are re-runnable
//! and need `Fn + Send + Sync` functions, so they expose the same operations
//! as inherent methods instead of implementing these `FnOnce`-based traits.
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::{Either, Maybe};
//! use fp_kit::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::just(21)), Maybe::just(42));
//! assert_eq!(double_all(Either::<String, i32>::of(4)), Either::of(8));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
