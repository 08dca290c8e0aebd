//! Asynchronous containers.
//!
//! - [`Deferred`]: a lazy, re-runnable computation that rejects with `E` or
//!   resolves with `A`
//! - [`DeferredResult`]: a `Deferred` whose resolved value is always an
//!   [`Either`](crate::control::Either)
//!
//! Both are built on plain `futures` combinators and need no particular
//! runtime. Computations receive single-shot [`Reject`]/[`Resolve`]
//! callbacks; a run settles at most once.
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use fp_kit::control::Either;
//! use fp_kit::effect::{Deferred, DeferredResult};
//!
//! let lookup: Deferred<String, i32> = Deferred::of(20).chain(|x| Deferred::of(x + 1));
//! let total = DeferredResult::from_deferred(lookup).map(|x| x * 2);
//! assert_eq!(block_on(total.run()), Either::of(42));
//! ```
//!
//! The [`deferred`] and [`deferred_result`] submodules hold the point-free
//! forms of the combinators.

mod callback;
pub mod deferred;
pub mod deferred_result;

pub use callback::{Reject, Resolve, callbacks, settle};
pub use deferred::Deferred;
pub use deferred_result::{DeferredResult, RunIfValid};
