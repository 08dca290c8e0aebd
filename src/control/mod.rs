//! Synchronous containers.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a success (`Right`) or a failure (`Left`)
//! - [`NonEmptyList`]: a sequence with at least one element
//! - [`Property`]: keyed lookups that turn absence into `Nothing`
//!
//! The [`maybe`] and [`either`] submodules hold the point-free forms of the
//! combinators: each takes every argument except the container and returns a
//! function of the container.
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::{either, maybe, Either, Maybe};
//!
//! let add_one = maybe::map(|x: i32| x + 1);
//! assert_eq!(add_one(Maybe::just(1)), Maybe::just(2));
//!
//! let describe = either::fold(|error: String| error, |n: i32| n.to_string());
//! assert_eq!(describe(Either::of(7)), "7");
//! ```

pub mod either;
mod error;
mod list;
pub mod maybe;
mod property;

pub use either::{BoxedFn, Either, erase_fn};
pub use error::{ApplyError, EmptyAccessError, MaybeError, PanicError, PropertyNotFound};
pub use list::NonEmptyList;
pub use maybe::{Maybe, NOTHING, Nothing};
pub use property::{Property, prop, prop_by, prop_or, prop_or_by, unsafe_prop};
