//! Function composition utilities.
//!
//! - [`compose!`]: compose functions right-to-left
//! - [`pipe!`]: apply functions left-to-right to a value
//! - [`partial!`]: partial application with `__` placeholders
//! - [`curry2!`] through [`curry4!`]: curried forms of multi-argument functions
//! - [`identity`], [`constant`], [`flip`]: basic combinators
//! - [`map`], [`chain`], [`ap`]: point-free type class operations for any
//!   container
//!
//! # Examples
//!
//! ```
//! use fp_kit::control::{maybe, Maybe};
//! use fp_kit::{compose, pipe};
//!
//! let shout = compose!(|s: String| s + "!", |s: &str| s.to_uppercase());
//! let greeting = pipe!(Maybe::just("hello"), maybe::map(shout), maybe::get_or_else(String::new));
//! assert_eq!(greeting, "HELLO!");
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Flip**: `flip(flip(f)) == f`
//! - **Pipe**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use utils::{__, Placeholder, ap, chain, constant, flip, identity, map};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
