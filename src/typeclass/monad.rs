//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! Left Identity:  pure(a).flat_map(f) == f(a)
//! Right Identity: m.flat_map(pure) == m
//! Associativity:  m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::Maybe;
//! use fp_kit::typeclass::Monad;
//!
//! let halved = Maybe::just(10).flat_map(|n| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() });
//! assert_eq!(halved, Maybe::just(5));
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Maybe};

/// A type class for applicatives whose next computation may depend on the
/// result of the previous one.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is `chain` on the concrete containers.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// A failed `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    /// use fp_kit::typeclass::Monad;
    ///
    /// let failed: Either<&str, i32> = Either::left("nope");
    /// assert_eq!(failed.then(Either::of("next")), Either::left("nope"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}
