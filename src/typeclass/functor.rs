//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::Maybe;
//! use fp_kit::typeclass::Functor;
//!
//! let present = Maybe::just(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::just("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe, NonEmptyList};

/// A type class for types that can have a function mapped over their contents.
///
/// The "bad" branch of a container (`Nothing`, `Left`) is carried through
/// untouched and the function is never invoked for it.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    /// use fp_kit::typeclass::Functor;
    ///
    /// let success: Either<String, i32> = Either::of(5);
    /// assert_eq!(success.fmap(|n| n * 2), Either::of(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Maybe;
    /// use fp_kit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert_eq!(Maybe::<i32>::nothing().replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// An extension of `Functor` for containers with multiple elements.
///
/// `Functor::fmap` takes a `FnOnce`; [`NonEmptyList`] needs to call the
/// function once per element.
pub trait FunctorMut: Functor {
    /// Applies a mutable function to each element in the functor.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

// =============================================================================
// NonEmptyList<A> Implementation
// =============================================================================

impl<A> Functor for NonEmptyList<A> {
    /// Maps a function over a list.
    ///
    /// `FnOnce` can only be called once, so this applies the function to the
    /// head and drops the tail. Use [`FunctorMut::fmap_mut`] for the
    /// element-wise map.
    #[inline]
    fn fmap<B, F>(self, function: F) -> NonEmptyList<B>
    where
        F: FnOnce(A) -> B,
    {
        NonEmptyList::of(function(self.into_head()))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> NonEmptyList<B>
    where
        F: FnOnce(&A) -> B,
    {
        NonEmptyList::of(function(self.head()))
    }
}

impl<A> FunctorMut for NonEmptyList<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> NonEmptyList<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, mut function: F) -> NonEmptyList<B>
    where
        F: FnMut(&A) -> B,
    {
        let head = function(self.head());
        NonEmptyList::new(head, self.tail().iter().map(function).collect())
    }
}
