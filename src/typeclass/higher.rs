//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the constructor through a generic associated
//! type so that `Functor`, `Applicative` and `Monad` can be written once for
//! every container in the crate.
//!
//! # Example
//!
//! ```rust
//! use fp_kit::control::Maybe;
//! use fp_kit::typeclass::TypeConstructor;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::just(42);
//! let absent: Maybe<String> = absent_like(present);
//! assert!(absent.is_nothing());
//! ```

use crate::control::{Either, Maybe, NonEmptyList};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Either<String, i32>` it is the
    /// success type `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is a type constructor in its success (right) parameter; the
/// failure type is fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<A> TypeConstructor for NonEmptyList<A> {
    type Inner = A;
    type WithType<B> = NonEmptyList<B>;
}
