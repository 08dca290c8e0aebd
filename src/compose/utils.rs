//! Combinators for point-free code.
//!
//! - [`identity`], [`constant`], [`flip`]: the I, K and C combinators
//! - [`map`], [`chain`], [`ap`]: container-generic point-free forms of the
//!   type class operations, for code that does not care which container it
//!   is handed

use crate::typeclass::{Applicative, Functor, Monad};

/// Returns the value unchanged.
///
/// The unit of composition: `compose!(identity, f)` behaves like `f`.
///
/// # Examples
///
/// ```
/// use fp_kit::compose::identity;
/// use fp_kit::control::Maybe;
///
/// assert_eq!(Maybe::just(3).map(identity), Maybe::just(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns `value`.
///
/// # Examples
///
/// ```
/// use fp_kit::compose::constant;
/// use fp_kit::control::Either;
///
/// let success: Either<String, i32> = Either::of(1);
/// assert_eq!(success.map(constant("replaced")), Either::of("replaced"));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Examples
///
/// ```
/// use fp_kit::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// The placeholder type behind `__` in [`partial!`](crate::partial!).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The `partial!` placeholder.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

// =============================================================================
// Container-generic Point-free Functions
// =============================================================================

/// Point-free [`Functor::fmap`] for any functor.
///
/// # Examples
///
/// ```
/// use fp_kit::compose;
/// use fp_kit::control::{Either, Maybe};
///
/// assert_eq!(compose::map(|x: i32| x + 1)(Maybe::just(1)), Maybe::just(2));
/// assert_eq!(compose::map(|x: i32| x + 1)(Either::<String, i32>::of(1)), Either::of(2));
/// ```
pub fn map<M, B, F>(function: F) -> impl FnOnce(M) -> M::WithType<B>
where
    M: Functor,
    F: FnOnce(M::Inner) -> B,
{
    move |container| container.fmap(function)
}

/// Point-free [`Monad::flat_map`] for any monad.
pub fn chain<M, B, F>(function: F) -> impl FnOnce(M) -> M::WithType<B>
where
    M: Monad,
    F: FnOnce(M::Inner) -> M::WithType<B>,
{
    move |container| container.flat_map(function)
}

/// Point-free [`Applicative::apply`]: fixes the value side and waits for the
/// container holding the function.
///
/// # Examples
///
/// ```
/// use fp_kit::compose;
/// use fp_kit::control::Maybe;
///
/// let apply_to_two = compose::ap(Maybe::just(2));
/// assert_eq!(apply_to_two(Maybe::just(|x: i32| x * 21)), Maybe::just(42));
/// ```
pub fn ap<M, B, Output>(value: M::WithType<B>) -> impl FnOnce(M) -> M::WithType<Output>
where
    M: Applicative,
    M::Inner: FnOnce(B) -> Output,
{
    move |function| function.apply(value)
}
