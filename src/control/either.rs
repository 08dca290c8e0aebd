//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. `Right` is the success branch:
//! `map`, `chain` and `ap` only touch a `Right` and move a `Left` through
//! untouched, so the first failure of a pipeline is the one you get back.
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::Either;
//!
//! let parsed: Either<String, i32> = Either::try_catch(|| "41".parse::<i32>(), |e| e.to_string());
//! assert_eq!(parsed.map(|n| n + 1), Either::of(42));
//!
//! let failed: Either<String, i32> = Either::try_catch(|| "x".parse::<i32>(), |e| e.to_string());
//! let message = failed.fold(|error| format!("failed: {error}"), |n| n.to_string());
//! assert_eq!(message, "failed: invalid digit found in string");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::error::{ApplyError, PanicError, PropertyNotFound};
use super::property::Property;

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// There is no way to build a `Left` through [`Either::of`]: the neutral
/// constructor always produces `Right`, and [`Either::left`] is the only
/// way to produce a failure.
///
/// # Serialization
///
/// With the `serde` feature, `Right(v)` serializes as
/// `{"variant":"Right","$value":v}` and `Left(v)` as
/// `{"variant":"Left","$value":v}`.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::Either;
///
/// let success: Either<String, i32> = Either::of(42);
/// let failure: Either<String, i32> = Either::left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "variant", content = "$value")
)]
pub enum Either<L, R> {
    /// The failure branch.
    Left(L),
    /// The success branch.
    Right(R),
}

/// A type-erased unary function, the payload [`Either::ap_dyn`] expects.
pub type BoxedFn<A, B> = Box<dyn FnOnce(A) -> B + Send>;

/// Erases a function into a `Box<dyn Any + Send>` that [`Either::ap_dyn`]
/// can recover.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::{Either, erase_fn};
///
/// let function: Either<String, _> = Either::of(erase_fn(|x: i32| x + 1));
/// assert_eq!(function.ap_dyn::<i32, i32>(Either::of(1)), Either::of(2));
/// ```
pub fn erase_fn<A, B, F>(function: F) -> Box<dyn Any + Send>
where
    A: 'static,
    B: 'static,
    F: FnOnce(A) -> B + Send + 'static,
{
    let boxed: BoxedFn<A, B> = Box::new(function);
    Box::new(boxed)
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value in `Right`.
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// Wraps a failure value in `Left`.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Runs a fallible function, turning its error into a `Left` via
    /// `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let failing = || -> Result<i32, &str> { Err("boom") };
    /// assert_eq!(Either::try_catch(failing, str::to_string), Either::<String, i32>::left("boom".into()));
    /// ```
    #[inline]
    pub fn try_catch<E, F, M>(function: F, mapper: M) -> Self
    where
        F: FnOnce() -> Result<R, E>,
        M: FnOnce(E) -> L,
    {
        match function() {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(mapper(error)),
        }
    }

    /// Runs `function`, catching a panic and turning it into a `Left`.
    ///
    /// The panic payload is rendered into a [`PanicError`] and passed to
    /// `mapper`. The panic never propagates past this call, though the
    /// process panic hook still reports it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let caught: Either<String, i32> =
    ///     Either::try_catch_unwind(|| panic!("boom"), |error| error.message);
    /// assert_eq!(caught, Either::left("boom".to_string()));
    /// ```
    pub fn try_catch_unwind<F, M>(function: F, mapper: M) -> Self
    where
        F: FnOnce() -> R,
        M: FnOnce(PanicError) -> L,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Right(value),
            Err(payload) => {
                let error = PanicError::from_payload(payload.as_ref());
                tracing::debug!(message = %error.message, "caught panic");
                Self::Left(mapper(error))
            }
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Narrows to the failure payload, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.into_left(), Some(42));
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Narrows to the success payload, if any.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Borrows the failure payload, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the success payload, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows whichever payload is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let owned: Either<String, String> = Either::of("hello".to_string());
    /// assert_eq!(owned.as_ref().map(String::len), Either::of(5));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a `Right` value.
    ///
    /// A `Left` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::of("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map(|s| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Sequences an `Either`-returning function after a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let positive = |n: i32| if n > 0 { Either::of(n) } else { Either::left("not positive") };
    /// assert_eq!(Either::of(3).chain(positive), Either::of(3));
    /// assert_eq!(Either::of(-3).chain(positive), Either::left("not positive"));
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::chain`].
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.chain(function)
    }

    /// Applies a `Right` function to another `Either`.
    ///
    /// A `Left` on the function side wins; otherwise the result is
    /// `value.map(function)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let add = |a: i32| move |b: i32| a + b;
    /// let sum: Either<String, i32> = Either::of(add).ap(Either::of(1)).ap(Either::of(5));
    /// assert_eq!(sum, Either::of(6));
    /// ```
    #[inline]
    pub fn ap<A, T>(self, value: Either<L, A>) -> Either<L, T>
    where
        R: FnOnce(A) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(function) => value.map(function),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` with one function per branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the branches.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Property Access
    // =========================================================================

    /// Looks up `key` in a `Right` payload.
    ///
    /// A missing key (or a JSON `null`) becomes a `Left` carrying
    /// `'<key>' not found`; an existing `Left` is passed through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use fp_kit::control::Either;
    ///
    /// let record = HashMap::from([("name", "fp-kit")]);
    /// let found: Either<String, _> = Either::of(record.clone()).pluck("name");
    /// assert_eq!(found, Either::of("fp-kit"));
    ///
    /// let missing: Either<String, _> = Either::of(record).pluck("guff");
    /// assert_eq!(missing, Either::left("'guff' not found".to_string()));
    /// ```
    pub fn pluck<K>(self, key: &K) -> Either<L, R::Value>
    where
        K: ?Sized + fmt::Display,
        R: Property<K>,
        L: From<PropertyNotFound>,
    {
        self.chain(|object| {
            object
                .property(key)
                .map_or_else(|| Either::Left(L::from(PropertyNotFound::new(key))), Either::Right)
        })
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the payload of whichever branch is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let failure: Either<String, String> = Either::left("bad".to_string());
    /// assert_eq!(failure.get(), "bad");
    /// ```
    #[inline]
    pub fn get(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L> Either<L, Box<dyn Any + Send>> {
    /// Applies a type-erased function to another `Either`.
    ///
    /// If the `Right` payload is not a [`BoxedFn<A, B>`] the result is
    /// `Left(ApplyError::NotAFunction)` converted into `L`. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use fp_kit::control::Either;
    ///
    /// let not_a_function: Either<String, Box<dyn Any + Send>> = Either::of(Box::new(5_i32));
    /// let result = not_a_function.ap_dyn::<i32, i32>(Either::of(1));
    /// assert_eq!(result, Either::left("value is not a function".to_string()));
    /// ```
    pub fn ap_dyn<A, B>(self, value: Either<L, A>) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        L: From<ApplyError>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(payload) => match payload.downcast::<BoxedFn<A, B>>() {
                Ok(function) => value.map(*function),
                Err(_) => Either::Left(L::from(ApplyError::NotAFunction)),
            },
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.into_left().unwrap_or_default()
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.right_or_default(), String::new());
    /// ```
    #[inline]
    pub fn right_or_default(self) -> R {
        self.into_right().unwrap_or_default()
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Point-free Functions
// =============================================================================

/// [`Either::of`] as a free function.
pub const fn of<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// [`Either::left`] as a free function.
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// [`Either::is_left`] as a free function.
pub const fn is_left<L, R>(either: &Either<L, R>) -> bool {
    either.is_left()
}

/// [`Either::is_right`] as a free function.
pub const fn is_right<L, R>(either: &Either<L, R>) -> bool {
    either.is_right()
}

/// Point-free [`Either::map`].
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::{either, Either};
/// use fp_kit::pipe;
///
/// let result = pipe!(Either::<String, i32>::of(2), either::map(|x| x * 5));
/// assert_eq!(result, Either::of(10));
/// ```
pub fn map<L, R, T, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<L, T>
where
    F: FnOnce(R) -> T,
{
    move |either| either.map(function)
}

/// Point-free [`Either::chain`].
pub fn chain<L, R, T, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<L, T>
where
    F: FnOnce(R) -> Either<L, T>,
{
    move |either| either.chain(function)
}

/// Point-free [`Either::ap`]: the function side is fixed first.
pub fn ap<L, A, T, F>(function: Either<L, F>) -> impl FnOnce(Either<L, A>) -> Either<L, T>
where
    F: FnOnce(A) -> T,
{
    move |value| function.ap(value)
}

/// Point-free [`Either::fold`].
pub fn fold<L, R, T, F, G>(left_function: F, right_function: G) -> impl FnOnce(Either<L, R>) -> T
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> T,
{
    move |either| either.fold(left_function, right_function)
}

/// Point-free [`Either::pluck`].
pub fn pluck<L, R, K>(key: &K) -> impl FnOnce(Either<L, R>) -> Either<L, R::Value>
where
    K: ?Sized + fmt::Display,
    R: Property<K>,
    L: From<PropertyNotFound>,
{
    move |either| either.pluck(key)
}
