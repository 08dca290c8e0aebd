//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. It plays the role of a
//! nullable reference without any null checks: every operation on a
//! `Nothing` short-circuits and the supplied function is never called.
//!
//! All `Nothing` values are equal, whatever their type parameter, and the
//! [`NOTHING`] marker converts into a `Maybe<T>` for every `T`.
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::Maybe;
//!
//! let present = Maybe::of(Some(42)).map(|x| x + 1);
//! assert_eq!(present.get_or(0), 43);
//!
//! let absent: Maybe<i32> = Maybe::of(None);
//! assert_eq!(absent.map(|x| x + 1).get_or(0), 0);
//!
//! let text = present.fold(|| "none".to_string(), |value| format!("got {value}"));
//! assert_eq!(text, "got 43");
//! ```
//!
//! # Point-free form
//!
//! The free functions of this module take the `Maybe` last and behave exactly
//! like the methods:
//!
//! ```rust
//! use fp_kit::control::{maybe, Maybe};
//!
//! let increment = maybe::map(|x: i32| x + 1);
//! assert_eq!(increment(Maybe::just(1)), Maybe::just(1).map(|x| x + 1));
//! ```

use std::fmt;

use super::error::{EmptyAccessError, MaybeError};
use super::property::{Property, prop};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Serialization
///
/// With the `serde` feature, `Just(v)` serializes as
/// `{"variant":"Just","value":v}` and `Nothing` as `{"variant":"Nothing"}`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "variant", content = "value")
)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    #[default]
    Nothing,
}

/// The absent value, independent of any type parameter.
///
/// Converts into `Maybe<T>::Nothing` for every `T` and compares equal to any
/// `Nothing`.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::{Maybe, NOTHING};
///
/// let numbers: Maybe<i32> = NOTHING.into();
/// let words: Maybe<String> = NOTHING.into();
/// assert_eq!(numbers, NOTHING);
/// assert_eq!(words, NOTHING);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Nothing;

/// The process-wide `Nothing` marker.
pub const NOTHING: Nothing = Nothing;

impl<T> From<Nothing> for Maybe<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::Nothing
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    #[inline]
    fn eq(&self, _: &Nothing) -> bool {
        self.is_nothing()
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a `Maybe` from a possibly absent value.
    ///
    /// `Some(v)` becomes `Just(v)`, `None` becomes `Nothing`. This is the
    /// null-tolerant constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::just(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::nothing());
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Wraps a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NullJust`] when `value` is `None`; use
    /// [`Maybe::of`] to turn absence into `Nothing` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::{Maybe, MaybeError};
    ///
    /// assert_eq!(Maybe::try_just(Some(3)), Ok(Maybe::just(3)));
    /// assert_eq!(Maybe::<i32>::try_just(None), Err(MaybeError::NullJust));
    /// ```
    #[inline]
    pub fn try_just(value: Option<T>) -> Result<Self, MaybeError> {
        value.map(Self::Just).ok_or(MaybeError::NullJust)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contained value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// `Nothing` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|x| x * 10), Maybe::just(20));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 10), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Maps a present value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Maps a present value, or computes a fallback lazily.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default(),
        }
    }

    /// Applies a `Maybe`-returning function to a present value without
    /// nesting the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::of(text.parse::<i32>().ok());
    /// assert_eq!(Maybe::just("12").chain(parse), Maybe::just(12));
    /// assert_eq!(Maybe::just("x").chain(parse), Maybe::nothing());
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`Maybe::chain`].
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.chain(function)
    }

    /// Applies a contained function to a contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Maybe;
    ///
    /// let add = |a: i32| move |b: i32| a + b;
    /// let sum = Maybe::just(add).ap(Maybe::just(1)).ap(Maybe::just(5));
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    #[inline]
    pub fn ap<A, U>(self, value: Maybe<A>) -> Maybe<U>
    where
        T: FnOnce(A) -> U,
    {
        match (self, value) {
            (Self::Just(function), Maybe::Just(argument)) => Maybe::Just(function(argument)),
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Returns `other` if `self` is present, otherwise `Nothing`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Just(_) => other,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    /// Returns `self` if present, otherwise computes a replacement.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the value, or computes a fallback lazily.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with ``Tried to `unsafely_get(Nothing)` `` on `Nothing`. This
    /// is the only operation of `Maybe` that can fail; see
    /// [`Maybe::try_get`] for the non-panicking form.
    #[inline]
    pub fn unsafely_get(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{EmptyAccessError}"),
        }
    }

    /// Returns the value, or [`EmptyAccessError`] on `Nothing`.
    ///
    /// # Errors
    ///
    /// Fails exactly when `self` is `Nothing`.
    #[inline]
    pub fn try_get(self) -> Result<T, EmptyAccessError> {
        self.into_option().ok_or(EmptyAccessError)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Maybe` with one function per variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(3).fold(|| 0, |x| x * 2), 6);
    /// assert_eq!(Maybe::<i32>::nothing().fold(|| 0, |x| x * 2), 0);
    /// ```
    #[inline]
    pub fn fold<U, N, J>(self, on_nothing: N, on_just: J) -> U
    where
        N: FnOnce() -> U,
        J: FnOnce(T) -> U,
    {
        self.map_or_else(on_nothing, on_just)
    }

    /// Structural equality: two `Just` with equal values, or two `Nothing`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self == other
    }

    // =========================================================================
    // Property Access
    // =========================================================================

    /// Looks up `key` in the contained value.
    ///
    /// Short-circuits to `Nothing` as soon as any link of a chain of lookups
    /// is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use fp_kit::control::Maybe;
    ///
    /// let inner = HashMap::from([("c", 3)]);
    /// let middle = HashMap::from([("b", inner)]);
    /// let outer = HashMap::from([("a", middle)]);
    ///
    /// let found = Maybe::just(outer.clone()).get("a").get("b").get("c");
    /// assert_eq!(found, Maybe::just(3));
    ///
    /// let missing = Maybe::just(outer).get("a").get("x").get("c");
    /// assert!(missing.is_nothing());
    /// ```
    #[inline]
    pub fn get<K>(self, key: &K) -> Maybe<T::Value>
    where
        K: ?Sized,
        T: Property<K>,
    {
        self.chain(|object| prop(key, &object))
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value, or `T::default()`.
    #[inline]
    pub fn get_or_default(self) -> T {
        self.get_or_else(T::default)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Point-free Functions
// =============================================================================

/// [`Maybe::of`] as a free function.
pub fn of<T>(value: Option<T>) -> Maybe<T> {
    Maybe::of(value)
}

/// [`Maybe::just`] as a free function.
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// [`Maybe::nothing`] as a free function.
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

/// [`Maybe::is_just`] as a free function.
pub const fn is_just<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_just()
}

/// [`Maybe::is_nothing`] as a free function.
pub const fn is_nothing<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_nothing()
}

/// Point-free [`Maybe::map`].
pub fn map<T, U, F>(function: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    move |maybe| maybe.map(function)
}

/// Point-free [`Maybe::map_or`].
pub fn map_or<T, U, F>(default: U, function: F) -> impl FnOnce(Maybe<T>) -> U
where
    F: FnOnce(T) -> U,
{
    move |maybe| maybe.map_or(default, function)
}

/// Point-free [`Maybe::map_or_else`].
pub fn map_or_else<T, U, D, F>(default: D, function: F) -> impl FnOnce(Maybe<T>) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    move |maybe| maybe.map_or_else(default, function)
}

/// Point-free [`Maybe::chain`].
pub fn chain<T, U, F>(function: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    move |maybe| maybe.chain(function)
}

/// Point-free [`Maybe::ap`]: the function side is fixed first.
pub fn ap<A, U, F>(function: Maybe<F>) -> impl FnOnce(Maybe<A>) -> Maybe<U>
where
    F: FnOnce(A) -> U,
{
    move |value| function.ap(value)
}

/// Point-free [`Maybe::and`].
pub fn and<T, U>(other: Maybe<U>) -> impl FnOnce(Maybe<T>) -> Maybe<U> {
    move |maybe| maybe.and(other)
}

/// Point-free [`Maybe::or`].
pub fn or<T>(other: Maybe<T>) -> impl FnOnce(Maybe<T>) -> Maybe<T> {
    move |maybe| maybe.or(other)
}

/// Point-free [`Maybe::or_else`].
pub fn or_else<T, F>(function: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce() -> Maybe<T>,
{
    move |maybe| maybe.or_else(function)
}

/// Point-free [`Maybe::get_or`].
pub fn get_or<T>(default: T) -> impl FnOnce(Maybe<T>) -> T {
    move |maybe| maybe.get_or(default)
}

/// Point-free [`Maybe::get_or_else`].
pub fn get_or_else<T, F>(function: F) -> impl FnOnce(Maybe<T>) -> T
where
    F: FnOnce() -> T,
{
    move |maybe| maybe.get_or_else(function)
}

/// Point-free [`Maybe::fold`].
pub fn fold<T, U, N, J>(on_nothing: N, on_just: J) -> impl FnOnce(Maybe<T>) -> U
where
    N: FnOnce() -> U,
    J: FnOnce(T) -> U,
{
    move |maybe| maybe.fold(on_nothing, on_just)
}

/// Point-free [`Maybe::equals`].
pub fn equals<T: PartialEq>(other: Maybe<T>) -> impl Fn(&Maybe<T>) -> bool {
    move |maybe| maybe.equals(&other)
}

/// [`Maybe::unsafely_get`] as a free function.
///
/// # Panics
///
/// Panics on `Nothing`.
pub fn unsafely_get<T>(maybe: Maybe<T>) -> T {
    maybe.unsafely_get()
}

/// Looks up `key` in an object, lifting the result into `Maybe`.
///
/// Curried form of [`prop`](super::property::prop): the key is fixed first.
pub fn property<K, O>(key: &K) -> impl Fn(&O) -> Maybe<O::Value>
where
    K: ?Sized,
    O: Property<K>,
{
    move |object| prop(key, object)
}
