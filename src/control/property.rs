//! Keyed lookups that never fail loudly.
//!
//! [`Property`] abstracts "look up a key in an object" over maps, sequences,
//! optional values and (with the `serde` feature) JSON documents. A missing
//! key and a JSON `null` are both absence.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use fp_kit::control::{prop, prop_or, Maybe};
//!
//! let config = HashMap::from([("port", 8080)]);
//! assert_eq!(prop("port", &config), Maybe::just(8080));
//! assert_eq!(prop_or("timeout", 30, &config), 30);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::maybe::Maybe;

/// Objects that can be queried by key.
///
/// `property` returns an owned copy of the value stored under `key`, or
/// `None` when there is nothing there.
pub trait Property<K: ?Sized> {
    /// The type of value stored under a key.
    type Value;

    /// Looks up `key`.
    fn property(&self, key: &K) -> Option<Self::Value>;
}

// =============================================================================
// Collection Implementations
// =============================================================================

impl<Q, K, V, S> Property<Q> for HashMap<K, V, S>
where
    Q: Hash + Eq + ?Sized,
    K: Borrow<Q> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn property(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<Q, K, V> Property<Q> for BTreeMap<K, V>
where
    Q: Ord + ?Sized,
    K: Borrow<Q> + Ord,
    V: Clone,
{
    type Value = V;

    fn property(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<T: Clone> Property<usize> for [T] {
    type Value = T;

    fn property(&self, key: &usize) -> Option<T> {
        self.get(*key).cloned()
    }
}

impl<T: Clone> Property<usize> for Vec<T> {
    type Value = T;

    fn property(&self, key: &usize) -> Option<T> {
        self.as_slice().property(key)
    }
}

impl<K: ?Sized, O: Property<K>> Property<K> for Option<O> {
    type Value = O::Value;

    fn property(&self, key: &K) -> Option<O::Value> {
        self.as_ref().and_then(|object| object.property(key))
    }
}

impl<K: ?Sized, O: Property<K>> Property<K> for Maybe<O> {
    type Value = O::Value;

    fn property(&self, key: &K) -> Option<O::Value> {
        self.as_ref().into_option().and_then(|object| object.property(key))
    }
}

impl<K: ?Sized, O: Property<K> + ?Sized> Property<K> for &O {
    type Value = O::Value;

    fn property(&self, key: &K) -> Option<O::Value> {
        (**self).property(key)
    }
}

// =============================================================================
// JSON Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl Property<str> for serde_json::Value {
    type Value = Self;

    fn property(&self, key: &str) -> Option<Self> {
        self.get(key).filter(|value| !value.is_null()).cloned()
    }
}

#[cfg(feature = "serde")]
impl Property<String> for serde_json::Value {
    type Value = Self;

    fn property(&self, key: &String) -> Option<Self> {
        self.property(key.as_str())
    }
}

#[cfg(feature = "serde")]
impl Property<&str> for serde_json::Value {
    type Value = Self;

    fn property(&self, key: &&str) -> Option<Self> {
        self.property(*key)
    }
}

#[cfg(feature = "serde")]
impl Property<usize> for serde_json::Value {
    type Value = Self;

    fn property(&self, key: &usize) -> Option<Self> {
        self.get(*key).filter(|value| !value.is_null()).cloned()
    }
}

// =============================================================================
// Lookup Functions
// =============================================================================

/// Looks up `key` in `object`, lifting the result into `Maybe`.
///
/// # Examples
///
/// ```rust
/// use fp_kit::control::{prop, Maybe};
///
/// let scores = vec![10, 20, 30];
/// assert_eq!(prop(&1, &scores), Maybe::just(20));
/// assert_eq!(prop(&9, &scores), Maybe::nothing());
/// ```
pub fn prop<K, O>(key: &K, object: &O) -> Maybe<O::Value>
where
    K: ?Sized,
    O: Property<K> + ?Sized,
{
    Maybe::of(object.property(key))
}

/// Looks up `key` in `object`, falling back to `fallback` when absent.
pub fn prop_or<K, O>(key: &K, fallback: O::Value, object: &O) -> O::Value
where
    K: ?Sized,
    O: Property<K> + ?Sized,
{
    object.property(key).unwrap_or(fallback)
}

/// Looks up `key` in `object` without lifting into `Maybe`.
///
/// The caller deals with absence through the returned `Option`.
pub fn unsafe_prop<K, O>(key: &K, object: &O) -> Option<O::Value>
where
    K: ?Sized,
    O: Property<K> + ?Sized,
{
    object.property(key)
}

/// Curried [`prop`]: fixes the key, returns a lookup function.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fp_kit::control::{prop_by, Maybe};
///
/// let name = prop_by("name");
/// let user = HashMap::from([("name", "ada")]);
/// assert_eq!(name(&user), Maybe::just("ada"));
/// ```
pub fn prop_by<K, O>(key: &K) -> impl Fn(&O) -> Maybe<O::Value>
where
    K: ?Sized,
    O: Property<K> + ?Sized,
{
    move |object| prop(key, object)
}

/// Curried [`prop_or`]: fixes the key and the fallback.
pub fn prop_or_by<K, O>(key: &K, fallback: O::Value) -> impl Fn(&O) -> O::Value
where
    K: ?Sized,
    O: Property<K> + ?Sized,
    O::Value: Clone,
{
    move |object| prop_or(key, fallback.clone(), object)
}
