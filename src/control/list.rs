//! Non-empty list.
//!
//! [`NonEmptyList`] is a sequence with at least one element, so `head` is
//! total. It is the container `concat`, `map`, `flat_map` and `flatten` are
//! most often demonstrated on.
//!
//! # Examples
//!
//! ```rust
//! use fp_kit::control::NonEmptyList;
//!
//! let list = NonEmptyList::new(1, vec![2, 3]);
//! let doubled = list.map(|n| n * 2);
//! assert_eq!(doubled.head(), &2);
//! assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
//! ```

use std::fmt;

use super::maybe::Maybe;

/// A list holding at least one element.
///
/// # Serialization
///
/// With the `serde` feature the list serializes as a plain sequence.
/// Deserializing an empty sequence fails.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyList<T> {
    /// Creates a single-element list.
    #[inline]
    pub const fn of(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Creates a list from its first element and the rest.
    #[inline]
    pub const fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Creates a list from a `Vec`, or `Nothing` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::{Maybe, NonEmptyList};
    ///
    /// assert_eq!(NonEmptyList::from_vec(vec![1, 2]), Maybe::just(NonEmptyList::new(1, vec![2])));
    /// assert_eq!(NonEmptyList::<i32>::from_vec(Vec::new()), Maybe::nothing());
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Maybe<Self> {
        let mut elements = elements.into_iter();
        Maybe::of(elements.next()).map(|head| Self::new(head, elements.collect()))
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Consumes the list, keeping only the first element.
    #[inline]
    pub fn into_head(self) -> T {
        self.head
    }

    /// Number of elements; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Converts into a `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }

    /// Appends `other` after `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::NonEmptyList;
    ///
    /// let joined = NonEmptyList::of(1).concat(NonEmptyList::new(2, vec![3]));
    /// assert_eq!(joined.into_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Applies `function` to every element.
    pub fn map<U, F>(self, mut function: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> U,
    {
        let head = function(self.head);
        NonEmptyList::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Maps every element to a list and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_kit::control::NonEmptyList;
    ///
    /// let list = NonEmptyList::new(1, vec![2]);
    /// let expanded = list.flat_map(|n| NonEmptyList::new(n, vec![n * 10]));
    /// assert_eq!(expanded.into_vec(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<U, F>(self, mut function: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> NonEmptyList<U>,
    {
        let first = function(self.head);
        self.tail
            .into_iter()
            .fold(first, |accumulated, element| accumulated.concat(function(element)))
    }
}

impl<T> NonEmptyList<NonEmptyList<T>> {
    /// Concatenates a list of lists.
    pub fn flatten(self) -> NonEmptyList<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}", self.head)?;
        for element in &self.tail {
            write!(formatter, ", {element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct NonEmptyListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for NonEmptyListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = NonEmptyList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-empty sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let head = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut tail = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            tail.push(element);
        }
        Ok(NonEmptyList::new(head, tail))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmptyList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(NonEmptyListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_has_one_element() {
        let list = NonEmptyList::of('a');
        assert_eq!(list.len(), 1);
        assert!(list.tail().is_empty());
    }

    #[rstest]
    fn test_flatten() {
        let nested = NonEmptyList::new(NonEmptyList::of(1), vec![NonEmptyList::new(2, vec![3])]);
        assert_eq!(nested.flatten().into_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(NonEmptyList::new(1, vec![2, 3]).to_string(), "[1, 2, 3]");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_plain_array() {
        let list = NonEmptyList::new(1, vec![2]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2]");
        assert_eq!(serde_json::from_str::<NonEmptyList<i32>>("[1,2]").unwrap(), list);
        assert!(serde_json::from_str::<NonEmptyList<i32>>("[]").is_err());
    }
}
