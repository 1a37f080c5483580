//! The dynamic value model.
//!
//! Every operation of the crate works on [`Value`], a tagged variant that is
//! either a leaf (null, boolean, number, string, opaque reference) or one of
//! three container shapes:
//!
//! - [`Value::Seq`]: an ordered list with implicit keys `0..n-1`
//! - [`Value::Map`]: an array-like mapping from [`Key`] to value, in insertion order
//! - [`Value::Object`]: an attribute-bearing container with the same storage as `Map`
//!
//! `Seq` and `Map` are both *array-like*; `Object` is *object-like*.
//!
//! # Structural Sharing
//!
//! Containers keep their children behind a reference counter, so cloning a
//! value is O(1). Writes go through copy-on-write: the value being written to
//! is shallow-copied only when it is shared, and every child that is not on
//! the written path stays shared between the old and the new version.
//!
//! ```rust
//! use lowbar::{value, Value};
//!
//! let original = value!({"a": 1, "b": [1, 2]});
//! let copy = original.clone();
//! assert_eq!(original, copy);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::iter::Enumerate;
use std::slice;

use indexmap::IndexMap;

use crate::error::{Error, Result};

mod key;
mod macros;
mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;

pub use key::Key;
pub use predicates::{is_array, is_collection, is_null, is_number, is_object, is_string};

// =============================================================================
// Reference Counter and Hasher Type Aliases
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which makes
/// [`Value`] `Send + Sync`. Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Hasher used by mapping storage.
#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

/// Hasher used by mapping storage.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

/// Hasher used by mapping storage.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::collections::hash_map::RandomState;

/// Insertion-ordered storage of mappings and objects.
pub type Entries = IndexMap<Key, Value, KeyHasher>;

#[cfg(feature = "arc")]
type OpaqueTarget = dyn std::any::Any + Send + Sync;

#[cfg(not(feature = "arc"))]
type OpaqueTarget = dyn std::any::Any;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Value: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Value: Send, Sync);

// =============================================================================
// Opaque
// =============================================================================

/// An opaque shared reference carried as a leaf.
///
/// Opaque values are never traversed; two opaque values are equal only when
/// they point to the same allocation.
///
/// # Examples
///
/// ```rust
/// use lowbar::Value;
///
/// let handle = Value::opaque(String::from("connection"));
/// let same = handle.clone();
/// let other = Value::opaque(String::from("connection"));
///
/// assert_eq!(handle, same);
/// assert_ne!(handle, other);
/// ```
#[derive(Clone)]
pub struct Opaque(ReferenceCounter<OpaqueTarget>);

impl Opaque {
    /// Wraps a value into a new shared allocation.
    #[cfg(feature = "arc")]
    pub fn new<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Self(ReferenceCounter::new(value))
    }

    /// Wraps a value into a new shared allocation.
    #[cfg(not(feature = "arc"))]
    pub fn new<T: std::any::Any>(value: T) -> Self {
        Self(ReferenceCounter::new(value))
    }

    /// Returns the wrapped value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: std::any::Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Opaque({:p})", ReferenceCounter::as_ptr(&self.0).cast::<()>())
    }
}

// =============================================================================
// Kind
// =============================================================================

/// The variant tag of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Float`]
    Float,
    /// [`Value::Str`]
    Str,
    /// [`Value::Seq`]
    Seq,
    /// [`Value::Map`]
    Map,
    /// [`Value::Object`]
    Object,
    /// [`Value::Opaque`]
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Seq => "sequence",
            Self::Map => "mapping",
            Self::Object => "object",
            Self::Opaque => "opaque",
        };
        formatter.write_str(name)
    }
}

/// The two container families: array-like (`Seq`/`Map`) and object-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `Seq` or `Map`.
    Array,
    /// `Object`.
    Object,
}

impl ContainerKind {
    /// An empty container of this kind (`Seq` for arrays).
    #[must_use]
    pub fn empty(self) -> Value {
        match self {
            Self::Array => Value::empty_array(),
            Self::Object => Value::empty_object(),
        }
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically shaped value: a leaf or a container.
///
/// Equality follows the container semantics of the crate: array-like values
/// compare as key-to-value mappings regardless of whether they are stored as
/// `Seq` or `Map` and regardless of key order; objects compare the same way
/// but only with other objects; `Int(1)` and `Float(1.0)` are different.
///
/// # Examples
///
/// ```rust
/// use lowbar::{value, Value};
///
/// let sequence = value!(["b", "z"]);
/// let mapping = value!({1: "z", 0: "b"});
/// assert_eq!(sequence, mapping);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The null leaf.
    #[default]
    Null,
    /// A boolean leaf.
    Bool(bool),
    /// An integer leaf.
    Int(i64),
    /// A floating point leaf.
    Float(f64),
    /// A string leaf.
    Str(String),
    /// An ordered list with implicit keys `0..n-1`.
    Seq(ReferenceCounter<Vec<Self>>),
    /// An array-like mapping in insertion order.
    Map(ReferenceCounter<Entries>),
    /// An attribute-bearing container.
    Object(ReferenceCounter<Entries>),
    /// An opaque shared reference, treated as a leaf.
    Opaque(Opaque),
}

impl Value {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a sequence from its elements.
    pub fn sequence<I: IntoIterator<Item = Self>>(elements: I) -> Self {
        Self::Seq(ReferenceCounter::new(elements.into_iter().collect()))
    }

    /// Creates an array-like mapping from its entries, in order.
    pub fn mapping<K: Into<Key>, I: IntoIterator<Item = (K, Self)>>(entries: I) -> Self {
        Self::Map(ReferenceCounter::new(collect_entries(entries)))
    }

    /// Creates an object from its properties, in order.
    pub fn object<K: Into<Key>, I: IntoIterator<Item = (K, Self)>>(properties: I) -> Self {
        Self::Object(ReferenceCounter::new(collect_entries(properties)))
    }

    /// An empty sequence, the canonical empty array-like value.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::Seq(ReferenceCounter::new(Vec::new()))
    }

    /// An empty object.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::Object(ReferenceCounter::new(Entries::default()))
    }

    /// Wraps an arbitrary value as an opaque leaf.
    #[cfg(feature = "arc")]
    pub fn opaque<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Opaque::new(value))
    }

    /// Wraps an arbitrary value as an opaque leaf.
    #[cfg(not(feature = "arc"))]
    pub fn opaque<T: std::any::Any>(value: T) -> Self {
        Self::Opaque(Opaque::new(value))
    }

    /// Builds a container of the given kind from entries.
    ///
    /// Array-like entries whose keys are exactly `0..n-1` in order become a `Seq`.
    #[must_use]
    pub fn from_entries(kind: ContainerKind, entries: Entries) -> Self {
        match kind {
            ContainerKind::Object => Self::Object(ReferenceCounter::new(entries)),
            ContainerKind::Array if is_list_shaped(&entries) => {
                Self::Seq(ReferenceCounter::new(entries.into_values().collect()))
            }
            ContainerKind::Array => Self::Map(ReferenceCounter::new(entries)),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Seq(_) => Kind::Seq,
            Self::Map(_) => Kind::Map,
            Self::Object(_) => Kind::Object,
            Self::Opaque(_) => Kind::Opaque,
        }
    }

    /// Returns the container family, or `None` for leaves.
    #[must_use]
    pub const fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Self::Seq(_) | Self::Map(_) => Some(ContainerKind::Array),
            Self::Object(_) => Some(ContainerKind::Object),
            _ => None,
        }
    }

    /// Returns `true` for `Seq`, `Map` and `Object`.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.container_kind().is_some()
    }

    /// Returns `true` for `Seq` and `Map`.
    #[must_use]
    pub const fn is_array_like(&self) -> bool {
        matches!(self, Self::Seq(_) | Self::Map(_))
    }

    /// Returns `true` for `Object`.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Number of entries of a container, `None` for leaves.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Seq(elements) => Some(elements.len()),
            Self::Map(entries) | Self::Object(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns `true` for containers without entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty arrays are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::Str(text) => !(text.is_empty() || text == "0"),
            Self::Seq(elements) => !elements.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
            Self::Object(_) | Self::Opaque(_) => true,
        }
    }

    /// Returns the string slice of a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer of an `Int`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Int` or `Float`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean of a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the elements of a `Seq`.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Self]> {
        match self {
            Self::Seq(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the value stored under `key`, if this is a container holding it.
    #[must_use]
    pub fn entry(&self, key: &Key) -> Option<&Self> {
        match (self, key) {
            (Self::Seq(elements), Key::Index(index)) => {
                usize::try_from(*index).ok().and_then(|index| elements.get(index))
            }
            (Self::Map(entries) | Self::Object(entries), key) => entries.get(key),
            _ => None,
        }
    }

    /// Returns `true` when this container holds `key`, even if the stored value is `Null`.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entry(key).is_some()
    }

    /// Iterates over the `(key, value)` pairs of a container, `None` for leaves.
    #[must_use]
    pub fn entries(&self) -> Option<EntryIter<'_>> {
        match self {
            Self::Seq(elements) => Some(EntryIter::Sequence(elements.iter().enumerate())),
            Self::Map(entries) | Self::Object(entries) => Some(EntryIter::Mapping(entries.iter())),
            _ => None,
        }
    }

    /// Like [`Value::entries`], but reports leaves as [`Error::InvalidArgument`].
    pub(crate) fn try_entries(&self, operation: &'static str) -> Result<EntryIter<'_>> {
        self.entries()
            .ok_or_else(|| Error::invalid_argument(operation, self.expected_collection()))
    }

    /// Iterates over the values of a container in order; empty for leaves.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Self> {
        self.entries().into_iter().flatten().map(|(_, value)| value)
    }

    /// Copies the entries of a container into mapping storage (sequence indices become keys).
    #[must_use]
    pub fn to_entries(&self) -> Entries {
        self.entries()
            .into_iter()
            .flatten()
            .map(|(key, value)| (key.into_owned(), value.clone()))
            .collect()
    }

    /// The smallest index strictly greater than every integer key, `0` when there is none.
    #[must_use]
    pub fn next_index(&self) -> i64 {
        match self {
            Self::Seq(elements) => i64::try_from(elements.len()).unwrap_or(i64::MAX),
            Self::Map(entries) | Self::Object(entries) => next_index(entries),
            _ => 0,
        }
    }

    pub(crate) fn expected_collection(&self) -> String {
        format!("expected a collection, found {}", self.kind())
    }

    // =========================================================================
    // Copy-on-write Updates
    // =========================================================================

    /// Returns this container with `value` stored under `key`.
    ///
    /// Writing into a `Seq` replaces an existing index or appends at index
    /// `len`; any other key promotes the sequence to a `Map`.
    pub(crate) fn with_entry(mut self, key: Key, value: Self) -> Result<Self> {
        let position = key
            .as_index()
            .and_then(|index| usize::try_from(index).ok());
        if let Self::Seq(elements) = &self
            && position.is_none_or(|index| index > elements.len())
        {
            let mut entries = self.to_entries();
            entries.insert(key, value);
            return Ok(Self::Map(ReferenceCounter::new(entries)));
        }
        match &mut self {
            Self::Seq(elements) => match position {
                Some(index) if index < elements.len() => {
                    ReferenceCounter::make_mut(elements)[index] = value;
                }
                _ => ReferenceCounter::make_mut(elements).push(value),
            },
            Self::Map(entries) | Self::Object(entries) => {
                ReferenceCounter::make_mut(entries).insert(key, value);
            }
            _ => return Err(Error::invalid_argument("set", self.expected_collection())),
        }
        Ok(self)
    }

    /// Moves the value stored under `key` out of this container, leaving `Null` in place.
    pub(crate) fn take_entry(&mut self, key: &Key) -> Option<Self> {
        if !self.contains_key(key) {
            return None;
        }
        match (self, key) {
            (Self::Seq(elements), Key::Index(index)) => usize::try_from(*index)
                .ok()
                .and_then(|index| ReferenceCounter::make_mut(elements).get_mut(index))
                .map(std::mem::take),
            (Self::Map(entries) | Self::Object(entries), key) => ReferenceCounter::make_mut(entries)
                .get_mut(key)
                .map(std::mem::take),
            _ => None,
        }
    }
}

fn collect_entries<K: Into<Key>, I: IntoIterator<Item = (K, Value)>>(entries: I) -> Entries {
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

fn is_list_shaped(entries: &Entries) -> bool {
    entries
        .keys()
        .enumerate()
        .all(|(position, key)| key.as_index() == i64::try_from(position).ok())
}

pub(crate) fn next_index(entries: &Entries) -> i64 {
    entries
        .keys()
        .filter_map(Key::as_index)
        .max()
        .map_or(0, |largest| largest.saturating_add(1))
}

/// Collects entries the way an array slice keys them: integer keys are
/// renumbered from zero in order, named keys are kept.
pub(crate) fn renumbered<'a, I>(entries: I) -> Entries
where
    I: IntoIterator<Item = (Cow<'a, Key>, &'a Value)>,
{
    let mut next = 0_i64;
    entries
        .into_iter()
        .map(|(key, value)| {
            let key = if key.is_index() {
                next += 1;
                Key::Index(next - 1)
            } else {
                key.into_owned()
            };
            (key, value.clone())
        })
        .collect()
}

// =============================================================================
// Entry Iterator
// =============================================================================

/// Iterator over the `(key, value)` pairs of a container.
///
/// Sequence keys are produced on the fly; mapping keys are borrowed.
/// The iterator is double-ended, which is what
/// [`reverse_view`](crate::iterate::reverse_view) builds on.
#[derive(Debug, Clone)]
pub enum EntryIter<'a> {
    /// Entries of a `Seq`.
    Sequence(Enumerate<slice::Iter<'a, Value>>),
    /// Entries of a `Map` or `Object`.
    Mapping(indexmap::map::Iter<'a, Key, Value>),
}

fn sequence_entry((index, value): (usize, &Value)) -> (Cow<'_, Key>, &Value) {
    (Cow::Owned(Key::from(index)), value)
}

impl<'a> Iterator for EntryIter<'a> {
    type Item = (Cow<'a, Key>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(inner) => inner.next().map(sequence_entry),
            Self::Mapping(inner) => inner.next().map(|(key, value)| (Cow::Borrowed(key), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(inner) => inner.size_hint(),
            Self::Mapping(inner) => inner.size_hint(),
        }
    }
}

impl DoubleEndedIterator for EntryIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(inner) => inner.next_back().map(sequence_entry),
            Self::Mapping(inner) => inner
                .next_back()
                .map(|(key, value)| (Cow::Borrowed(key), value)),
        }
    }
}

impl ExactSizeIterator for EntryIter<'_> {}

// =============================================================================
// Equality
// =============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Opaque(left), Self::Opaque(right)) => left == right,
            (Self::Seq(left), Self::Seq(right)) => left == right,
            (Self::Object(_), Self::Object(_)) => same_entries(self, other),
            (left, right) if left.is_array_like() && right.is_array_like() => {
                same_entries(left, right)
            }
            _ => false,
        }
    }
}

fn same_entries(left: &Value, right: &Value) -> bool {
    left.len() == right.len()
        && left
            .entries()
            .into_iter()
            .flatten()
            .all(|(key, value)| right.entry(&key) == Some(value))
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::Opaque(_) => formatter.write_str("<opaque>"),
            Self::Seq(elements) => {
                formatter.write_str("[")?;
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Map(entries) | Self::Object(entries) => {
                if self.is_object() {
                    formatter.write_str("object ")?;
                }
                formatter.write_str("{")?;
                for (position, (key, value)) in entries.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    match key {
                        Key::Index(index) => write!(formatter, "{index}: {value}")?,
                        Key::Name(name) => write!(formatter, "{name:?}: {value}")?,
                    }
                }
                formatter.write_str("}")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Int(i64::try_from(number).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::Str(text.clone())
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        key.to_value()
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::sequence(elements.into_iter().map(Into::into))
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::sequence(iterator)
    }
}

impl FromIterator<(Key, Self)> for Value {
    fn from_iter<I: IntoIterator<Item = (Key, Self)>>(iterator: I) -> Self {
        Self::mapping(iterator)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_array_like_equality_ignores_representation_and_order() {
        let sequence = value!(["b", "z"]);
        let reordered = Value::mapping([(1, Value::from("z")), (0, Value::from("b"))]);
        assert_eq!(sequence, reordered);
        assert_eq!(reordered, sequence);
    }

    #[rstest]
    fn test_object_is_not_equal_to_mapping() {
        let mapping = value!({"a": 1});
        let object = value!(object {"a": 1});
        assert_ne!(mapping, object);
        assert_eq!(object, value!(object {"a": 1}));
    }

    #[rstest]
    fn test_int_and_float_are_distinct() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[rstest]
    fn test_with_entry_appends_to_sequence_at_length() {
        let sequence = value!([1, 2]);
        let appended = sequence.clone().with_entry(Key::Index(2), Value::Int(3)).unwrap();
        assert!(matches!(appended, Value::Seq(_)));
        assert_eq!(appended, value!([1, 2, 3]));
        assert_eq!(sequence, value!([1, 2]));
    }

    #[rstest]
    fn test_with_entry_promotes_sequence_on_named_key() {
        let sequence = value!([1]);
        let promoted = sequence.with_entry(Key::parse("name"), Value::Int(2)).unwrap();
        assert!(matches!(promoted, Value::Map(_)));
        assert_eq!(promoted, value!({0: 1, "name": 2}));
    }

    #[rstest]
    fn test_with_entry_rejects_leaves() {
        let result = Value::Int(3).with_entry(Key::Index(0), Value::Null);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[rstest]
    fn test_with_entry_shares_untouched_children() {
        let original = value!({"left": [1, 2], "right": [3]});
        let updated = original.clone().with_entry(Key::parse("right"), Value::Null).unwrap();
        match (original.entry(&Key::parse("left")), updated.entry(&Key::parse("left"))) {
            (Some(Value::Seq(before)), Some(Value::Seq(after))) => {
                assert!(ReferenceCounter::ptr_eq(before, after));
            }
            other => panic!("unexpected shapes: {other:?}"),
        }
    }

    #[rstest]
    fn test_from_entries_canonicalizes_list_shaped_arrays() {
        let entries: Entries = [(Key::Index(0), Value::Int(1)), (Key::Index(1), Value::Int(2))]
            .into_iter()
            .collect();
        assert!(matches!(
            Value::from_entries(ContainerKind::Array, entries.clone()),
            Value::Seq(_)
        ));
        assert!(matches!(
            Value::from_entries(ContainerKind::Object, entries),
            Value::Object(_)
        ));
    }

    #[rstest]
    fn test_entry_iterator_is_double_ended() {
        let mapping = value!({"a": 1, "b": 2, "c": 3});
        let keys: Vec<String> = mapping
            .entries()
            .unwrap()
            .rev()
            .map(|(key, _)| key.to_string())
            .collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[rstest]
    #[case(Value::Null, false)]
    #[case(Value::Int(0), false)]
    #[case(Value::from("0"), false)]
    #[case(Value::from(""), false)]
    #[case(Value::empty_array(), false)]
    #[case(Value::empty_object(), true)]
    #[case(Value::from("a"), true)]
    #[case(Value::Float(0.5), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_display() {
        let value = value!({"a": [1, "x", null], 3: (object {"b": true})});
        assert_eq!(
            format!("{value}"),
            r#"{"a": [1, "x", null], 3: object {"b": true}}"#
        );
    }

    #[rstest]
    fn test_next_index() {
        assert_eq!(value!([1, 2]).next_index(), 2);
        assert_eq!(value!({"a": 1, 7: 2}).next_index(), 8);
        assert_eq!(value!({"a": 1}).next_index(), 0);
    }
}
