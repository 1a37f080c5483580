//! `assign`, `merge`, `concat` and `concat_deep`.

use crate::error::Result;
use crate::value::{ContainerKind, Key, Value, renumbered};

use super::fold_collections;

/// Shallow last-write-wins combination.
///
/// Every key of a later collection overwrites the same key of an earlier
/// one; sequence positions are keys too.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collections` is empty or holds a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::combinators::assign;
/// use lowbar::value;
///
/// let assigned = assign(&[value!({"a": 0}), value!({"a": 1, "b": 2}), value!({"c": 3})]).unwrap();
/// assert_eq!(assigned, value!({"a": 1, "b": 2, "c": 3}));
/// ```
pub fn assign(collections: &[Value]) -> Result<Value> {
    fold_collections("assign", collections, |source, destination| {
        overwrite(source, destination.clone())
    })
}

fn overwrite(source: &Value, mut destination: Value) -> Result<Value> {
    for (key, value) in source.entries().into_iter().flatten() {
        destination = destination.with_entry(key.into_owned(), value.clone())?;
    }
    Ok(destination)
}

/// Recursive last-write-wins combination.
///
/// Like [`assign`], except that when both sides hold a collection under the
/// same key, the two are merged instead of overwritten.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collections` is empty or holds a leaf.
pub fn merge(collections: &[Value]) -> Result<Value> {
    fold_collections("merge", collections, merge_into)
}

fn merge_into(source: &Value, destination: &Value) -> Result<Value> {
    let mut result = destination.clone();
    for (key, value) in source.entries().into_iter().flatten() {
        let merged = match result.entry(&key) {
            Some(existing) if existing.is_container() && value.is_container() => {
                merge_into(value, existing)?
            }
            _ => value.clone(),
        };
        result = result.with_entry(key.into_owned(), merged)?;
    }
    Ok(result)
}

/// Shallow appending combination.
///
/// Integer keys are appended and renumbered from zero; named keys are
/// overwritten in place by later collections. A result whose keys are
/// exactly `0..n-1` is a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collections` is empty or holds a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::combinators::concat;
/// use lowbar::value;
///
/// assert_eq!(concat(&[value!([1, 2, 3]), value!([4, 5])]).unwrap(), value!([1, 2, 3, 4, 5]));
/// assert_eq!(
///     concat(&[value!({"color": "red", 0: 3}), value!({0: 10, "color": "green"})]).unwrap(),
///     value!({"color": "green", 0: 3, 1: 10})
/// );
/// ```
pub fn concat(collections: &[Value]) -> Result<Value> {
    fold_collections("concat", collections, |source, destination| {
        Ok(append_entries(destination, source))
    })
}

fn append_entries(destination: &Value, source: &Value) -> Value {
    let family = destination.container_kind().unwrap_or(ContainerKind::Array);
    let entries = renumbered(
        destination
            .entries()
            .into_iter()
            .flatten()
            .chain(source.entries().into_iter().flatten()),
    );
    Value::from_entries(family, entries)
}

/// Recursive appending combination.
///
/// For each entry of a later collection:
///
/// - a key absent from the result is set
/// - an integer key already present is appended at the next position
/// - a named key already present combines both values recursively, leaves
///   becoming one-element sequences and `Null` an empty one
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collections` is empty or holds a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::combinators::concat_deep;
/// use lowbar::value;
///
/// let combined = concat_deep(&[
///     value!({"color": {"favorite": "red", 0: 5}, 0: 3}),
///     value!({0: 10, "color": {"favorite": "green", 0: "blue"}}),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     combined,
///     value!({"color": {"favorite": ["red", "green"], 0: 5, 1: "blue"}, 0: 3, 1: 10})
/// );
/// ```
pub fn concat_deep(collections: &[Value]) -> Result<Value> {
    fold_collections("concat_deep", collections, concat_deep_into)
}

fn concat_deep_into(source: &Value, destination: &Value) -> Result<Value> {
    let mut result = destination.clone();
    for (key, value) in source.entries().into_iter().flatten() {
        let existing = result.entry(&key).cloned();
        result = match existing {
            None => result.with_entry(key.into_owned(), value.clone())?,
            Some(_) if key.is_index() => append_one(result, value.clone())?,
            Some(existing) => {
                let combined = concat_deep_into(&as_collection(value), &as_collection(&existing))?;
                result.with_entry(key.into_owned(), combined)?
            }
        };
    }
    Ok(result)
}

fn append_one(collection: Value, value: Value) -> Result<Value> {
    if collection.is_object() {
        let position = collection.next_index();
        return collection.with_entry(Key::Index(position), value);
    }
    Ok(append_entries(&collection, &Value::sequence([value])))
}

fn as_collection(value: &Value) -> Value {
    match value {
        Value::Null => Value::empty_array(),
        container if container.is_container() => container.clone(),
        leaf => Value::sequence([leaf.clone()]),
    }
}
