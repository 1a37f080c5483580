//! Folding collections into a single value.
//!
//! - [`fold`] / [`fold_right`]: accumulate into any type from an explicit initial value
//! - [`try_fold`] / [`try_fold_right`]: the same with a fallible callback
//! - [`reduce`] / [`reduce_right`]: accumulate into a [`Value`], seeding from the
//!   first (or last) entry when no accumulator is given
//!
//! Every callback receives `(accumulator, value, key, collection)`, where
//! `collection` is always the original, unmodified collection.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::iterate::{reduce, reduce_right};
//! use lowbar::{value, Value};
//!
//! let concatenate = |word: Value, character: &Value, _: &_, _: &_| {
//!     Value::from(format!(
//!         "{}{}",
//!         word.as_str().unwrap_or_default(),
//!         character.as_str().unwrap_or_default()
//!     ))
//! };
//!
//! let letters = value!(["a", "b", "c"]);
//! assert_eq!(reduce(&letters, concatenate, None).unwrap(), value!("abc"));
//! assert_eq!(reduce_right(&letters, concatenate, Some(value!(""))).unwrap(), value!("cba"));
//! ```

use std::borrow::Cow;

use crate::error::Result;
use crate::value::{Key, Value};

/// Folds the entries from first to last.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
pub fn fold<A, F>(collection: &Value, init: A, mut function: F) -> Result<A>
where
    F: FnMut(A, &Value, &Key, &Value) -> A,
{
    let entries = collection.try_entries("fold")?;
    Ok(entries.fold(init, |accumulator, (key, value)| {
        function(accumulator, value, &key, collection)
    }))
}

/// Folds the entries from last to first.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
pub fn fold_right<A, F>(collection: &Value, init: A, mut function: F) -> Result<A>
where
    F: FnMut(A, &Value, &Key, &Value) -> A,
{
    let entries = collection.try_entries("fold_right")?;
    Ok(entries.rfold(init, |accumulator, (key, value)| {
        function(accumulator, value, &key, collection)
    }))
}

/// Folds the entries from first to last, stopping at the first error.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf, or the first error returned by `function`.
pub fn try_fold<A, F>(collection: &Value, init: A, mut function: F) -> Result<A>
where
    F: FnMut(A, &Value, &Key, &Value) -> Result<A>,
{
    let mut entries = collection.try_entries("fold")?;
    entries.try_fold(init, |accumulator, (key, value)| {
        function(accumulator, value, &key, collection)
    })
}

/// Folds the entries from last to first, stopping at the first error.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf, or the first error returned by `function`.
pub fn try_fold_right<A, F>(collection: &Value, init: A, mut function: F) -> Result<A>
where
    F: FnMut(A, &Value, &Key, &Value) -> Result<A>,
{
    let mut entries = collection.try_entries("fold_right")?.rev();
    entries.try_fold(init, |accumulator, (key, value)| {
        function(accumulator, value, &key, collection)
    })
}

/// Reduces a collection from first to last.
///
/// Without an accumulator, the first entry is the seed and the callback runs
/// over the remaining entries with their original keys. An empty collection
/// without an accumulator reduces to `Value::Null`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::iterate::reduce;
/// use lowbar::{value, Value};
///
/// let add = |sum: Value, element: &Value, _: &_, _: &_| {
///     Value::from(sum.as_i64().unwrap_or(0) + element.as_i64().unwrap_or(0))
/// };
///
/// assert_eq!(reduce(&value!([1, 2, 3]), add, Some(value!(2))).unwrap(), value!(8));
/// assert_eq!(reduce(&value!([2]), add, None).unwrap(), value!(2));
/// assert_eq!(reduce(&value!([]), add, None).unwrap(), Value::Null);
/// ```
pub fn reduce<F>(collection: &Value, mut function: F, accumulator: Option<Value>) -> Result<Value>
where
    F: FnMut(Value, &Value, &Key, &Value) -> Value,
{
    let entries = collection.try_entries("reduce")?;
    Ok(reduce_entries(entries, accumulator, |accumulator, value, key| {
        Ok(function(accumulator, value, key, collection))
    })?
    .unwrap_or_default())
}

/// Reduces a collection from last to first.
///
/// Without an accumulator, the last entry is the seed.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf.
pub fn reduce_right<F>(
    collection: &Value,
    mut function: F,
    accumulator: Option<Value>,
) -> Result<Value>
where
    F: FnMut(Value, &Value, &Key, &Value) -> Value,
{
    let entries = collection.try_entries("reduce_right")?.rev();
    Ok(reduce_entries(entries, accumulator, |accumulator, value, key| {
        Ok(function(accumulator, value, key, collection))
    })?
    .unwrap_or_default())
}

/// Like [`reduce_right`], with a fallible callback.
///
/// The variadic combinators fold their argument lists with this: the
/// rightmost argument seeds the fold and each step combines it with the
/// argument to its left.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `collection` is a leaf, or the first error returned by `function`.
pub fn try_reduce_right<F>(
    collection: &Value,
    mut function: F,
    accumulator: Option<Value>,
) -> Result<Value>
where
    F: FnMut(Value, &Value, &Key, &Value) -> Result<Value>,
{
    let entries = collection.try_entries("reduce_right")?.rev();
    Ok(reduce_entries(entries, accumulator, |accumulator, value, key| {
        function(accumulator, value, key, collection)
    })?
    .unwrap_or_default())
}

fn reduce_entries<'a, I, F>(
    mut entries: I,
    accumulator: Option<Value>,
    mut function: F,
) -> Result<Option<Value>>
where
    I: Iterator<Item = (Cow<'a, Key>, &'a Value)>,
    F: FnMut(Value, &Value, &Key) -> Result<Value>,
{
    let seed = match accumulator {
        Some(seed) => seed,
        None => match entries.next() {
            Some((_, first)) => first.clone(),
            None => return Ok(None),
        },
    };
    entries
        .try_fold(seed, |accumulator, (key, value)| function(accumulator, value, &key))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    fn add(sum: Value, element: &Value, _: &Key, _: &Value) -> Value {
        Value::from(sum.as_i64().unwrap_or(0) + element.as_i64().unwrap_or(0))
    }

    #[rstest]
    fn test_reduce_sums_large_sequence_without_seed() {
        let populations = value!([10_659_489, 1_578_484, 1_620_331, 935_440, 944_022, 1_037_939]);
        assert_eq!(reduce(&populations, add, None).unwrap(), value!(16_775_705));
    }

    #[rstest]
    fn test_reduce_without_seed_skips_first_key() {
        let mut keys = Vec::new();
        reduce(
            &value!([5, 6, 7]),
            |accumulator, _, key, _| {
                keys.push(key.clone());
                accumulator
            },
            None,
        )
        .unwrap();
        assert_eq!(keys, vec![Key::Index(1), Key::Index(2)]);
    }

    #[rstest]
    fn test_reduce_seeded_visits_every_key() {
        let mut keys = Vec::new();
        reduce(
            &value!([5, 6, 7]),
            |accumulator, _, key, _| {
                keys.push(key.clone());
                accumulator
            },
            Some(Value::Null),
        )
        .unwrap();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
    }

    #[rstest]
    fn test_reduce_mapping_seeds_from_first_inserted_key() {
        let cities = value!({"paris": 1, "marseille": 2, "lyon": 3});
        assert_eq!(reduce(&cities, add, None).unwrap(), value!(6));
        assert_eq!(reduce(&cities, add, Some(value!(0))).unwrap(), value!(6));
    }

    #[rstest]
    fn test_reduce_right_seeds_from_last() {
        let mut order = Vec::new();
        let result = reduce_right(
            &value!([1, 2, 3]),
            |accumulator, value, _, _| {
                order.push(value.clone());
                accumulator
            },
            None,
        )
        .unwrap();
        assert_eq!(result, value!(3));
        assert_eq!(order, vec![value!(2), value!(1)]);
    }

    #[rstest]
    fn test_fold_right_generic_accumulator() {
        let keys = fold_right(&value!({"a": 1, "b": 2}), String::new(), |mut text, _, key, _| {
            text.push_str(&key.to_string());
            text
        })
        .unwrap();
        assert_eq!(keys, "ba");
    }

    #[rstest]
    fn test_try_fold_stops_at_first_error() {
        let mut visited = 0;
        let result: Result<i64> = try_fold(&value!([1, 2, 3]), 0, |sum, value, _, _| {
            visited += 1;
            match value.as_i64() {
                Some(2) => Err(crate::Error::invalid_argument("test", "two")),
                Some(number) => Ok(sum + number),
                None => Ok(sum),
            }
        });
        assert!(result.is_err());
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn test_fold_rejects_leaves() {
        assert!(fold(&Value::Int(1), 0, |sum, _, _, _| sum).is_err());
        assert!(reduce(&Value::Null, add, None).is_err());
    }
}
