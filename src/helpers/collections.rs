//! Collection helpers: traversal-based transforms and queries.
//!
//! Callbacks receive `(value, key, collection)` in iteration order, except
//! for [`map_keys`] which receives `(key, value, collection)` and
//! [`group_by`] which only sees the value.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::iterate::{for_each, try_fold};
use crate::path::{Path, get};
use crate::value::{ContainerKind, Entries, Key, KeyHasher, Value};

/// Keeps the values for which `predicate` returns `true`, as a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::filter;
/// use lowbar::value;
///
/// let even = filter(&value!([1, 2, 3, 4]), |value, _, _| value.as_i64().is_some_and(|n| n % 2 == 0));
/// assert_eq!(even.unwrap(), value!([2, 4]));
/// ```
pub fn filter<F>(collection: &Value, mut predicate: F) -> Result<Value>
where
    F: FnMut(&Value, &Key, &Value) -> bool,
{
    let mut kept = Vec::new();
    for_each(collection, |value, key, collection| {
        if predicate(value, key, collection) {
            kept.push(value.clone());
        }
    })?;
    Ok(Value::sequence(kept))
}

/// Applies `function` to every entry, collecting the results as a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::map;
/// use lowbar::{value, Value};
///
/// let doubled = map(&value!({"a": 1, "b": 2}), |value, _, _| Value::from(value.as_i64().unwrap_or(0) * 2));
/// assert_eq!(doubled.unwrap(), value!([2, 4]));
/// ```
pub fn map<F>(collection: &Value, mut function: F) -> Result<Value>
where
    F: FnMut(&Value, &Key, &Value) -> Value,
{
    let mut mapped = Vec::new();
    for_each(collection, |value, key, collection| {
        mapped.push(function(value, key, collection));
    })?;
    Ok(Value::sequence(mapped))
}

/// Applies `function` to every value, keeping keys and kind.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
pub fn map_values<F>(collection: &Value, mut function: F) -> Result<Value>
where
    F: FnMut(&Value, &Key, &Value) -> Value,
{
    let kind = container_kind(collection, "map_values")?;
    let entries = try_fold(collection, Entries::default(), |mut entries, value, key, collection| {
        entries.insert(key.clone(), function(value, key, collection));
        Ok(entries)
    })?;
    Ok(Value::from_entries(kind, entries))
}

/// Replaces every key with the result of `function(key, value, collection)`.
///
/// Later entries overwrite earlier ones that map to the same key.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf or when
/// `function` returns something other than an integer or a string.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::map_keys;
/// use lowbar::{value, Value};
///
/// let upper = map_keys(&value!({"x": 1}), |key, _, _| Value::from(key.to_string().to_uppercase()));
/// assert_eq!(upper.unwrap(), value!({"X": 1}));
/// ```
pub fn map_keys<F>(collection: &Value, mut function: F) -> Result<Value>
where
    F: FnMut(&Key, &Value, &Value) -> Value,
{
    let kind = container_kind(collection, "map_keys")?;
    let entries = try_fold(collection, Entries::default(), |mut entries, value, key, collection| {
        let mapped = function(key, value, collection);
        let mapped = Key::try_from(&mapped).map_err(|_| {
            Error::invalid_argument("map_keys", format!("{mapped} cannot be used as a key"))
        })?;
        entries.insert(mapped, value.clone());
        Ok(entries)
    })?;
    Ok(Value::from_entries(kind, entries))
}

/// Returns `true` when `predicate` holds for every entry.
///
/// Stops at the first entry that fails. An empty collection satisfies
/// every predicate.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
pub fn every<F>(collection: &Value, mut predicate: F) -> Result<bool>
where
    F: FnMut(&Value, &Key, &Value) -> bool,
{
    let mut satisfied = true;
    for_each(collection, |value, key, collection| {
        satisfied = predicate(value, key, collection);
        satisfied
    })?;
    Ok(satisfied)
}

/// Reads `path` out of every element.
///
/// An object yields an object with the same keys; anything else yields a
/// sequence. Elements missing the path contribute `Null`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::pluck;
/// use lowbar::value;
///
/// let people = value!([{"name": "Ana", "pet": {"kind": "cat"}}, {"name": "Bo"}]);
/// assert_eq!(pluck(&people, "pet.kind").unwrap(), value!(["cat", null]));
/// ```
pub fn pluck<P: Into<Path>>(collection: &Value, path: P) -> Result<Value> {
    let path = path.into();
    if collection.is_object() {
        return map_values(collection, |item, _, _| get(item, &path));
    }
    map(collection, |item, _, _| get(item, &path))
}

/// Keeps the elements matching every entry of `conditions`.
///
/// A leaf condition matches a loosely equal value (`1 == "1" == 1.0`,
/// `null == false`). A container condition matches a container holding at
/// least the condition's entries, recursively.
///
/// With `keep_keys` the original keys are preserved; otherwise the matches
/// are returned as a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when either argument is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::where_matches;
/// use lowbar::value;
///
/// let people = value!([
///     {"name": "Ana", "age": 27, "address": {"city": "Lyon", "zip": 69001}},
///     {"name": "Bo", "age": "27", "address": {"city": "Paris", "zip": 75001}},
/// ]);
/// assert_eq!(where_matches(&people, &value!({"age": 27}), false).unwrap().len(), Some(2));
/// assert_eq!(
///     where_matches(&people, &value!({"address": {"city": "Lyon"}}), false).unwrap(),
///     value!([{"name": "Ana", "age": 27, "address": {"city": "Lyon", "zip": 69001}}])
/// );
/// ```
pub fn where_matches(collection: &Value, conditions: &Value, keep_keys: bool) -> Result<Value> {
    conditions.try_entries("where")?;
    let matching = collection
        .try_entries("where")?
        .filter(|(_, element)| matches_conditions(element, conditions));
    if keep_keys {
        let entries = matching
            .map(|(key, element)| (key.into_owned(), element.clone()))
            .collect();
        let kind = collection.container_kind().unwrap_or(ContainerKind::Array);
        return Ok(Value::from_entries(kind, entries));
    }
    Ok(matching.map(|(_, element)| element.clone()).collect())
}

fn matches_conditions(element: &Value, conditions: &Value) -> bool {
    element.is_container()
        && conditions
            .entries()
            .into_iter()
            .flatten()
            .all(|(key, condition)| match element.entry(&key) {
                Some(candidate) if condition.is_container() => {
                    candidate.is_container() && matches_conditions(candidate, condition)
                }
                Some(candidate) => loosely_equal(candidate, condition),
                None => false,
            })
}

/// Equality across leaf types: numbers compare numerically, numeric strings
/// compare as numbers, booleans and `null` compare by truthiness.
pub(crate) fn loosely_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            left.as_f64() == right.as_f64()
        }
        (Value::Str(text), number @ (Value::Int(_) | Value::Float(_)))
        | (number @ (Value::Int(_) | Value::Float(_)), Value::Str(text)) => {
            text.trim().parse::<f64>().ok() == number.as_f64()
        }
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => *flag == other.is_truthy(),
        (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),
        _ => left == right,
    }
}

/// Groups the values by the key `function` computes for each of them.
///
/// The result maps each group key to the sequence of its values, in
/// first-seen order. Values whose computed key is `Null` are left out.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf or when a
/// computed key is neither `Null`, an integer nor a string.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::group_by;
/// use lowbar::path::get;
/// use lowbar::value;
///
/// let cities = value!([
///     {"city": "Lyon", "country": "FR"},
///     {"city": "Berlin", "country": "DE"},
///     {"city": "Paris", "country": "FR"},
///     {"city": "Atlantis"},
/// ]);
/// let grouped = group_by(&cities, |city| get(city, "country")).unwrap();
/// assert_eq!(
///     grouped,
///     value!({
///         "FR": [{"city": "Lyon", "country": "FR"}, {"city": "Paris", "country": "FR"}],
///         "DE": [{"city": "Berlin", "country": "DE"}],
///     })
/// );
/// ```
pub fn group_by<F>(collection: &Value, mut function: F) -> Result<Value>
where
    F: FnMut(&Value) -> Value,
{
    let mut groups: IndexMap<Key, Vec<Value>, KeyHasher> = IndexMap::default();
    for value in collection.try_entries("group_by")?.map(|(_, value)| value) {
        let group = function(value);
        if group.is_null() {
            continue;
        }
        let group = Key::try_from(&group).map_err(|_| {
            Error::invalid_argument("group_by", format!("{group} cannot be used as a group key"))
        })?;
        groups.entry(group).or_default().push(value.clone());
    }
    let entries = groups
        .into_iter()
        .map(|(key, values)| (key, Value::sequence(values)))
        .collect();
    Ok(Value::from_entries(ContainerKind::Array, entries))
}

/// Groups by the value at the first path, then each group by the next path.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf or when a
/// value found at a path cannot be used as a group key.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::group_by_paths;
/// use lowbar::path::Path;
/// use lowbar::value;
///
/// let rows = value!([
///     {"year": 2020, "type": "a"},
///     {"year": 2020, "type": "b"},
///     {"year": 2021, "type": "a"},
/// ]);
/// let grouped = group_by_paths(&rows, &[Path::from("year"), Path::from("type")]).unwrap();
/// assert_eq!(
///     grouped,
///     value!({
///         2020: {"a": [{"year": 2020, "type": "a"}], "b": [{"year": 2020, "type": "b"}]},
///         2021: {"a": [{"year": 2021, "type": "a"}]},
///     })
/// );
/// ```
pub fn group_by_paths(collection: &Value, paths: &[Path]) -> Result<Value> {
    let Some((first, remaining)) = paths.split_first() else {
        collection.try_entries("group_by")?;
        return Ok(collection.clone());
    };
    let grouped = group_by(collection, |value| get(value, first))?;
    if remaining.is_empty() {
        return Ok(grouped);
    }
    let entries = grouped
        .try_entries("group_by")?
        .map(|(key, group)| Ok((key.into_owned(), group_by_paths(group, remaining)?)))
        .collect::<Result<Entries>>()?;
    Ok(Value::from_entries(ContainerKind::Array, entries))
}

/// Returns `true` for empty collections and for every leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::is_empty;
/// use lowbar::value;
///
/// assert!(is_empty(&value!([])));
/// assert!(is_empty(&value!(null)));
/// assert!(!is_empty(&value!({"a": null})));
/// ```
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    value.len().is_none_or(|count| count == 0)
}

/// The number of entries of a collection.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
pub fn size(collection: &Value) -> Result<usize> {
    collection
        .len()
        .ok_or_else(|| Error::invalid_argument("size", collection.expected_collection()))
}

fn container_kind(collection: &Value, operation: &'static str) -> Result<ContainerKind> {
    collection
        .container_kind()
        .ok_or_else(|| Error::invalid_argument(operation, collection.expected_collection()))
}
