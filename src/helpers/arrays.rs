//! Array helpers.
//!
//! Every helper takes its input by reference and returns a new value.
//! Helpers that renumber keep named keys and renumber integer keys from zero,
//! like slicing an array does.

use rand::Rng;

use crate::error::{Error, Result};
use crate::value::{ContainerKind, Key, Value, renumbered};

/// Appends `value` at the next integer position.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::append;
/// use lowbar::value;
///
/// assert_eq!(append(&value!([1, 2, 3]), value!(4)).unwrap(), value!([1, 2, 3, 4]));
/// ```
pub fn append(array: &Value, value: Value) -> Result<Value> {
    let position = array.next_index();
    array
        .clone()
        .with_entry(Key::Index(position), value)
        .map_err(|_| Error::invalid_argument("append", array.expected_collection()))
}

/// Inserts `value` at position zero, renumbering the integer keys.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::prepend;
/// use lowbar::value;
///
/// assert_eq!(prepend(&value!([1, 2, 3]), value!(4)).unwrap(), value!([4, 1, 2, 3]));
/// ```
pub fn prepend(array: &Value, value: Value) -> Result<Value> {
    let head = Value::sequence([value]);
    let entries = renumbered(
        head.try_entries("prepend")?
            .chain(array.try_entries("prepend")?),
    );
    Ok(Value::from_entries(ContainerKind::Array, entries))
}

/// Keeps the truthy values, as a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::compact;
/// use lowbar::value;
///
/// assert_eq!(compact(&value!([0, 1, false, 2, "", 3])).unwrap(), value!([1, 2, 3]));
/// ```
pub fn compact(array: &Value) -> Result<Value> {
    Ok(array
        .try_entries("compact")?
        .map(|(_, value)| value)
        .filter(|value| value.is_truthy())
        .cloned()
        .collect())
}

/// Flattens nested arrays into one sequence.
///
/// With `shallow`, only one level is flattened. Objects are not flattened.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::flatten;
/// use lowbar::value;
///
/// assert_eq!(flatten(&value!([1, 2, [3, [4]]]), false).unwrap(), value!([1, 2, 3, 4]));
/// assert_eq!(flatten(&value!([1, 2, [3, [[4]]]]), true).unwrap(), value!([1, 2, 3, [[4]]]));
/// ```
pub fn flatten(array: &Value, shallow: bool) -> Result<Value> {
    let mut output = Vec::new();
    flatten_into(&mut output, array.try_entries("flatten")?.map(|(_, value)| value), shallow);
    Ok(Value::sequence(output))
}

fn flatten_into<'a, I>(output: &mut Vec<Value>, values: I, shallow: bool)
where
    I: Iterator<Item = &'a Value>,
{
    for value in values {
        if !value.is_array_like() {
            output.push(value.clone());
        } else if shallow {
            output.extend(value.values().cloned());
        } else {
            flatten_into(output, value.values(), false);
        }
    }
}

/// Replaces values addressed by slash-separated paths.
///
/// `patches` maps paths like `"/contacts/country"` to replacement values.
/// Paths that address nothing are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` or `patches` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::patch;
/// use lowbar::value;
///
/// let patched = patch(
///     &value!({"addr": {"country": "US", "zip": 12345}}),
///     &value!({"/addr/country": "CA", "/addr/zip": 54321}),
/// )
/// .unwrap();
/// assert_eq!(patched, value!({"addr": {"country": "CA", "zip": 54321}}));
/// ```
pub fn patch(array: &Value, patches: &Value) -> Result<Value> {
    let patches = patches
        .try_entries("patch")?
        .map(|(key, value)| (key.to_string(), value))
        .collect::<Vec<_>>();
    patch_under(array, &patches, "")
}

fn patch_under(array: &Value, patches: &[(String, &Value)], parent: &str) -> Result<Value> {
    let mut patched = array.clone();
    for (key, value) in array.try_entries("patch")? {
        let path = format!("{parent}/{key}");
        let replacement = patches
            .iter()
            .find(|(target, _)| *target == path)
            .map(|(_, replacement)| (*replacement).clone());
        let updated = match replacement {
            Some(replacement) => replacement,
            None if value.is_array_like() => patch_under(value, patches, &path)?,
            None => continue,
        };
        patched = patched.with_entry(key.into_owned(), updated)?;
    }
    Ok(patched)
}

/// An inclusive range of integers from `start` to `stop` by `step`.
///
/// Without `stop`, the range goes from `1` to `start`. The direction follows
/// `start` and `stop`; only the magnitude of `step` is used.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `step` is zero.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::range;
/// use lowbar::value;
///
/// assert_eq!(range(5, None, 1).unwrap(), value!([1, 2, 3, 4, 5]));
/// assert_eq!(range(-2, Some(2), 1).unwrap(), value!([(-2), (-1), 0, 1, 2]));
/// assert_eq!(range(1, Some(10), 2).unwrap(), value!([1, 3, 5, 7, 9]));
/// ```
pub fn range(start: i64, stop: Option<i64>, step: i64) -> Result<Value> {
    if step == 0 {
        return Err(Error::invalid_argument("range", "step must not be zero"));
    }
    let (start, stop) = stop.map_or((1, start), |stop| (start, stop));
    let step = step.unsigned_abs();
    let mut values = Vec::new();
    let mut current = start;
    loop {
        if (start <= stop && current > stop) || (start > stop && current < stop) {
            break;
        }
        values.push(Value::Int(current));
        let next = if start <= stop {
            current.checked_add_unsigned(step)
        } else {
            current.checked_sub_unsigned(step)
        };
        match next {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(Value::sequence(values))
}

/// A sequence holding `times` copies of `value`.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::repeat;
/// use lowbar::value;
///
/// assert_eq!(repeat(&value!("foo"), 3), value!(["foo", "foo", "foo"]));
/// assert_eq!(repeat(&value!("foo"), 0), value!([]));
/// ```
#[must_use]
pub fn repeat(value: &Value, times: usize) -> Value {
    Value::sequence(std::iter::repeat_n(value.clone(), times))
}

/// Splits an array into groups of `size` entries; the last group holds the rest.
///
/// With `preserve_keys`, each group keeps the original keys; otherwise each
/// group is a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf or `size` is zero.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::chunk;
/// use lowbar::value;
///
/// assert_eq!(chunk(&value!([1, 2, 3, 4, 5]), 3, false).unwrap(), value!([[1, 2, 3], [4, 5]]));
/// ```
pub fn chunk(array: &Value, size: usize, preserve_keys: bool) -> Result<Value> {
    if size == 0 {
        return Err(Error::invalid_argument("chunk", "size must be at least 1"));
    }
    let entries: Vec<_> = array.try_entries("chunk")?.collect();
    Ok(entries
        .chunks(size)
        .map(|group| {
            if preserve_keys {
                let group = group
                    .iter()
                    .map(|(key, value)| (key.clone().into_owned(), (*value).clone()))
                    .collect();
                Value::from_entries(ContainerKind::Array, group)
            } else {
                group.iter().map(|(_, value)| (*value).clone()).collect()
            }
        })
        .collect())
}

/// Removes the first `number` entries, renumbering integer keys.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::drop;
/// use lowbar::value;
///
/// assert_eq!(drop(&value!([0, 1, 3]), 2).unwrap(), value!([3]));
/// ```
pub fn drop(array: &Value, number: usize) -> Result<Value> {
    let entries = renumbered(array.try_entries("drop")?.skip(number));
    Ok(Value::from_entries(ContainerKind::Array, entries))
}

/// Shuffles the values so that none stays at its original position.
///
/// Arrays with fewer than two values are returned as they are, as sequences.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
pub fn randomize(array: &Value) -> Result<Value> {
    let mut values: Vec<Value> = array
        .try_entries("randomize")?
        .map(|(_, value)| value.clone())
        .collect();
    let mut generator = rand::thread_rng();
    for position in 0..values.len().saturating_sub(1) {
        let other = generator.gen_range(position + 1..values.len());
        values.swap(position, other);
    }
    Ok(Value::sequence(values))
}

/// Picks one value at random, `Null` for an empty array.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
pub fn random(array: &Value) -> Result<Value> {
    let entries = array.try_entries("random")?;
    let count = entries.len();
    if count == 0 {
        return Ok(Value::Null);
    }
    let position = rand::thread_rng().gen_range(0..count);
    Ok(array.values().nth(position).cloned().unwrap_or_default())
}

/// The key of the first value strictly equal to `value`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::search;
/// use lowbar::{value, Key};
///
/// assert_eq!(search(&value!(["a", "b", "c"]), &value!("b")).unwrap(), Some(Key::Index(1)));
/// assert_eq!(search(&value!(["a"]), &value!("z")).unwrap(), None);
/// ```
pub fn search(array: &Value, value: &Value) -> Result<Option<Key>> {
    Ok(array
        .try_entries("search")?
        .find(|(_, candidate)| *candidate == value)
        .map(|(key, _)| key.into_owned()))
}

/// Returns `true` when `array` holds a value strictly equal to `value`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
pub fn contains(array: &Value, value: &Value) -> Result<bool> {
    search(array, value).map(|found| found.is_some())
}

/// Keeps the entries of `array` whose value also appears in `other`.
///
/// Keys of `array` are preserved.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when either argument is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::intersection;
/// use lowbar::value;
///
/// let common = intersection(&value!(["green", "red", "blue"]), &value!(["green", "yellow", "red"]));
/// assert_eq!(common.unwrap(), value!(["green", "red"]));
/// ```
pub fn intersection(array: &Value, other: &Value) -> Result<Value> {
    other.try_entries("intersection")?;
    let entries = array
        .try_entries("intersection")?
        .filter(|(_, value)| other.values().any(|candidate| candidate == *value))
        .map(|(key, value)| (key.into_owned(), value.clone()))
        .collect();
    Ok(Value::from_entries(ContainerKind::Array, entries))
}

/// Returns `true` when the two arrays share at least one value.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when either argument is a leaf.
pub fn intersects(array: &Value, other: &Value) -> Result<bool> {
    intersection(array, other).map(|common| !common.is_empty())
}

/// The first value, or with `take` a sequence of the first `take` values.
///
/// An empty array has no first value: `Null` is returned.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::first;
/// use lowbar::value;
///
/// assert_eq!(first(&value!([1, 2, 3, 4, 5]), None).unwrap(), value!(1));
/// assert_eq!(first(&value!([1, 2, 3, 4, 5]), Some(2)).unwrap(), value!([1, 2]));
/// ```
pub fn first(array: &Value, take: Option<usize>) -> Result<Value> {
    let mut values = array.try_entries("first")?.map(|(_, value)| value);
    Ok(match take {
        None => values.next().cloned().unwrap_or_default(),
        Some(take) => values.take(take).cloned().collect(),
    })
}

/// The last value, or with `take` a sequence of the last `take` values.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::last;
/// use lowbar::value;
///
/// assert_eq!(last(&value!([1, 2, 3, 4, 5]), None).unwrap(), value!(5));
/// assert_eq!(last(&value!([1, 2, 3, 4, 5]), Some(2)).unwrap(), value!([4, 5]));
/// ```
pub fn last(array: &Value, take: Option<usize>) -> Result<Value> {
    let values = array.try_entries("last")?;
    let count = values.len();
    let mut values = values.map(|(_, value)| value);
    Ok(match take {
        None => values.next_back().cloned().unwrap_or_default(),
        Some(take) => values.skip(count.saturating_sub(take)).cloned().collect(),
    })
}

/// Every value but the last `number`, as a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::initial;
/// use lowbar::value;
///
/// assert_eq!(initial(&value!([1, 2, 3]), 1).unwrap(), value!([1, 2]));
/// ```
pub fn initial(array: &Value, number: usize) -> Result<Value> {
    let values = array.try_entries("initial")?;
    let keep = values.len().saturating_sub(number);
    Ok(values.take(keep).map(|(_, value)| value.clone()).collect())
}

/// Every value after the first `index`, as a sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `array` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::rest;
/// use lowbar::value;
///
/// assert_eq!(rest(&value!([1, 2, 3]), 2).unwrap(), value!([3]));
/// ```
pub fn rest(array: &Value, index: usize) -> Result<Value> {
    Ok(array
        .try_entries("rest")?
        .skip(index)
        .map(|(_, value)| value.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_append_to_mapping_uses_next_index() {
        assert_eq!(
            append(&value!({"a": 1, 4: 2}), value!(3)).unwrap(),
            value!({"a": 1, 4: 2, 5: 3})
        );
    }

    #[rstest]
    fn test_prepend_renumbers_and_keeps_names() {
        let prepended = prepend(&value!({"a": 1, 5: 2}), value!(0)).unwrap();
        assert_eq!(prepended, value!({0: 0, "a": 1, 1: 2}));
    }

    #[rstest]
    fn test_compact_drops_null() {
        assert_eq!(compact(&value!([0, 1, 2, 3, null])).unwrap(), value!([1, 2, 3]));
    }

    #[rstest]
    fn test_patch_nested_sequences() {
        let array = value!({0: 1, 1: 1, 2: 1, "contacts": {"country": "US", "tel": [123]}, 3: 99});
        let patches = value!({"/0": 2, "/1": 3, "/contacts/country": "CA", "/contacts/tel/0": 3456});
        assert_eq!(
            patch(&array, &patches).unwrap(),
            value!({0: 2, 1: 3, 2: 1, "contacts": {"country": "CA", "tel": [3456]}, 3: 99})
        );
    }

    #[rstest]
    fn test_range_descending_and_zero_step() {
        assert_eq!(range(3, Some(1), 1).unwrap(), value!([3, 2, 1]));
        assert_eq!(range(1, Some(6), -2).unwrap(), value!([1, 3, 5]));
        assert!(range(1, Some(3), 0).is_err());
    }

    #[rstest]
    fn test_chunk_preserve_keys() {
        let chunks = chunk(&value!({"a": 1, "b": 2, "c": 3}), 2, true).unwrap();
        assert_eq!(chunks, value!([{"a": 1, "b": 2}, {"c": 3}]));
        assert!(chunk(&value!([1]), 0, false).is_err());
    }

    #[rstest]
    fn test_drop_keeps_named_keys() {
        assert_eq!(drop(&value!({"a": 1, 7: 2, 8: 3}), 1).unwrap(), value!({0: 2, 1: 3}));
        assert_eq!(drop(&value!([1, 2]), 5).unwrap(), value!([]));
    }

    #[rstest]
    fn test_randomize_moves_every_value() {
        let original = value!([1, 2, 3, 4, 5]);
        let shuffled = randomize(&original).unwrap();
        assert_eq!(shuffled.len(), Some(5));
        for (position, value) in shuffled.values().enumerate() {
            assert_ne!(original.entry(&Key::from(position)), Some(value));
        }
    }

    #[rstest]
    fn test_random_picks_a_member() {
        let array = value!([1, 2, 3]);
        let picked = random(&array).unwrap();
        assert!(contains(&array, &picked).unwrap());
        assert_eq!(random(&value!([])).unwrap(), Value::Null);
    }

    #[rstest]
    fn test_search_is_strict() {
        assert_eq!(search(&value!([1, "1"]), &value!("1")).unwrap(), Some(Key::Index(1)));
        assert_eq!(search(&value!([1.0]), &value!(1)).unwrap(), None);
    }

    #[rstest]
    fn test_intersects() {
        assert!(intersects(&value!(["green", "red"]), &value!(["red"])).unwrap());
        assert!(!intersects(&value!(["green"]), &value!(["red"])).unwrap());
    }

    #[rstest]
    fn test_first_and_last_on_empty() {
        assert_eq!(first(&value!([]), None).unwrap(), Value::Null);
        assert_eq!(last(&value!([]), None).unwrap(), Value::Null);
        assert_eq!(last(&value!([1, 2]), Some(5)).unwrap(), value!([1, 2]));
    }

    #[rstest]
    fn test_helpers_reject_leaves() {
        assert!(compact(&value!(1)).is_err());
        assert!(append(&value!("a"), value!(1)).is_err());
        assert!(first(&Value::Null, None).is_err());
    }
}
