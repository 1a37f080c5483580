//! Numeric aggregates over the values of a collection.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::value::Value;

/// The arithmetic mean of the numeric values, `None` when there are none.
///
/// Values that are not numbers are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::average;
/// use lowbar::value;
///
/// assert_eq!(average(&value!([1, 2, 3])).unwrap(), Some(2.0));
/// assert_eq!(average(&value!([])).unwrap(), None);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average(collection: &Value) -> Result<Option<f64>> {
    let (sum, count) = collection
        .try_entries("average")?
        .filter_map(|(_, value)| value.as_f64())
        .fold((0.0, 0_usize), |(sum, count), number| (sum + number, count + 1));
    Ok((count > 0).then(|| sum / count as f64))
}

/// The largest value, `Null` for an empty collection.
///
/// Numbers compare numerically and strings lexically.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf or holds
/// values that cannot be compared with each other.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::max;
/// use lowbar::value;
///
/// assert_eq!(max(&value!([1, 4.5, 2])).unwrap(), value!(4.5));
/// ```
pub fn max(collection: &Value) -> Result<Value> {
    extreme(collection, "max", Ordering::Greater)
}

/// The smallest value, `Null` for an empty collection.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf or holds
/// values that cannot be compared with each other.
///
/// # Examples
///
/// ```rust
/// use lowbar::helpers::min;
/// use lowbar::value;
///
/// assert_eq!(min(&value!(["b", "a", "c"])).unwrap(), value!("a"));
/// ```
pub fn min(collection: &Value) -> Result<Value> {
    extreme(collection, "min", Ordering::Less)
}

fn extreme(collection: &Value, operation: &'static str, wanted: Ordering) -> Result<Value> {
    let mut values = collection.try_entries(operation)?.map(|(_, value)| value);
    let Some(mut best) = values.next() else {
        return Ok(Value::Null);
    };
    for value in values {
        if compare(value, best, operation)? == wanted {
            best = value;
        }
    }
    Ok(best.clone())
}

fn compare(left: &Value, right: &Value, operation: &'static str) -> Result<Ordering> {
    let ordering = match (left, right) {
        (Value::Str(left), Value::Str(right)) => Some(left.cmp(right)),
        (Value::Bool(left), Value::Bool(right)) => Some(left.cmp(right)),
        _ => left
            .as_f64()
            .zip(right.as_f64())
            .and_then(|(left, right)| left.partial_cmp(&right)),
    };
    ordering.ok_or_else(|| {
        Error::invalid_argument(
            operation,
            format!("cannot compare {} with {}", left.kind(), right.kind()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_average_skips_non_numbers() {
        assert_eq!(average(&value!({"a": 1, "b": "x", "c": 2.0})).unwrap(), Some(1.5));
        assert!(average(&value!(3)).is_err());
    }

    #[rstest]
    fn test_max_keeps_first_of_equals() {
        assert_eq!(max(&value!([2, 2.0, 1])).unwrap(), value!(2));
    }

    #[rstest]
    fn test_min_and_max_of_empty() {
        assert_eq!(min(&value!([])).unwrap(), Value::Null);
        assert_eq!(max(&value!([])).unwrap(), Value::Null);
    }

    #[rstest]
    fn test_incomparable_values() {
        let result = max(&value!([1, "a"]));
        assert!(matches!(result, Err(Error::InvalidArgument { operation: "max", .. })));
    }
}
