//! Type predicates over [`Value`].

use super::Value;

/// Returns `true` for array-like values (`Seq` or `Map`).
///
/// # Examples
///
/// ```rust
/// use lowbar::{is_array, value};
///
/// assert!(is_array(&value!([1, 2])));
/// assert!(is_array(&value!({"a": 1})));
/// assert!(!is_array(&value!(object {"a": 1})));
/// ```
#[must_use]
pub const fn is_array(value: &Value) -> bool {
    value.is_array_like()
}

/// Returns `true` for objects.
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Returns `true` for arrays and objects.
#[must_use]
pub const fn is_collection(value: &Value) -> bool {
    value.is_container()
}

/// Returns `true` for `Null`.
#[must_use]
pub const fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Returns `true` for strings.
#[must_use]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

/// Returns `true` for numbers and for strings holding a finite number.
///
/// # Examples
///
/// ```rust
/// use lowbar::{is_number, value};
///
/// assert!(is_number(&value!(3)));
/// assert!(is_number(&value!(" 1e3")));
/// assert!(!is_number(&value!("inf")));
/// assert!(!is_number(&value!("three")));
/// ```
#[must_use]
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::Str(text) => text
            .trim()
            .parse::<f64>()
            .is_ok_and(f64::is_finite),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    #[case(value!([1]), true, false)]
    #[case(value!({"a": 1}), true, false)]
    #[case(value!(object {"a": 1}), false, true)]
    #[case(value!("a"), false, false)]
    #[case(value!(null), false, false)]
    fn test_container_predicates(
        #[case] value: Value,
        #[case] array: bool,
        #[case] object: bool,
    ) {
        assert_eq!(is_array(&value), array);
        assert_eq!(is_object(&value), object);
        assert_eq!(is_collection(&value), array || object);
    }

    #[rstest]
    fn test_leaf_predicates() {
        assert!(is_null(&Value::Null));
        assert!(!is_null(&value!(0)));
        assert!(is_string(&value!("")));
        assert!(!is_string(&value!(1)));
        assert!(is_number(&value!(1.5)));
        assert!(is_number(&value!("-2")));
        assert!(!is_number(&value!("NaN")));
    }
}
