//! The `value!` literal macro.

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// # Syntax
///
/// - `value!(null)` - `Value::Null`
/// - `value!([a, b, c])` - a sequence
/// - `value!({"key": a, 0: b})` - an array-like mapping (keys are normalized like [`Key::parse`](crate::Key::parse))
/// - `value!(object {"key": a})` - an object
/// - `value!(expression)` - `Value::from(expression)`
///
/// Each element and key must be a single token tree: wrap compound
/// expressions such as `-1` or a nested `object {..}` in parentheses.
///
/// # Examples
///
/// ```rust
/// use lowbar::{value, Value};
///
/// let nested = value!({
///     "color": {"favorite": "red", 0: 5},
///     0: 3,
///     "owner": (object {"name": "ada", "age": (-1)}),
/// });
///
/// assert_eq!(nested.len(), Some(3));
/// assert_eq!(value!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::sequence(::std::vec![ $( $crate::value!($element) ),* ])
    };
    ({ $($key:tt : $element:tt),* $(,)? }) => {
        $crate::Value::mapping::<$crate::Key, _>(::std::vec![
            $( ($crate::Key::from($key), $crate::value!($element)) ),*
        ])
    };
    (object { $($key:tt : $element:tt),* $(,)? }) => {
        $crate::Value::object::<$crate::Key, _>(::std::vec![
            $( ($crate::Key::from($key), $crate::value!($element)) ),*
        ])
    };
    (( $($inner:tt)+ )) => {
        $crate::value!($($inner)+)
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
