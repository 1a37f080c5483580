//! `ease` and `unease`: flattening nested arrays into glue-joined keys and back.

use crate::error::{Error, Result};
use crate::path::{Path, SEPARATOR, set_owned};
use crate::value::{ContainerKind, Entries, Key, Value};

/// The glue used by default to join flattened keys.
pub const DEFAULT_GLUE: &str = ".";

/// Flattens a nested collection into one entry per leaf.
///
/// Each key is the `glue`-joined path from the root to the leaf. Only
/// non-empty array-like children are descended into; objects, opaque values
/// and empty arrays are kept as leaves. When two leaves flatten to the same
/// key, the later one overwrites the earlier one.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::combinators::ease;
/// use lowbar::value;
///
/// let flat = ease(&value!({"foo": {"bar": "ter"}, "baz": ["b", "z"]}), ".").unwrap();
/// assert_eq!(flat, value!({"foo.bar": "ter", "baz.0": "b", "baz.1": "z"}));
/// ```
pub fn ease(collection: &Value, glue: &str) -> Result<Value> {
    let mut flattened = Entries::default();
    for (key, child) in collection.try_entries("ease")? {
        flatten_into(&mut flattened, key.to_string(), child, glue);
    }
    Ok(Value::from_entries(ContainerKind::Array, flattened))
}

fn flatten_into(flattened: &mut Entries, prefix: String, value: &Value, glue: &str) {
    if value.is_array_like() && !value.is_empty() {
        for (key, child) in value.entries().into_iter().flatten() {
            flatten_into(flattened, format!("{prefix}{glue}{key}"), child, glue);
        }
        return;
    }
    if flattened.insert(Key::from(prefix.as_str()), value.clone()).is_some() {
        tracing::debug!(key = %prefix, "flattened key collision, keeping the later leaf");
    }
}

/// Rebuilds a nested collection from flattened keys.
///
/// Every key has `separator` replaced with `.` and is then written with
/// [`set`](crate::path::set) into an initially empty array.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf or
/// `separator` is empty.
///
/// # Examples
///
/// ```rust
/// use lowbar::combinators::unease;
/// use lowbar::value;
///
/// let nested = unease(&value!({"foo.bar": "ter", "baz.0": "b", "baz.1": "z"}), ".").unwrap();
/// assert_eq!(nested, value!({"foo": {"bar": "ter"}, "baz": ["b", "z"]}));
/// ```
pub fn unease(collection: &Value, separator: &str) -> Result<Value> {
    if separator.is_empty() {
        return Err(Error::invalid_argument("unease", "separator must not be empty"));
    }
    collection
        .try_entries("unease")?
        .try_fold(Value::empty_array(), |nested, (key, value)| {
            let path = match key.as_ref() {
                Key::Name(name) => Path::split(&name.replace(separator, &SEPARATOR.to_string())),
                Key::Index(index) => Path::from(*index),
            };
            set_owned(nested, &path, value.clone())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_ease_keeps_objects_as_leaves() {
        let object = value!(object {"x": 1});
        let collection = Value::mapping([
            ("foo", Value::mapping([("bar", object.clone())])),
            ("baz", value!(["b", "z"])),
        ]);
        let flat = ease(&collection, DEFAULT_GLUE).unwrap();
        assert_eq!(flat.len(), Some(3));
        assert_eq!(flat.entry(&Key::parse("foo.bar")), Some(&object));
    }

    #[rstest]
    fn test_ease_custom_glue() {
        let flat = ease(&value!({"a": {"b": 1}}), "/").unwrap();
        assert_eq!(flat, value!({"a/b": 1}));
    }

    #[rstest]
    fn test_ease_empty_array_is_a_leaf() {
        let flat = ease(&value!({"a": [], "b": {"c": []}}), DEFAULT_GLUE).unwrap();
        assert_eq!(flat, value!({"a": [], "b.c": []}));
    }

    #[rstest]
    fn test_ease_collision_overwrites() {
        let flat = ease(&value!({"a.b": 1, "a": {"b": 2}}), DEFAULT_GLUE).unwrap();
        assert_eq!(flat, value!({"a.b": 2}));
    }

    #[rstest]
    fn test_ease_rejects_leaves() {
        assert!(ease(&value!("x"), DEFAULT_GLUE).is_err());
    }

    #[rstest]
    fn test_unease_custom_separator() {
        let nested = unease(&value!({"a/b": 1, "a/c": 2}), "/").unwrap();
        assert_eq!(nested, value!({"a": {"b": 1, "c": 2}}));
    }

    #[rstest]
    fn test_unease_rejects_empty_separator() {
        assert!(unease(&value!({"a": 1}), "").is_err());
    }

    #[rstest]
    fn test_ease_then_unease_round_trips() {
        let original = value!({"foo": {"bar": "ter"}, "baz": ["b", "z"], "empty": [], "n": null});
        let flat = ease(&original, DEFAULT_GLUE).unwrap();
        assert_eq!(unease(&flat, DEFAULT_GLUE).unwrap(), original);
    }
}
