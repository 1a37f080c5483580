//! Copy-on-write path updates.

use crate::error::{Error, Result};
use crate::value::{Key, Value};

use super::Path;

/// Returns `collection` with `value` stored under the single key `key`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::universal_set;
/// use lowbar::value;
///
/// let object = value!(object {"a": 1});
/// assert_eq!(universal_set(&object, "b", value!(2)).unwrap(), value!(object {"a": 1, "b": 2}));
/// assert_eq!(universal_set(&value!([1]), 1, value!(2)).unwrap(), value!([1, 2]));
/// ```
pub fn universal_set<K: Into<Key>>(collection: &Value, key: K, value: Value) -> Result<Value> {
    collection.clone().with_entry(key.into(), value)
}

/// Returns `collection` with `value` stored at `path`.
///
/// Missing or mismatched intermediates are replaced with an empty container
/// of the parent's family: an object under an object, an empty sequence
/// under an array-like parent. The whole marker returns the collection
/// unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::set;
/// use lowbar::value;
///
/// let original = value!({"foo": {"bar": "ter"}});
///
/// let overridden = set(&original, "foo.bar.not_exist", value!("baz")).unwrap();
/// assert_eq!(overridden, value!({"foo": {"bar": {"not_exist": "baz"}}}));
///
/// let object = value!(object {"foo": (object {"bar": "ter"})});
/// let updated = set(&object, "foo.baz.ber", value!("fer")).unwrap();
/// assert_eq!(
///     updated,
///     value!(object {"foo": (object {"bar": "ter", "baz": (object {"ber": "fer"})})})
/// );
/// ```
pub fn set<P: Into<Path>>(collection: &Value, path: P, value: Value) -> Result<Value> {
    set_owned(collection.clone(), &path.into(), value)
}

/// Like [`set`], consuming the collection so that unshared storage is updated in place.
pub(crate) fn set_owned(collection: Value, path: &Path, value: Value) -> Result<Value> {
    if path.is_whole() {
        return Ok(collection);
    }
    set_segments(collection, path.segments(), value)
}

fn set_segments(mut collection: Value, segments: &[Key], value: Value) -> Result<Value> {
    let Some(family) = collection.container_kind() else {
        return Err(Error::invalid_argument("set", collection.expected_collection()));
    };
    let Some((first, rest)) = segments.split_first() else {
        return Ok(value);
    };
    if rest.is_empty() {
        return collection.with_entry(first.clone(), value);
    }
    let child = match collection.take_entry(first) {
        Some(child) if child.container_kind() == Some(family) => child,
        _ => {
            tracing::trace!(key = %first, ?family, "auto-vivifying intermediate container");
            family.empty()
        }
    };
    let child = set_segments(child, rest, value)?;
    collection.with_entry(first.clone(), child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::get;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_set_does_not_mutate_input() {
        let original = value!({"foo": {"bar": "ter"}});
        let deep = set(&original, "foo.baz.ber", value!("fer")).unwrap();
        let shallow = set(&original, "foo.bar", value!("fer2")).unwrap();

        assert_eq!(original, value!({"foo": {"bar": "ter"}}));
        assert_eq!(get(&deep, "foo.baz"), value!({"ber": "fer"}));
        assert_eq!(shallow, value!({"foo": {"bar": "fer2"}}));
    }

    #[rstest]
    fn test_set_whole_path_is_identity() {
        let original = value!([1, 2]);
        assert_eq!(set(&original, None::<&str>, value!(3)).unwrap(), original);
    }

    #[rstest]
    fn test_set_rejects_leaf_collections() {
        let result = set(&value!("text"), "a", value!(1));
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[rstest]
    fn test_set_vivifies_objects_under_objects() {
        let updated = set(&Value::empty_object(), "a.b", value!(1)).unwrap();
        assert!(updated.entry(&Key::parse("a")).is_some_and(Value::is_object));
    }

    #[rstest]
    fn test_set_replaces_object_child_of_array_parent() {
        let collection = value!({"a": (object {"x": 1})});
        let updated = set(&collection, "a.b", value!(2)).unwrap();
        assert_eq!(updated, value!({"a": {"b": 2}}));
    }

    #[rstest]
    fn test_set_appends_and_promotes_sequences() {
        let appended = set(&value!({"list": [1]}), "list.1", value!(2)).unwrap();
        assert_eq!(appended, value!({"list": [1, 2]}));

        let promoted = set(&value!({"list": [1]}), "list.5", value!(2)).unwrap();
        assert_eq!(promoted, value!({"list": {0: 1, 5: 2}}));
    }

    #[rstest]
    fn test_set_with_key_conversions() {
        assert_eq!(universal_set(&value!([]), 0, value!("a")).unwrap(), value!(["a"]));
        assert_eq!(
            universal_set(&value!([]), Key::parse("k"), value!("a")).unwrap(),
            value!({"k": "a"})
        );
    }
}
