//! Read-only path resolution.

use crate::value::Value;

use super::Path;

/// Borrows the value addressed by `path`, `None` when it is missing.
///
/// The whole marker returns the collection itself. For array-like
/// collections the unsplit path is first tried as a single key, so keys
/// that contain a `.` stay reachable at the top level.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::lookup;
/// use lowbar::value;
///
/// let collection = value!({"a.b": 1, "a": {"b": 2}});
/// assert_eq!(lookup(&collection, "a.b"), Some(&value!(1)));
/// assert_eq!(lookup(&collection, "a.c"), None);
/// ```
pub fn lookup<P: Into<Path>>(collection: &Value, path: P) -> Option<&Value> {
    let path = path.into();
    if path.is_whole() {
        return Some(collection);
    }
    if collection.is_array_like()
        && let Some(found) = path.raw_key().and_then(|key| collection.entry(&key))
    {
        return Some(found);
    }
    path.segments()
        .iter()
        .try_fold(collection, |current, segment| current.entry(segment))
}

/// Returns the value addressed by `path`, or `Null` when it is missing.
///
/// A present key holding `Null` is present: the stored `Null` is returned.
#[must_use]
pub fn get<P: Into<Path>>(collection: &Value, path: P) -> Value {
    lookup(collection, path).cloned().unwrap_or_default()
}

/// Returns the value addressed by `path`, or `default` when it is missing.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::get_or;
/// use lowbar::value;
///
/// let collection = value!(object {"foo": (object {"bar": "ter"})});
/// assert_eq!(get_or(&collection, "foo.bar", value!("default")), value!("ter"));
/// assert_eq!(get_or(&collection, "foo.baz", value!("default")), value!("default"));
/// ```
#[must_use]
pub fn get_or<P: Into<Path>>(collection: &Value, path: P, default: Value) -> Value {
    lookup(collection, path).cloned().unwrap_or(default)
}

/// Like [`get_or`], calling `producer` only when the path is missing.
pub fn get_or_else<P, F>(collection: &Value, path: P, producer: F) -> Value
where
    P: Into<Path>,
    F: FnOnce() -> Value,
{
    lookup(collection, path).cloned().unwrap_or_else(producer)
}

/// Returns `true` when every segment of `path` exists.
///
/// Existence is tested, not truthiness: a key holding `Null` is present.
/// The whole marker is always present.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::has;
/// use lowbar::value;
///
/// assert!(has(&value!({"foo": null}), "foo"));
/// assert!(has(&value!([5]), 0));
/// assert!(!has(&value!({"foo": "bar"}), "foo.bar"));
/// ```
pub fn has<P: Into<Path>>(collection: &Value, path: P) -> bool {
    let path = path.into();
    let mut current = collection;
    for segment in path.segments() {
        match current.entry(segment) {
            Some(child) => current = child,
            None => return false,
        }
    }
    true
}

/// Returns `true` when [`has`] holds for every path in `keys`.
///
/// With `strict`, the collection must also have exactly as many entries as
/// there are keys.
///
/// # Examples
///
/// ```rust
/// use lowbar::path::has_keys;
/// use lowbar::value;
///
/// let collection = value!({"foo": {"bar": "foie"}, "estomac": true});
/// assert!(has_keys(&collection, ["foo.bar", "estomac"], false));
/// assert!(has_keys(&collection, ["foo", "estomac"], true));
/// assert!(!has_keys(&collection, ["foo"], true));
/// ```
pub fn has_keys<I>(collection: &Value, keys: I, strict: bool) -> bool
where
    I: IntoIterator,
    I::Item: Into<Path>,
{
    let mut count = 0;
    for key in keys {
        if !has(collection, key) {
            return false;
        }
        count += 1;
    }
    !strict || collection.len() == Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    fn nested() -> Value {
        value!({
            "foo": {"bar": "ter"},
            "baz": {"foo": {"obj": null}},
        })
    }

    #[rstest]
    #[case("foo.bar", Some(value!("ter")))]
    #[case("foo", Some(value!({"bar": "ter"})))]
    #[case("foo.baz", None)]
    #[case("baz.foo.obj", Some(Value::Null))]
    #[case("foo.bar.ter", None)]
    fn test_lookup(#[case] path: &str, #[case] expected: Option<Value>) {
        assert_eq!(lookup(&nested(), path).cloned(), expected);
    }

    #[rstest]
    fn test_get_whole_path_returns_collection() {
        let collection = nested();
        assert_eq!(get(&collection, None::<&str>), collection);
    }

    #[rstest]
    fn test_get_missing_defaults() {
        let collection = nested();
        assert_eq!(get(&collection, "foo.baz"), Value::Null);
        assert_eq!(get_or(&collection, "foo.baz", value!("default")), value!("default"));
        assert_eq!(
            get_or_else(&collection, "foo.baz", || value!("default_from_callback")),
            value!("default_from_callback")
        );
    }

    #[rstest]
    fn test_get_or_else_producer_not_called_when_present() {
        let mut called = false;
        let found = get_or_else(&nested(), "foo.bar", || {
            called = true;
            Value::Null
        });
        assert_eq!(found, value!("ter"));
        assert!(!called);
    }

    #[rstest]
    fn test_get_stored_null_is_not_replaced_by_default() {
        assert_eq!(get_or(&nested(), "baz.foo.obj", value!(1)), Value::Null);
    }

    #[rstest]
    fn test_get_objects_skip_raw_key_fast_path() {
        let collection = value!(object {"a.b": 1});
        assert_eq!(get(&collection, "a.b"), Value::Null);
        assert_eq!(get(&value!({"a.b": 1}), "a.b"), value!(1));
    }

    #[rstest]
    fn test_get_sequence_index_segments() {
        let collection = value!({"baz": ["b", "z"]});
        assert_eq!(get(&collection, "baz.1"), value!("z"));
        assert_eq!(get(&collection, "baz.2"), Value::Null);
    }

    #[rstest]
    fn test_get_on_leaf_returns_default() {
        assert_eq!(get_or(&value!(3), "a", value!("d")), value!("d"));
        assert_eq!(get(&value!(3), None::<&str>), value!(3));
    }

    #[rstest]
    #[case(value!({"foo": "bar"}), "foo", true)]
    #[case(value!({"foo": "bar"}), "foz", false)]
    #[case(value!(object {"foo": "bar"}), "foo", true)]
    #[case(value!(object {"foo": "bar"}), "foz", false)]
    #[case(value!({"foo": {"bar": "foie"}}), "foo.bar", true)]
    #[case(value!({"foo": null}), "foo", true)]
    fn test_has(#[case] collection: Value, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(has(&collection, path), expected);
    }

    #[rstest]
    fn test_has_index_paths() {
        assert!(has(&value!([5]), 0));
        assert!(has(&value!(object {0: 5}), 0));
        assert!(!has(&value!([5]), 1));
    }

    #[rstest]
    fn test_has_keys_strict_counts_entries() {
        let mut collection = value!({"foo": "bar"});
        assert!(!has_keys(&collection, ["foo", "foz"], false));
        assert!(!has_keys(&collection, ["foo", "foz"], true));

        collection = value!({"foo": "bar", "foz": "baz"});
        assert!(has_keys(&collection, ["foo", "foz"], false));
        assert!(has_keys(&collection, ["foo", "foz"], true));

        collection = value!({"foo": "bar", "foz": "baz", "xxx": "bay"});
        assert!(has_keys(&collection, ["foo", "foz"], false));
        assert!(!has_keys(&collection, ["foo", "foz"], true));
    }
}
