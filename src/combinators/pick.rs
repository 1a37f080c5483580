//! `pick`.

use crate::error::{Error, Result};
use crate::path::{Path, get_or, set_owned};
use crate::value::Value;

/// Builds a new collection holding only the given `paths`.
///
/// The result has the family of `collection` (object or array). Each path is
/// written with the value found in `collection`, or `default` (`Null` when
/// `None`) when it is missing; the intermediate containers of a missing path
/// are still created.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `collection` is a leaf.
///
/// # Examples
///
/// ```rust
/// use lowbar::combinators::pick;
/// use lowbar::value;
///
/// let collection = value!({"a": 1, "b": {"c": 3, "d": 4}, "h": 5});
/// let picked = pick(&collection, ["a", "b.d", "e", "f.g"], None).unwrap();
///
/// assert_eq!(picked, value!({"a": 1, "b": {"d": 4}, "e": null, "f": {"g": null}}));
/// ```
pub fn pick<I>(collection: &Value, paths: I, default: Option<Value>) -> Result<Value>
where
    I: IntoIterator,
    I::Item: Into<Path>,
{
    let family = collection
        .container_kind()
        .ok_or_else(|| Error::invalid_argument("pick", collection.expected_collection()))?;
    let default = default.unwrap_or_default();
    paths.into_iter().try_fold(family.empty(), |picked, path| {
        let path = path.into();
        let found = get_or(collection, &path, default.clone());
        set_owned(picked, &path, found)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_pick_with_default() {
        let collection = value!({"nasa": 1, "cnsa": 42});
        let picked = pick(&collection, ["cnsa", "esa", "jaxa"], Some(value!(26))).unwrap();
        assert_eq!(picked, value!({"cnsa": 42, "esa": 26, "jaxa": 26}));
    }

    #[rstest]
    fn test_pick_default_fills_scaffolding() {
        let collection = value!({"a": 1, "b": {"c": 3, "d": 4}});
        let picked = pick(&collection, ["a", "b.d", "e", "f.g"], Some(value!("default"))).unwrap();
        assert_eq!(
            picked,
            value!({"a": 1, "b": {"d": 4}, "e": "default", "f": {"g": "default"}})
        );
    }

    #[rstest]
    fn test_pick_object_returns_object() {
        let collection = value!(object {"paris": 10_659_489, "marseille": 1_578_484, "lyon": 1_620_331});
        let picked = pick(&collection, ["marseille", "london"], None).unwrap();
        assert_eq!(picked, value!(object {"marseille": 1_578_484, "london": null}));
    }

    #[rstest]
    fn test_pick_no_paths_is_empty() {
        let picked = pick(&value!({"a": 1}), Vec::<&str>::new(), None).unwrap();
        assert_eq!(picked, Value::empty_array());
    }

    #[rstest]
    fn test_pick_rejects_leaves() {
        assert!(pick(&value!(1), ["a"], None).is_err());
    }
}
