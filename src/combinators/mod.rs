//! Structural combinators built on the path resolver and the fold operators.
//!
//! - [`assign`], [`merge`]: last-write-wins overwrite, shallow or recursive
//! - [`concat`], [`concat_deep`]: appending combination, shallow or recursive
//! - [`pick`]: a new collection holding only selected paths
//! - [`ease`], [`unease`]: flattening to and from glue-joined keys
//!
//! The variadic combinators take a slice of collections and fold it from the
//! right: the last collection seeds the fold and each step writes the
//! accumulated result onto the collection to its left. Later collections
//! therefore win on conflicting keys, while the first collection decides the
//! kind and the key order of the result.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::combinators::{assign, merge};
//! use lowbar::value;
//!
//! let left = value!({"color": {"favorite": "red", "model": 3, 0: 5}, 0: 3});
//! let right = value!({0: 10, "color": {"favorite": "green", 0: "blue"}});
//!
//! assert_eq!(
//!     assign(&[left.clone(), right.clone()]).unwrap(),
//!     value!({"color": {"favorite": "green", 0: "blue"}, 0: 10})
//! );
//! assert_eq!(
//!     merge(&[left, right]).unwrap(),
//!     value!({"color": {"favorite": "green", "model": 3, 0: "blue"}, 0: 10})
//! );
//! ```

use crate::error::{Error, Result};
use crate::iterate::try_reduce_right;
use crate::value::Value;

mod combine;
mod flatten;
mod pick;

pub use combine::{assign, concat, concat_deep, merge};
pub use flatten::{DEFAULT_GLUE, ease, unease};
pub use pick::pick;

/// Folds `collections` from the right with `write(source, destination)`.
fn fold_collections<F>(operation: &'static str, collections: &[Value], mut write: F) -> Result<Value>
where
    F: FnMut(&Value, &Value) -> Result<Value>,
{
    if collections.is_empty() {
        return Err(Error::invalid_argument(
            operation,
            "expected at least one collection",
        ));
    }
    if let Some(leaf) = collections.iter().find(|collection| !collection.is_container()) {
        return Err(Error::invalid_argument(operation, leaf.expected_collection()));
    }
    let arguments = Value::sequence(collections.iter().cloned());
    try_reduce_right(
        &arguments,
        |source, destination, _, _| write(&source, destination),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_fold_collections_rejects_empty_and_leaves() {
        let overwrite = |source: &Value, _: &Value| Ok(source.clone());
        assert!(fold_collections("test", &[], overwrite).is_err());
        assert!(fold_collections("test", &[value!([1]), value!(2)], overwrite).is_err());
    }

    #[rstest]
    fn test_fold_collections_single_collection_is_returned() {
        let only = value!({"a": 1});
        let result = fold_collections("test", &[only.clone()], |_, _| Ok(Value::Null)).unwrap();
        assert_eq!(result, only);
    }

    #[rstest]
    fn test_fold_collections_visits_right_to_left() {
        let mut order = Vec::new();
        fold_collections("test", &[value!([1]), value!([2]), value!([3])], |source, destination| {
            order.push((source.clone(), destination.clone()));
            Ok(destination.clone())
        })
        .unwrap();
        assert_eq!(
            order,
            vec![(value!([3]), value!([2])), (value!([2]), value!([1]))]
        );
    }
}
