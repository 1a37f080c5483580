#![cfg(feature = "path")]
//! Property-based tests for path reads and writes.
//!
//! This module verifies that `get`, `has` and `set` agree with each other
//! and that writes never touch their input, using proptest.

use lowbar::path::{Path, get, has, set};
use lowbar::{Key, Value};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_name() -> impl Strategy<Value = String> {
    "[a-z]{1,3}".prop_map(|s| s)
}

fn arbitrary_index() -> impl Strategy<Value = String> {
    (0_u8..4).prop_map(|index| index.to_string())
}

/// Names and small canonical indices, so paths such as `list.0` reach
/// sequences as well as mappings.
fn arbitrary_key() -> impl Strategy<Value = String> {
    prop_oneof![arbitrary_name(), arbitrary_index()]
}

fn arbitrary_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arbitrary_key(), 1..4).prop_map(|segments| segments.join("."))
}

fn arbitrary_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

/// Nested sequences, mappings and objects.
fn arbitrary_value() -> impl Strategy<Value = Value> {
    arbitrary_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::sequence),
            prop::collection::vec((arbitrary_key(), inner.clone()), 0..4).prop_map(Value::mapping),
            prop::collection::vec((arbitrary_key(), inner), 0..4).prop_map(Value::object),
        ]
    })
}

fn arbitrary_collection() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..6).prop_map(Value::mapping),
        prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..6).prop_map(Value::object),
        prop::collection::vec(arbitrary_value(), 0..4).prop_map(Value::sequence),
    ]
}

/// A dotted path whose full text is also a key of `collection` reads that
/// key directly instead of walking the segments.
fn reads_raw_key(collection: &Value, path: &str) -> bool {
    Path::from(path).segments().len() > 1
        && collection.is_array_like()
        && collection.contains_key(&Key::parse(path))
}

// =============================================================================
// Get-Set Law: get(set(c, p, v), p) == v
// =============================================================================

proptest! {
    #[test]
    fn prop_get_set_law(
        collection in arbitrary_collection(),
        path in arbitrary_path(),
        value in arbitrary_value()
    ) {
        prop_assume!(!reads_raw_key(&collection, &path));
        let updated = set(&collection, path.as_str(), value.clone()).unwrap();

        prop_assert_eq!(get(&updated, path.as_str()), value);
        prop_assert!(has(&updated, path.as_str()));
    }
}

// =============================================================================
// Index segments: writes into sequences read back through `list.N`
// =============================================================================

proptest! {
    #[test]
    fn prop_get_set_law_through_sequence_indices(
        elements in prop::collection::vec(arbitrary_leaf(), 0..4),
        index in 0_usize..6,
        value in arbitrary_value()
    ) {
        let collection = Value::mapping([("list", Value::sequence(elements))]);
        let path = format!("list.{index}");
        let updated = set(&collection, path.as_str(), value.clone()).unwrap();

        prop_assert_eq!(get(&updated, path.as_str()), value);
        prop_assert!(get(&updated, "list").is_array_like());
    }
}

// =============================================================================
// Set-Set Law: set(set(c, p, v1), p, v2) == set(c, p, v2)
// =============================================================================

proptest! {
    #[test]
    fn prop_set_set_law(
        collection in arbitrary_collection(),
        path in arbitrary_path(),
        first in arbitrary_value(),
        second in arbitrary_value()
    ) {
        let twice = set(&set(&collection, path.as_str(), first).unwrap(), path.as_str(), second.clone())
            .unwrap();
        let once = set(&collection, path.as_str(), second).unwrap();

        prop_assert_eq!(twice, once);
    }
}

// =============================================================================
// Set-Get Law: set(c, p, get(c, p)) == c when p exists
// =============================================================================

proptest! {
    #[test]
    fn prop_set_get_law(
        collection in arbitrary_collection(),
        path in arbitrary_path(),
        value in arbitrary_value()
    ) {
        let seeded = set(&collection, path.as_str(), value).unwrap();

        let current = get(&seeded, path.as_str());
        let rewritten = set(&seeded, path.as_str(), current).unwrap();

        prop_assert_eq!(rewritten, seeded);
    }
}

// =============================================================================
// Non-mutation: writes leave their input unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_set_does_not_mutate_input(
        collection in arbitrary_collection(),
        path in arbitrary_path(),
        value in arbitrary_value()
    ) {
        let snapshot = collection.clone();
        let _ = set(&collection, path.as_str(), value).unwrap();

        prop_assert_eq!(collection, snapshot);
    }
}

// =============================================================================
// Missing paths read as Null
// =============================================================================

proptest! {
    #[test]
    fn prop_missing_path_reads_null(
        collection in arbitrary_collection(),
        path in arbitrary_path()
    ) {
        prop_assume!(!reads_raw_key(&collection, &path));
        prop_assume!(!has(&collection, path.as_str()));

        prop_assert_eq!(get(&collection, path.as_str()), Value::Null);
    }
}
