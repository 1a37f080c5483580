#![cfg(feature = "path")]
//! Integration tests for path resolution and writes.
//!
//! Exercises `get`, `has`, `has_keys` and `set` over array-like mappings,
//! sequences and objects through the public API only.

use lowbar::path::{Path, get, get_or, get_or_else, has, has_keys, lookup, set, universal_set};
use lowbar::{Error, Key, Value, value};
use rstest::rstest;

fn nested_array() -> Value {
    value!({
        "foo": {"bar": "ter"},
        "baz": {"foo": {"obj": null}},
        "list": ["a", "b"]
    })
}

fn nested_object() -> Value {
    value!(object {
        "foo": (object {"bar": "ter"}),
        "baz": (object {"foo": (object {"obj": null})})
    })
}

// =============================================================================
// Path parsing
// =============================================================================

#[rstest]
fn test_path_segments_normalize_integers() {
    let path = Path::from("list.1.name");
    assert_eq!(
        path.segments(),
        &[Key::parse("list"), Key::Index(1), Key::parse("name")]
    );
}

#[rstest]
fn test_path_from_value() {
    assert_eq!(Path::try_from(&value!(3)).unwrap(), Path::from(3));
    assert_eq!(Path::try_from(&value!("a.b")).unwrap(), Path::from("a.b"));
    assert!(Path::try_from(&Value::Null).unwrap().is_whole());
    assert!(Path::try_from(&value!(1.5)).is_err());
}

// =============================================================================
// get
// =============================================================================

#[rstest]
#[case(nested_array())]
#[case(nested_object())]
fn test_get_nested_values(#[case] collection: Value) {
    assert_eq!(get(&collection, "foo.bar"), value!("ter"));
    assert_eq!(get(&collection, "baz.foo.obj"), Value::Null);
    assert_eq!(get(&collection, "foo.baz"), Value::Null);
}

#[rstest]
#[case(nested_array())]
#[case(nested_object())]
fn test_get_with_default(#[case] collection: Value) {
    assert_eq!(get_or(&collection, "foo.baz", value!("default")), value!("default"));
    assert_eq!(get_or(&collection, "foo.bar", value!("default")), value!("ter"));
    assert_eq!(
        get_or_else(&collection, "foo.bis", || value!("default_from_callback")),
        value!("default_from_callback")
    );
}

#[rstest]
fn test_get_whole_path_returns_collection() {
    let collection = nested_array();
    assert_eq!(get(&collection, Path::whole()), collection);
    assert_eq!(get(&collection, None::<&str>), collection);
}

#[rstest]
fn test_get_sequence_positions() {
    let collection = nested_array();
    assert_eq!(get(&collection, "list.0"), value!("a"));
    assert_eq!(get(&value!(["x", "y"]), 1), value!("y"));
    assert_eq!(get(&value!(["x", "y"]), 2), Value::Null);
}

#[rstest]
fn test_lookup_borrows_from_collection() {
    let collection = nested_array();
    let found = lookup(&collection, "foo").unwrap();
    assert_eq!(found.len(), Some(1));
}

// =============================================================================
// has / has_keys
// =============================================================================

#[rstest]
#[case(value!({"foo": "bar"}), "foo", true)]
#[case(value!({"foo": "bar"}), "foz", false)]
#[case(value!({"foo": "bar"}), "foo.bar", false)]
#[case(value!(object {"foo": "bar"}), "foo", true)]
#[case(value!({"foo": {"bar": "foie"}}), "foo.bar", true)]
#[case(value!({"foo": null}), "foo", true)]
fn test_has(#[case] collection: Value, #[case] path: &str, #[case] expected: bool) {
    assert_eq!(has(&collection, path), expected);
}

#[rstest]
fn test_has_positions_and_whole_path() {
    assert!(has(&value!([5]), 0));
    assert!(!has(&value!([5]), 1));
    assert!(has(&value!([]), Path::whole()));
}

#[rstest]
fn test_has_keys_non_strict() {
    let collection = value!({"foo": {"bar": "foie"}, "estomac": true});
    assert!(has_keys(&collection, ["foo.bar", "estomac"], false));
    assert!(!has_keys(&collection, ["foo.baz", "estomac"], false));
}

#[rstest]
fn test_has_keys_strict_requires_exact_count() {
    let collection = value!({"foo": "bar", "foz": "baz"});
    assert!(has_keys(&collection, ["foo", "foz"], true));

    let extended = set(&collection, "estomac", value!(true)).unwrap();
    assert!(!has_keys(&extended, ["foo", "foz"], true));
    assert!(has_keys(&extended, ["foo", "foz"], false));
}

// =============================================================================
// set
// =============================================================================

#[rstest]
fn test_set_creates_intermediates_without_mutating_input() {
    let original = value!({"foo": {"bar": "ter"}});
    let added = set(&original, "foo.baz.ber", value!("fer")).unwrap();
    let replaced = set(&original, "foo.bar", value!("fer2")).unwrap();

    assert_eq!(original, value!({"foo": {"bar": "ter"}}));
    assert_eq!(get(&added, "foo.baz"), value!({"ber": "fer"}));
    assert_eq!(replaced, value!({"foo": {"bar": "fer2"}}));
}

#[rstest]
fn test_set_on_objects_creates_objects() {
    let original = value!(object {"foo": (object {"bar": "ter"})});
    let added = set(&original, "foo.baz.ber", value!("fer")).unwrap();

    assert_eq!(original, value!(object {"foo": (object {"bar": "ter"})}));
    assert_eq!(get(&added, "foo.baz"), value!(object {"ber": "fer"}));
    assert!(get(&added, "foo.baz").is_object());
}

#[rstest]
fn test_set_overrides_leaf_intermediate() {
    let original = value!({"foo": {"bar": "ter"}});
    let overridden = set(&original, "foo.bar.not_exist", value!("baz")).unwrap();
    assert_eq!(overridden, value!({"foo": {"bar": {"not_exist": "baz"}}}));
}

#[rstest]
fn test_set_on_leaf_is_an_error() {
    let result = set(&value!("text"), "a", value!(1));
    assert!(matches!(
        result,
        Err(Error::InvalidArgument { operation: "set", .. })
    ));
}

#[rstest]
fn test_universal_set_appends_to_sequences() {
    let updated = universal_set(&value!(["a"]), 1, value!("b")).unwrap();
    assert_eq!(updated, value!(["a", "b"]));
}
