#![cfg(all(feature = "serde", feature = "path"))]

//! Integration tests for serde support in lowbar.
//!
//! These tests verify that values survive a JSON round trip and that the
//! path and combinator operations work on deserialized documents.

use lowbar::path::{get, set};
use lowbar::{Key, Value, value};
use rstest::rstest;

// =============================================================================
// Value Round Trips
// =============================================================================

#[rstest]
fn test_value_json_roundtrip() {
    let original = value!({
        "name": "lowbar",
        "tags": ["path", "merge"],
        "nested": {"enabled": true, "ratio": 0.5, "missing": null}
    });

    let json = serde_json::to_string(&original).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[rstest]
fn test_sequences_serialize_as_arrays() {
    let json = serde_json::to_string(&value!([1, "two", null])).unwrap();
    assert_eq!(json, r#"[1,"two",null]"#);
}

#[rstest]
fn test_objects_serialize_as_maps() {
    let json = serde_json::to_string(&value!(object {"a": 1, 0: 2})).unwrap();
    assert_eq!(json, r#"{"a":1,"0":2}"#);
}

#[rstest]
fn test_deserialized_maps_are_array_like() {
    let restored: Value = serde_json::from_str(r#"{"a": {"b": 1}}"#).unwrap();
    assert!(restored.is_array_like());
    assert!(get(&restored, "a").is_array_like());
}

#[rstest]
fn test_numeric_json_keys_become_indices() {
    let restored: Value = serde_json::from_str(r#"{"0": "zero", "01": "padded"}"#).unwrap();
    assert_eq!(get(&restored, 0), value!("zero"));
    assert!(restored.contains_key(&Key::Name("01".to_string())));
}

#[rstest]
fn test_key_roundtrip() {
    for key in [Key::Index(3), Key::parse("name")] {
        let json = serde_json::to_string(&key).unwrap();
        let restored: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, key);
    }
}

// =============================================================================
// Operations on Deserialized Documents
// =============================================================================

#[rstest]
fn test_set_on_deserialized_document() {
    let document: Value = serde_json::from_str(r#"{"foo": {"bar": "ter"}}"#).unwrap();
    let updated = set(&document, "foo.baz.ber", value!("fer")).unwrap();

    assert_eq!(
        serde_json::to_value(&updated).unwrap(),
        serde_json::json!({"foo": {"bar": "ter", "baz": {"ber": "fer"}}})
    );
}

#[rstest]
fn test_opaque_values_fail_to_serialize() {
    let error = serde_json::to_string(&Value::opaque(1_u8)).unwrap_err();
    assert!(error.to_string().contains("opaque"));
}
