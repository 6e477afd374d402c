//! JSON interop integration tests

use arbor::{Node, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_json_round_trip_through_value() {
    let source = json!({
        "name": "arbor",
        "tags": ["a", "b"],
        "nested": {"depth": 2, "ratio": 0.25, "on": false, "none": null},
    });

    let tree = value(source.clone());
    let back: serde_json::Value = tree.into();
    assert_eq!(back, source);
}

#[test]
fn test_sparse_sequence_serializes_as_object() {
    let mut n = node(json!(["a", "b", "c"]));
    n.remove(1);
    assert!(n.is_associative());

    let json: serde_json::Value = n.into();
    assert_eq!(json, json!({"0": "a", "2": "c"}));
}

#[test]
fn test_deserialize_object_with_index_keys() {
    let n: Node = serde_json::from_str(r#"{"0": "x", "1": "y"}"#).unwrap();
    assert!(n.is_sequential());
    assert_eq!(serde_json::to_string(&n).unwrap(), r#"["x","y"]"#);
}

#[test]
fn test_large_unsigned_becomes_float() {
    let v: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert!(matches!(v, Value::Float(_)));
}
