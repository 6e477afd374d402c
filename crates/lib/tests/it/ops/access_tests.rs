//! Path access, path writes and grouping tests

use arbor::{
    TreeError, Value,
    constants::DEFAULT_DELIMITER,
    ops::{group_by_keys, path_get, path_set},
};
use serde_json::json;

use crate::helpers::*;

// ===== PATH GET =====

#[test]
fn test_path_get_example() {
    let n = node(json!({"one": ["some", "value"]}));
    assert_eq!(path_get(&n, "one:0", DEFAULT_DELIMITER).unwrap(), "some");
    assert_eq!(path_get(&n, "one:1", DEFAULT_DELIMITER).unwrap(), "value");
}

#[test]
fn test_path_get_ignores_empty_segments() {
    let n = node(json!({"a": {"b": 1}}));
    assert_eq!(path_get(&n, ":a::b:", ":").unwrap(), &Value::from(1));
}

#[test]
fn test_path_get_custom_delimiter() {
    let n = node(json!({"one": {"two": {"three": true}}}));
    assert_eq!(path_get(&n, "one->two->three", "->").unwrap(), &Value::Bool(true));
}

#[test]
fn test_path_get_returns_subtrees() {
    let n = node(json!({"a": {"b": [1, 2]}}));
    let sub = path_get(&n, "a:b", ":").unwrap();
    assert_eq!(sub, &value(json!([1, 2])));
}

#[test]
fn test_path_get_missing_segment() {
    let n = node(json!({"a": {"b": 1}}));
    let err = path_get(&n, "a:x:y", ":").unwrap_err();
    assert!(err.is_not_found());

    let tree_err = err.as_tree_error().unwrap();
    assert_eq!(tree_err.key(), Some("x"));
    assert_eq!(tree_err.path(), Some("a:x:y"));
    assert!(matches!(tree_err, TreeError::KeyNotFound { .. }));
}

// ===== PATH SET =====

#[test]
fn test_path_set_creates_intermediates() {
    let original = node(json!({"keep": 1}));
    let updated = path_set(&original, "a:b:c", "deep", ":").unwrap();

    assert_same_order(&updated, &node(json!({"keep": 1, "a": {"b": {"c": "deep"}}})));
    assert_eq!(original, node(json!({"keep": 1})));
}

#[test]
fn test_path_set_overwrites_in_place() {
    let original = node(json!({"x": 1, "y": {"z": 2}, "w": 3}));
    let updated = path_set(&original, "y", value(json!([9])), ":").unwrap();
    assert_eq!(keys_of(&updated), vec!["x", "y", "w"]);
    assert_eq!(path_get(&updated, "y:0", ":").unwrap(), &Value::from(9));
}

#[test]
fn test_path_set_then_get() {
    let updated = path_set(&node(json!([])), "list::0", "first", "::").unwrap();
    assert_eq!(path_get(&updated, "list::0", "::").unwrap(), "first");
    assert!(path_get(&updated, "list", "::").unwrap().as_node().unwrap().is_sequential());
}

#[test]
fn test_path_set_empty_path() {
    let err = path_set(&node(json!({})), "", 1, ":").unwrap_err();
    assert!(err.is_invalid_argument());
}

// ===== GROUPING =====

#[test]
fn test_group_by_single_key() {
    let rows = node(json!([
        {"lang": "rust", "name": "arbor"},
        {"lang": "go", "name": "hugo"},
        {"lang": "rust", "name": "ripgrep"},
    ]));

    let grouped = group_by_keys(&rows, &["lang"]).unwrap();
    assert_same_order(
        &grouped,
        &node(json!({
            "rust": [{"name": "arbor"}, {"name": "ripgrep"}],
            "go": [{"name": "hugo"}],
        })),
    );
}

#[test]
fn test_group_by_numeric_and_bool_values() {
    let rows = node(json!([
        {"year": 2024, "ok": true, "id": 1},
        {"year": 2024, "ok": false, "id": 2},
        {"year": 2023, "ok": true, "id": 3},
    ]));

    let grouped = group_by_keys(&rows, &["year", "ok"]).unwrap();
    assert_eq!(path_get(&grouped, "2024:1:0:id", ":").unwrap(), &Value::from(1));
    assert_eq!(path_get(&grouped, "2024:0:0:id", ":").unwrap(), &Value::from(2));
    assert_eq!(path_get(&grouped, "2023:1:0:id", ":").unwrap(), &Value::from(3));
}

#[test]
fn test_group_rejects_bad_elements() {
    let err = group_by_keys(&node(json!([1])), &["k"]).unwrap_err();
    assert!(err.is_type_mismatch());

    let err = group_by_keys(&node(json!([{"k": {"nested": 1}}])), &["k"]).unwrap_err();
    assert!(err.is_type_mismatch());

    let err = group_by_keys(&node(json!([{"k": 1}])), &[] as &[&str]).unwrap_err();
    assert!(err.is_invalid_argument());
}
