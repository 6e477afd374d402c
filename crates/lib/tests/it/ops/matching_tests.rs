//! Structural matching tests

use arbor::{
    TreeError,
    ops::{glob_match, matches},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_matches_wildcard_example() {
    let n = node(json!({"hello": "there"}));
    assert!(matches(&n, &node(json!({"hello": "th*"})), true).unwrap());

    let spec = node(json!({"hello": "xy*"}));
    let err = matches(&n, &spec, true).unwrap_err();
    assert!(err.is_value_mismatch());
    assert!(!matches(&n, &spec, false).unwrap());
}

#[test]
fn test_matches_ignores_extra_keys_in_node() {
    let n = node(json!({"a": 1, "b": 2, "c": {"d": "x", "e": "y"}}));
    assert!(matches(&n, &node(json!({"c": {"e": "?"}})), true).unwrap());
    assert!(matches(&n, &node(json!({})), true).unwrap());
}

#[test]
fn test_matches_recurses_into_sequences() {
    let n = node(json!({"tags": ["red", "green"]}));
    assert!(matches(&n, &node(json!({"tags": ["r*", "gr??n"]})), true).unwrap());
    assert!(matches(&n, &node(json!({"tags": {"1": "g*"}})), true).unwrap());
}

#[test]
fn test_matches_error_kinds() {
    let n = node(json!({"a": {"b": 1}, "c": "leaf"}));

    let err = matches(&n, &node(json!({"missing": 1})), true).unwrap_err();
    assert!(matches!(err.as_tree_error(), Some(TreeError::KeyMissing { .. })));

    let err = matches(&n, &node(json!({"a": "1"})), true).unwrap_err();
    assert!(err.is_type_mismatch());

    let err = matches(&n, &node(json!({"c": {"x": 1}})), true).unwrap_err();
    assert!(err.is_type_mismatch());

    for spec in [json!({"missing": 1}), json!({"a": "1"}), json!({"a": {"b": 2}})] {
        assert!(!matches(&n, &node(spec), false).unwrap());
    }
}

#[test]
fn test_matches_value_mismatch_reports_details() {
    let n = node(json!({"user": {"name": "ann"}}));
    let err = matches(&n, &node(json!({"user": {"name": "b*"}})), true).unwrap_err();

    match err.as_tree_error() {
        Some(TreeError::ValueMismatch { path, pattern, actual }) => {
            assert_eq!(path, "user:name");
            assert_eq!(pattern, "b*");
            assert_eq!(actual, "ann");
        }
        other => panic!("expected a value mismatch, got {other:?}"),
    }
}

#[test]
fn test_invalid_pattern_always_propagates() {
    let n = node(json!({"a": "b"}));
    let spec = node(json!({"a": "[z-a]"}));
    assert!(matches(&n, &spec, false).is_err());
}

#[test]
fn test_glob_is_anchored_and_literal() {
    assert!(glob_match("*.rs", "main.rs").unwrap());
    assert!(!glob_match("*.rs", "main.rs.bak").unwrap());
    assert!(glob_match("a+b", "a+b").unwrap());
    assert!(!glob_match("a+b", "aab").unwrap());
    assert!(glob_match("line*", "line one\nline two").unwrap());
    assert!(glob_match("[a-c]x", "bx").unwrap());
    assert!(!glob_match("[!a-c]x", "bx").unwrap());
}
