//! Set difference, recursive diff and intersection tests

use arbor::ops::{difference_of_sets, diff_assoc_recursive, intersect_keys_recursive};
use serde_json::json;

use crate::helpers::*;

// ===== DIFFERENCE OF SETS =====

#[test]
fn test_difference_example() {
    let diff =
        difference_of_sets(&[node(json!([10, 20, 30, 40])), node(json!([20, 30, 50]))]).unwrap();
    assert_eq!(diff.add, values(json!([50])));
    assert_eq!(diff.remove, values(json!([10, 40])));
    assert_eq!(diff.count, 3);
}

#[test]
fn test_difference_deduplicates() {
    let diff = difference_of_sets(&[
        node(json!(["a", "a", "b"])),
        node(json!(["c", "c"])),
        node(json!(["c", "d"])),
    ])
    .unwrap();
    assert_eq!(diff.add, values(json!(["c", "d"])));
    assert_eq!(diff.remove, values(json!(["a", "b"])));
    assert_eq!(diff.count, 4);
}

#[test]
fn test_difference_ignores_keys_and_nesting() {
    let diff =
        difference_of_sets(&[node(json!({"x": 1, "y": [2]})), node(json!([[2], {"z": 1}]))])
            .unwrap();
    assert!(diff.is_empty());
}

#[test]
fn test_difference_arity() {
    let err = difference_of_sets(&[node(json!([1]))]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.module(), "tree");
}

// ===== RECURSIVE DIFF =====

#[test]
fn test_diff_identity_is_empty() {
    let samples = [
        json!({}),
        json!([1, 2, 3]),
        json!({"a": {"b": [1, {"c": null}]}, "d": "x"}),
    ];
    for sample in samples {
        let x = node(sample);
        assert!(diff_assoc_recursive(&x, &x).is_empty(), "{x}");
    }
}

#[test]
fn test_diff_keeps_changed_and_missing() {
    let first = node(json!({"a": 1, "b": {"c": 2, "d": 3}, "e": "same"}));
    let second = node(json!({"b": {"c": 2, "d": 4}, "e": "same", "f": "only in second"}));

    let diff = diff_assoc_recursive(&first, &second);
    assert_same_order(&diff, &node(json!({"a": 1, "b": {"d": 3}})));
}

#[test]
fn test_diff_uses_loose_equality() {
    let first = node(json!({"n": 1, "s": "", "b": true}));
    let second = node(json!({"n": "1", "s": null, "b": "yes"}));
    assert!(diff_assoc_recursive(&first, &second).is_empty());
}

#[test]
fn test_diff_leaf_against_node() {
    let first = node(json!({"a": 1}));
    let second = node(json!({"a": [1]}));
    assert_eq!(diff_assoc_recursive(&first, &second), first);
}

#[test]
fn test_diff_node_against_leaf_compares_wrapped_leaf() {
    let first = node(json!({"a": [1], "b": ["x", "y"], "c": {"k": 1}}));
    let second = node(json!({"a": 1, "b": "x", "c": null}));

    let diff = diff_assoc_recursive(&first, &second);
    assert_same_order(&diff, &node(json!({"b": {"1": "y"}, "c": {"k": 1}})));
}

// ===== INTERSECTION =====

#[test]
fn test_intersection_idempotent() {
    let x = node(json!({"a": {"b": [1, 2], "c": {}}, "d": null}));
    assert_same_order(&intersect_keys_recursive(&x, &x), &x);
}

#[test]
fn test_intersection_ignores_values() {
    let first = node(json!({"a": 1, "b": {"c": 2, "d": 3}, "e": 4}));
    let second = node(json!({"a": "other", "b": {"d": null}, "x": 0}));

    let result = intersect_keys_recursive(&first, &second);
    assert_same_order(&result, &node(json!({"a": 1, "b": {"d": 3}})));
}

#[test]
fn test_intersection_node_against_leaf_keeps_node() {
    let first = node(json!({"a": {"b": 1}}));
    let second = node(json!({"a": 5}));
    assert_eq!(intersect_keys_recursive(&first, &second), first);
}
