//! Element and sequence operation tests

use arbor::{
    Key, Node, Value,
    ops::{
        all, all_blank, any, any_blank, append_element, flip_sequential, has_all, has_any,
        move_element, partition, replace_element, replace_elements, splat, trim, unique_callback,
        zip,
    },
};
use serde_json::json;

use crate::helpers::*;

// ===== MOVE =====

#[test]
fn test_move_element_example() {
    let seq = node(json!([5, 9, 2, 0]));
    let moved = move_element(&seq, 3usize, 0).unwrap();

    assert_eq!(moved.get(0), seq.get(3));
    assert_eq!(moved, node(json!([0, 5, 9, 2])));
    assert!(moved.is_sequential());
}

#[test]
fn test_move_element_forward() {
    let moved = move_element(&node(json!(["a", "b", "c", "d"])), 0usize, 2).unwrap();
    assert_eq!(moved, node(json!(["b", "c", "a", "d"])));
}

#[test]
fn test_move_named_entry_keeps_keys() {
    let n = node(json!({"x": 1, "y": 2, "z": 3}));
    let moved = move_element(&n, "z", 1).unwrap();
    assert_same_order(&moved, &node(json!({"x": 1, "z": 3, "y": 2})));
}

#[test]
fn test_move_past_end_appends() {
    let moved = move_element(&node(json!([1, 2, 3])), Key::Index(0), 50).unwrap();
    assert_eq!(moved, node(json!([2, 3, 1])));
}

// ===== REPLACE =====

#[test]
fn test_replace_first_match_only() {
    let seq = node(json!(["a", "b", "a"]));
    let replaced = replace_element(&seq, &Value::from("a"), "z");
    assert_eq!(replaced, node(json!(["z", "b", "a"])));
}

#[test]
fn test_replace_missing_value_is_silent_noop() {
    let seq = node(json!([1, 2, 3]));
    assert_eq!(replace_element(&seq, &Value::from(42), 0), seq);
}

#[test]
fn test_replace_elements_pairwise() {
    let seq = node(json!(["a", "b", "c"]));
    let replaced =
        replace_elements(&seq, &values(json!(["a", "c"])), &values(json!(["A", "C"]))).unwrap();
    assert_eq!(replaced, node(json!(["A", "b", "C"])));
}

#[test]
fn test_replace_elements_chained() {
    let seq = node(json!([1, 2]));
    let replaced = replace_elements(&seq, &values(json!([1, 9])), &values(json!([9, 7]))).unwrap();
    assert_eq!(replaced, node(json!([7, 2])));
}

// ===== APPEND =====

#[test]
fn test_append_boundaries() {
    let seq = node(json!([1, 2, 3]));
    assert_eq!(append_element(&seq, node(json!([4])), -1), node(json!([1, 2, 3, 4])));
    assert_eq!(append_element(&seq, node(json!([4])), 0), node(json!([4, 1, 2, 3])));
}

#[test]
fn test_append_splices_node_arguments() {
    let seq = node(json!(["a", "d"]));
    let result = append_element(&seq, node(json!({"x": "b", "y": "c"})), 1);
    assert_eq!(result, node(json!(["a", "b", "c", "d"])));
}

#[test]
fn test_append_wrapped_node_stays_nested() {
    let seq = node(json!([1]));
    let wrapped = Node::from_values([node(json!({"k": "v"}))]);
    let result = append_element(&seq, wrapped, -1);
    assert_eq!(result.len(), 2);
    assert_eq!(result.get(1), Some(&value(json!({"k": "v"}))));
}

#[test]
fn test_append_keeps_string_keys() {
    let n = node(json!({"name": "x", "0": "a"}));
    let result = append_element(&n, "b", -1);
    assert_eq!(keys_of(&result), vec!["name", "0", "1"]);
}

// ===== UNIQUE / PARTITION / TRIM =====

#[test]
fn test_unique_callback_keeps_last() {
    let people = node(json!([
        {"id": 1, "v": "first"},
        {"id": 2, "v": "other"},
        {"id": 1, "v": "second"},
    ]));
    let id = |v: &Value| v.as_node().and_then(|n| n.get_as::<i64>("id")).unwrap_or(-1);

    let unique = unique_callback(&people, id, false);
    assert_eq!(keys_of(&unique), vec!["1", "2"]);
    assert_eq!(path_text(&unique, 1), "second");

    let mapped = unique_callback(&people, id, true);
    assert_eq!(mapped, node(json!({"1": 1, "2": 2})));
}

fn path_text(n: &Node, key: u64) -> String {
    n.get(key)
        .and_then(Value::as_node)
        .and_then(|inner| inner.get_as::<String>("v"))
        .unwrap_or_default()
}

#[test]
fn test_unique_callback_with_string_keys() {
    let words = node(json!(["Apple", "avocado", "Banana"]));
    let first_letter = |v: &Value| {
        v.as_text()
            .and_then(|s| s.chars().next())
            .map(|c| c.to_ascii_lowercase().to_string())
            .unwrap_or_default()
    };
    let unique = unique_callback(&words, first_letter, false);
    assert_eq!(unique, node(json!({"a": "avocado", "b": "Banana"})));
}

#[test]
fn test_partition_is_exclusive_and_keeps_keys() {
    let n = node(json!([1, 2, 3, 4, 5]));
    let (even, odd) = partition(&n, |v| v.as_int().is_some_and(|i| i % 2 == 0));

    assert_eq!(keys_of(&even), vec!["1", "3"]);
    assert_eq!(keys_of(&odd), vec!["0", "2", "4"]);
    assert_eq!(even.len() + odd.len(), n.len());
    assert!(even.keys().all(|k| !odd.contains_key(k)));
}

#[test]
fn test_trim_trailing_blanks() {
    assert_eq!(trim(&node(json!([1, "", null, false]))), node(json!([1])));
    assert_eq!(trim(&node(json!([1, "", 2]))), node(json!([1, "", 2])));
    assert_eq!(trim(&node(json!([null, "x", {}]))), node(json!([null, "x"])));
    assert!(trim(&node(json!([]))).is_empty());
}

// ===== ZIP / SPLAT =====

#[test]
fn test_zip_truncates_to_shortest() {
    let zipped = zip(&[node(json!([1, 2, 3])), node(json!(["a", "b"])), node(json!([true, false, null]))]);
    assert_eq!(zipped, node(json!([[1, "a", true], [2, "b", false]])));
}

#[test]
fn test_zip_edge_cases() {
    assert!(zip(&[]).is_empty());
    assert!(zip(&[node(json!([1])), node(json!([]))]).is_empty());
    assert_eq!(zip(&[node(json!({"x": 1, "y": 2}))]), node(json!([[1], [2]])));
}

#[test]
fn test_splat_packs_values() {
    let packed = splat([Value::from(1), Value::from("two"), Value::Null]);
    assert!(packed.is_sequential());
    assert_eq!(packed, node(json!([1, "two", null])));
    assert_eq!(zip(&[splat([1, 2]), splat([3, 4])]), node(json!([[1, 3], [2, 4]])));
}

// ===== MEMBERSHIP AND PREDICATES =====

#[test]
fn test_has_all_and_has_any() {
    let hay = node(json!([1, "two", 3.0]));
    assert!(has_all(&hay, &values(json!(["1", "two", 3]))));
    assert!(!has_all(&hay, &values(json!([1, 4]))));
    assert!(has_all(&hay, &[]));

    assert!(has_any(&hay, &values(json!([4, "two"]))));
    assert!(!has_any(&hay, &values(json!([4, 5]))));
    assert!(!has_any(&hay, &[]));
}

#[test]
fn test_any_and_all() {
    let n = node(json!([2, 4, 5]));
    assert!(any(&n, |v| v.as_int() == Some(5)));
    assert!(!all(&n, |v| v.as_int().is_some_and(|i| i % 2 == 0)));
    assert!(all(&node(json!([])), |_| false));
    assert!(!any(&node(json!([])), |_| true));
}

#[test]
fn test_blank_helpers() {
    assert!(any_blank(&values(json!([1, "", "x"]))));
    assert!(!any_blank(&values(json!([1, "x", [0]]))));
    assert!(all_blank(&values(json!([null, false, "", []]))));
    assert!(!all_blank(&values(json!([null, "0.0"]))));
    assert!(all_blank(&[]));
}

#[test]
fn test_blank_helpers_treat_zero_as_empty() {
    assert!(any_blank(&[Value::from(0)]));
    assert!(any_blank(&values(json!([1, "0"]))));
    assert!(all_blank(&values(json!([0, 0.0, "0", null]))));
}

#[test]
fn test_flip_sequential() {
    let flipped = flip_sequential(&node(json!(["a", 2, true])), Value::Null);
    assert_eq!(keys_of(&flipped), vec!["a", "2", "1"]);
    assert!(flipped.values().all(Value::is_null));

    let counted = flip_sequential(&node(json!(["x", "x"])), 0);
    assert_eq!(counted, node(json!({"x": 0})));
}
