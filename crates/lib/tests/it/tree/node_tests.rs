//! Node integration tests: classification, ordering and key normalization.

use arbor::{Key, Node, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_classification_is_exclusive() {
    let samples = [
        json!([]),
        json!([1, 2, 3]),
        json!({"0": "a", "1": "b"}),
        json!({"1": "a", "0": "b"}),
        json!({"0": "a", "2": "b"}),
        json!({"a": 1}),
    ];
    for sample in samples {
        let n = node(sample);
        assert_ne!(n.is_sequential(), n.is_associative(), "{n}");
    }
}

#[test]
fn test_out_of_order_integer_keys_are_associative() {
    let n = node(json!({"1": "a", "0": "b"}));
    assert!(n.is_associative());
    assert_eq!(keys_of(&n), vec!["1", "0"]);
}

#[test]
fn test_string_and_integer_keys_alias() {
    let mut n = Node::new();
    n.insert("3", "three");
    assert_eq!(n.get(3), Some(&Value::from("three")));
    assert_eq!(n.get(Key::Index(3)), Some(&Value::from("three")));
    assert!(n.contains_key("3"));
    assert!(!n.contains_key("03"));
}

#[test]
fn test_push_after_sparse_keys() {
    let mut n = node(json!({"5": "a", "name": "b"}));
    assert_eq!(n.push("c"), Key::Index(6));
    assert_eq!(keys_of(&n), vec!["5", "name", "6"]);
}

#[test]
fn test_from_iterator_of_pairs_keeps_order() {
    let n: Node = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();
    assert_eq!(keys_of(&n), vec!["z", "a", "m"]);
    assert_eq!(n.get_as::<i64>("a"), Some(2));
}

#[test]
fn test_display_is_compact_json() {
    assert_eq!(node(json!([1, "a"])).to_string(), r#"[1,"a"]"#);
    assert_eq!(node(json!({"k": null})).to_string(), r#"{"k":null}"#);
}
