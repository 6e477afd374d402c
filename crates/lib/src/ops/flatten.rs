//! Flattening nested trees into a single level.
//!
//! Three shapes are offered: [`flatten`] drops all key information,
//! [`flatten_assoc`] keeps it by synthesizing `glue`-joined keys, and
//! [`flatten_values`] yields only those synthesized keys.

use crate::tree::{Key, Node, Value};

/// Collects every leaf in depth-first pre-order, discarding keys.
///
/// ```
/// # use arbor::{Node, Value, ops::flatten};
/// let mut node = Node::from_values([1, 2]);
/// node.push(Node::from_values([3, 4]));
/// assert_eq!(flatten(&node), vec![Value::from(1), 2.into(), 3.into(), 4.into()]);
/// ```
pub fn flatten(node: &Node) -> Vec<Value> {
    let mut leaves = Vec::new();
    collect_leaves(node, &mut leaves);
    leaves
}

fn collect_leaves(node: &Node, out: &mut Vec<Value>) {
    for value in node.values() {
        match value {
            Value::Node(inner) => collect_leaves(inner, out),
            leaf => out.push(leaf.clone()),
        }
    }
}

/// Flattens `node` into one level, joining nested keys with `glue`.
///
/// Top-level leaves keep their key. A leaf reached through `b -> c` is stored
/// under `b{glue}c`. Synthesized keys are normalized like any other string key,
/// so `"0_1"` stays a name while a top-level `0` stays an index. When two
/// synthesized keys collide the later value wins and the first position is
/// kept.
pub fn flatten_assoc(node: &Node, glue: &str) -> Node {
    let mut flattened = Node::new();
    for (key, value) in node.iter() {
        match value {
            Value::Node(inner) => {
                for (inner_key, inner_value) in flatten_assoc(inner, glue) {
                    flattened.insert(format!("{key}{glue}{inner_key}"), inner_value);
                }
            }
            leaf => {
                flattened.insert(key.clone(), leaf.clone());
            }
        }
    }
    flattened
}

/// Returns the synthesized key of every leaf, in depth-first order.
///
/// These are the keys [`flatten_assoc`] would produce, without collapsing
/// collisions.
pub fn flatten_values(node: &Node, glue: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for (key, value) in node.iter() {
        match value {
            Value::Node(inner) => keys.extend(
                flatten_values(inner, glue)
                    .into_iter()
                    .map(|inner_key| format!("{key}{glue}{inner_key}")),
            ),
            _ => keys.push(key.to_string()),
        }
    }
    keys
}

/// Returns every leaf in plain string form, prefixed by its parent keys.
///
/// A top-level leaf yields just its value; a leaf under `a -> b` yields
/// `a{glue}b{glue}value`.
pub fn flatten_prefixed_values(node: &Node, glue: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (key, value) in node.iter() {
        match value {
            Value::Node(inner) => out.extend(
                prefixed_leaves(inner, glue)
                    .into_iter()
                    .map(|rest| join_key(key, glue, &rest)),
            ),
            leaf => out.push(leaf.to_plain_string()),
        }
    }
    out
}

// Inside a nested node every leaf is reported with its own key in front.
fn prefixed_leaves(node: &Node, glue: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (key, value) in node.iter() {
        match value {
            Value::Node(inner) => out.extend(
                prefixed_leaves(inner, glue)
                    .into_iter()
                    .map(|rest| join_key(key, glue, &rest)),
            ),
            leaf => out.push(join_key(key, glue, &leaf.to_plain_string())),
        }
    }
    out
}

fn join_key(key: &Key, glue: &str, rest: &str) -> String {
    format!("{key}{glue}{rest}")
}
