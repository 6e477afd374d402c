//! Classification predicates and structural metrics.

use crate::{
    constants::DEFAULT_GLUE,
    ops::flatten::flatten_assoc,
    tree::{Node, Value},
};

/// Returns true iff the node's keys, in insertion order, are `0..len`.
pub fn is_sequential(node: &Node) -> bool {
    node.is_sequential()
}

/// Returns true iff the node is not sequential.
pub fn is_associative(node: &Node) -> bool {
    !is_sequential(node)
}

/// Checks whether a node is empty or holds an empty value anywhere below it.
///
/// Nested nodes are checked recursively. Numeric leaves are never empty; every
/// other leaf is empty when it is blank (`null`, `false`, `""`). The walk is
/// depth-first in iteration order and stops at the first empty entry.
///
/// ```
/// # use arbor::{Node, Value, ops::has_empty_values};
/// let mut node = Node::from_values(["a", "b"]);
/// assert!(!has_empty_values(&node));
///
/// node.push(Node::from_values([""]));
/// assert!(has_empty_values(&node));
/// assert!(has_empty_values(&Node::new()));
/// ```
pub fn has_empty_values(node: &Node) -> bool {
    if node.is_empty() {
        return true;
    }

    node.values().any(|value| match value {
        Value::Node(inner) => has_empty_values(inner),
        leaf if leaf.is_numeric() => false,
        leaf => leaf.is_blank(),
    })
}

/// Nesting depth: one plus the deepest child node. Leaves add nothing.
///
/// An empty node has depth 1.
pub fn depth(node: &Node) -> usize {
    1 + node
        .values()
        .filter_map(Value::as_node)
        .map(depth)
        .max()
        .unwrap_or(0)
}

/// Counts the leaves reachable from `node`.
///
/// Nested nodes contribute the count of their own leaves, never themselves.
pub fn deep_count(node: &Node) -> usize {
    node.values()
        .map(|value| match value {
            Value::Node(inner) => deep_count(inner),
            _ => 1,
        })
        .sum()
}

/// Counts the entries of the key-flattened form of `node`.
///
/// This is the size of [`flatten_assoc`] with the default glue. It agrees with
/// [`deep_count`] unless synthesized keys collide, e.g. a literal `a_b` key
/// next to a nested `a -> b`.
pub fn flat_count(node: &Node) -> usize {
    flatten_assoc(node, DEFAULT_GLUE).len()
}

/// Finds the highest entry count among the nodes nested in `node`.
///
/// The root's own entry count only takes part when `count_self` is true.
/// An empty node yields 0.
pub fn find_highest_count(node: &Node, count_self: bool) -> usize {
    if node.is_empty() {
        return 0;
    }

    let own = if count_self { node.len() } else { 0 };
    node.values()
        .filter_map(Value::as_node)
        .map(|inner| find_highest_count(inner, true))
        .fold(own, usize::max)
}
