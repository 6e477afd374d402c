//! Set difference, recursive diff and recursive key intersection.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    Result,
    ops::flatten::flatten,
    tree::{Node, TreeError, Value},
};

/// Result of [`difference_of_sets`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetDifference {
    /// Values found in the other inputs but not in the base
    pub add: Vec<Value>,
    /// Values found in the base but in none of the other inputs
    pub remove: Vec<Value>,
    /// `add.len() + remove.len()`
    pub count: usize,
}

impl SetDifference {
    /// Returns true when the inputs hold the same set of values
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Compares the base set (`inputs[0]`) with the union of all other inputs.
///
/// Inputs are treated as flat value sets: every input is [`flatten`]ed and
/// values compare by their plain string form, so `1`, `1.0` and `"1"` are one
/// element. Both halves of the result are deduplicated and keep first-seen
/// order (`add` in merge order of the other inputs).
///
/// Fails with [`TreeError::InvalidArgument`] when fewer than two inputs are given.
///
/// ```
/// # use arbor::{Node, Value, ops::difference_of_sets};
/// let base = Node::from_values([10, 20, 30, 40]);
/// let other = Node::from_values([20, 30, 50]);
///
/// let diff = difference_of_sets(&[base, other]).unwrap();
/// assert_eq!(diff.add, vec![Value::from(50)]);
/// assert_eq!(diff.remove, vec![Value::from(10), Value::from(40)]);
/// assert_eq!(diff.count, 3);
/// ```
pub fn difference_of_sets(inputs: &[Node]) -> Result<SetDifference> {
    let [base, others @ ..] = inputs else {
        return Err(too_few_inputs(0).into());
    };
    if others.is_empty() {
        return Err(too_few_inputs(1).into());
    }

    let base = flatten(base);
    let merged: Vec<Value> = others.iter().flat_map(flatten).collect();

    let base_set: HashSet<String> = base.iter().map(Value::to_plain_string).collect();
    let merged_set: HashSet<String> = merged.iter().map(Value::to_plain_string).collect();

    let add = distinct_missing(merged, &base_set);
    let remove = distinct_missing(base, &merged_set);
    let count = add.len() + remove.len();

    debug!(add = add.len(), remove = remove.len(), "Computed set difference");
    Ok(SetDifference { add, remove, count })
}

fn too_few_inputs(given: usize) -> TreeError {
    TreeError::InvalidArgument {
        reason: format!("set difference needs at least two inputs, got {given}"),
    }
}

/// Values of `values` whose string form is absent from `exclude`, deduplicated.
fn distinct_missing(values: Vec<Value>, exclude: &HashSet<String>) -> Vec<Value> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| {
            let plain = value.to_plain_string();
            !exclude.contains(&plain) && seen.insert(plain)
        })
        .collect()
}

/// Returns the entries of `first` that `second` does not carry.
///
/// For each key of `first`:
/// - absent from `second`: kept;
/// - both values are nodes: recursed into, kept only if the nested diff is
///   non-empty;
/// - `first` holds a node and `second` a leaf: the node is diffed against the
///   leaf wrapped as a one-element sequence (`null` as an empty node);
/// - both leaves (or a leaf against a node): kept when not
///   [loosely equal](Value::loosely_equals).
///
/// Keys that only exist in `second` never appear.
pub fn diff_assoc_recursive(first: &Node, second: &Node) -> Node {
    let mut diff = Node::new();
    for (key, value) in first.iter() {
        let Some(other) = second.get(key) else {
            diff.insert(key.clone(), value.clone());
            continue;
        };

        match (value, other) {
            (Value::Node(inner), Value::Node(other_inner)) => {
                let nested = diff_assoc_recursive(inner, other_inner);
                if !nested.is_empty() {
                    diff.insert(key.clone(), nested);
                }
            }
            (Value::Node(inner), leaf) => {
                let nested = diff_assoc_recursive(inner, &wrap_leaf(leaf));
                if !nested.is_empty() {
                    diff.insert(key.clone(), nested);
                }
            }
            (leaf, other) => {
                if !leaf.loosely_equals(other) {
                    diff.insert(key.clone(), leaf.clone());
                }
            }
        }
    }
    diff
}

/// A leaf compared against a node acts as a one-element sequence; `null` acts
/// as an empty node.
fn wrap_leaf(leaf: &Value) -> Node {
    match leaf {
        Value::Null => Node::new(),
        other => Node::from_values([other.clone()]),
    }
}

/// Keeps the entries of `first` whose keys also exist in `second`.
///
/// Values are never compared. Where both sides hold a node the entry is
/// replaced by the recursive intersection, even if that comes out empty.
pub fn intersect_keys_recursive(first: &Node, second: &Node) -> Node {
    first
        .iter()
        .filter_map(|(key, value)| {
            let other = second.get(key)?;
            let kept = match (value, other) {
                (Value::Node(inner), Value::Node(other_inner)) => {
                    Value::Node(intersect_keys_recursive(inner, other_inner))
                }
                _ => value.clone(),
            };
            Some((key.clone(), kept))
        })
        .collect()
}
