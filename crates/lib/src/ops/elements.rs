//! Element-level operations on nodes: moving, replacing, inserting,
//! deduplicating, splitting and zipping.
//!
//! Wherever an operation re-slots entries the way a splice does (`move_element`,
//! `append_element`), integer keys are renumbered `0..n` in their new order and
//! string keys are kept.

use tracing::{debug, trace};

use crate::{
    Result,
    tree::{Key, Node, TreeError, Value},
};

/// Moves one entry to position `to`, keeping the order of all other entries.
///
/// `from` given as [`Key::Index`] is a *position*; given as [`Key::Name`] it is
/// looked up as a key. A `to` past the end moves the entry to the end.
///
/// ```
/// # use arbor::{Node, ops::move_element};
/// let seq = Node::from_values([5, 9, 2, 0]);
/// let moved = move_element(&seq, 3usize, 0).unwrap();
/// assert_eq!(moved, Node::from_values([0, 5, 9, 2]));
/// ```
pub fn move_element(node: &Node, from: impl Into<Key>, to: usize) -> Result<Node> {
    let from = from.into();
    let source = match &from {
        Key::Index(position) => usize::try_from(*position)
            .ok()
            .filter(|position| *position < node.len()),
        name @ Key::Name(_) => node.position_of(name),
    };
    let Some(source) = source else {
        return Err(TreeError::KeyNotFound {
            path: String::new(),
            key: from.to_string(),
        }
        .into());
    };

    let mut entries = node.clone().into_entries();
    let entry = entries.remove(source);
    let target = to.min(entries.len());
    entries.insert(target, entry);

    trace!(%from, source, target, "Moved element");
    Ok(Node::from_spliced(entries))
}

/// Replaces the first value [loosely equal](Value::loosely_equals) to `old`.
///
/// When no value matches the node is returned unchanged; this is not an
/// error.
pub fn replace_element(node: &Node, old: &Value, new: impl Into<Value>) -> Node {
    let mut result = node.clone();
    match result.values_mut().find(|value| value.loosely_equals(old)) {
        Some(slot) => *slot = new.into(),
        None => debug!(value = %old, "No element to replace"),
    }
    result
}

/// Applies [`replace_element`] pairwise, in order.
///
/// Fails with [`TreeError::InvalidArgument`] if the two lists differ in length.
pub fn replace_elements(node: &Node, old: &[Value], new: &[Value]) -> Result<Node> {
    if old.len() != new.len() {
        return Err(TreeError::InvalidArgument {
            reason: format!(
                "{} values to replace but {} replacements",
                old.len(),
                new.len()
            ),
        }
        .into());
    }

    Ok(old
        .iter()
        .zip(new)
        .fold(node.clone(), |acc, (old, new)| {
            replace_element(&acc, old, new.clone())
        }))
}

/// Inserts `elements` at `position`.
///
/// `-1` appends, `0` prepends. Other negative positions count from the end
/// (clamped at the front) and positions past the end append.
///
/// A node argument is spliced in: each of its values is inserted on its own
/// and its keys are dropped. To insert a node as a single element, wrap it in
/// a one-element sequence first.
///
/// ```
/// # use arbor::{Node, ops::append_element};
/// let seq = Node::from_values([1, 2, 3]);
/// assert_eq!(append_element(&seq, Node::from_values([4]), -1), Node::from_values([1, 2, 3, 4]));
/// assert_eq!(append_element(&seq, Node::from_values([4]), 0), Node::from_values([4, 1, 2, 3]));
/// ```
pub fn append_element(node: &Node, elements: impl Into<Value>, position: isize) -> Node {
    let mut entries = node.clone().into_entries();
    let len = entries.len();
    let at = match position {
        -1 => len,
        p if p < 0 => len.saturating_sub(p.unsigned_abs()),
        p => p.unsigned_abs().min(len),
    };

    let inserted: Vec<(Key, Value)> = match elements.into() {
        Value::Node(spliced) => spliced
            .into_entries()
            .into_iter()
            .map(|(_, value)| (Key::Index(0), value))
            .collect(),
        leaf => vec![(Key::Index(0), leaf)],
    };

    let tail = entries.split_off(at);
    entries.extend(inserted);
    entries.extend(tail);
    Node::from_spliced(entries)
}

/// Deduplicates values by the key `key_fn` computes for each of them.
///
/// A later value overwrites an earlier one with the same computed key; the key
/// keeps the position where it was first seen. With `map_result` the computed
/// key itself is stored as the value.
pub fn unique_callback<F, K>(node: &Node, mut key_fn: F, map_result: bool) -> Node
where
    F: FnMut(&Value) -> K,
    K: Into<Key>,
{
    let mut result = Node::new();
    for value in node.values() {
        let key = key_fn(value).into();
        let stored = if map_result {
            key_as_value(&key)
        } else {
            value.clone()
        };
        result.insert(key, stored);
    }
    result
}

fn key_as_value(key: &Key) -> Value {
    match key {
        Key::Index(i) => Value::from(*i),
        Key::Name(name) => Value::from(name.as_str()),
    }
}

/// Splits `node` into the entries matching `predicate` and the rest.
///
/// Both halves keep the original keys, so neither is necessarily sequential.
pub fn partition<F>(node: &Node, mut predicate: F) -> (Node, Node)
where
    F: FnMut(&Value) -> bool,
{
    let mut matching = Node::new();
    let mut rest = Node::new();
    for (key, value) in node.iter() {
        let half = if predicate(value) {
            &mut matching
        } else {
            &mut rest
        };
        half.insert(key.clone(), value.clone());
    }
    (matching, rest)
}

/// Drops the trailing run of blank values.
///
/// Scanning stops at the first non-blank value from the end; a blank value
/// before it is kept.
pub fn trim(node: &Node) -> Node {
    let keep = node
        .values()
        .rposition(|value| !value.is_blank())
        .map_or(0, |last| last + 1);
    node.iter()
        .take(keep)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Groups the values of several nodes position by position.
///
/// The result is a sequence of tuples (sequential nodes), one per position,
/// truncated to the shortest input. No inputs gives an empty node.
///
/// ```
/// # use arbor::{Node, Value, ops::zip};
/// let zipped = zip(&[Node::from_values([1, 2, 3]), Node::from_values(["a", "b"])]);
/// assert_eq!(zipped.len(), 2);
/// let second = Node::from_values([Value::from(2), Value::from("b")]);
/// assert_eq!(zipped.get(1), Some(&Value::Node(second)));
/// ```
pub fn zip(sequences: &[Node]) -> Node {
    let shortest = sequences.iter().map(Node::len).min().unwrap_or(0);
    (0..shortest)
        .map(|position| {
            sequences
                .iter()
                .filter_map(|sequence| sequence.get_index(position))
                .map(|(_, value)| value.clone())
                .collect::<Node>()
        })
        .map(Value::Node)
        .collect()
}

/// Packs values into a sequential node.
pub fn splat<I, V>(values: I) -> Node
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Node::from_values(values)
}

/// Turns leaf values into keys, each mapped to `default`.
///
/// Keys come from the values' plain string form. Nested nodes cannot be keys
/// and are skipped.
pub fn flip_sequential(node: &Node, default: impl Into<Value>) -> Node {
    let default = default.into();
    let mut flipped = Node::new();
    for value in node.values() {
        if value.is_node() {
            trace!("Skipping nested node while flipping");
            continue;
        }
        flipped.insert(value.to_plain_string(), default.clone());
    }
    flipped
}

/// Returns true if every needle is loosely equal to some value of `haystack`
pub fn has_all(haystack: &Node, needles: &[Value]) -> bool {
    needles.iter().all(|needle| contains_loosely(haystack, needle))
}

/// Returns true if at least one needle is loosely equal to some value of `haystack`
pub fn has_any(haystack: &Node, needles: &[Value]) -> bool {
    needles.iter().any(|needle| contains_loosely(haystack, needle))
}

fn contains_loosely(haystack: &Node, needle: &Value) -> bool {
    haystack.values().any(|value| value.loosely_equals(needle))
}

/// Returns true if `predicate` holds for some value; stops at the first hit.
pub fn any<F>(node: &Node, predicate: F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    node.values().any(predicate)
}

/// Returns true if `predicate` holds for every value; stops at the first miss.
pub fn all<F>(node: &Node, predicate: F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    node.values().all(predicate)
}

/// Returns true if any of `values` is empty.
///
/// Empty here is the falsy reading of [`Value::is_truthy`], so `0`, `0.0` and
/// `"0"` count as empty alongside `null`, `false`, `""` and empty nodes.
pub fn any_blank(values: &[Value]) -> bool {
    values.iter().any(|value| !value.is_truthy())
}

/// Returns true if all of `values` are empty in the sense of [`any_blank`]
/// (vacuously true when there are none)
pub fn all_blank(values: &[Value]) -> bool {
    values.iter().all(|value| !value.is_truthy())
}
