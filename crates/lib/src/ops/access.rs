//! Path-based reads and writes, and grouping built on top of them.
//!
//! Paths are delimiter-joined strings parsed into a [`KeyPath`]; empty
//! segments are discarded, so `"a::b"` and `"a:b"` address the same location.

use tracing::{debug, trace};

use crate::{
    Result,
    tree::{Key, KeyPath, Node, TreeError, Value},
};

/// Resolves `path` inside `node`.
///
/// The walk fails fast: a segment that does not exist, or a segment that would
/// have to descend into a leaf, yields [`TreeError::KeyNotFound`] naming the
/// offending segment. A path with no segments is an
/// [`InvalidArgument`](TreeError::InvalidArgument).
///
/// ```
/// # use arbor::{Node, ops::path_get};
/// let mut node = Node::new();
/// node.insert("one", Node::from_values(["some", "value"]));
///
/// assert_eq!(path_get(&node, "one:0", ":").unwrap(), "some");
/// assert!(path_get(&node, "one:2", ":").unwrap_err().is_not_found());
/// ```
pub fn path_get<'a>(node: &'a Node, path: &str, delimiter: &str) -> Result<&'a Value> {
    let parsed = KeyPath::parse(path, delimiter);
    resolve(node, &parsed).map_err(|err| {
        trace!(path, error = %err, "Path lookup failed");
        err.into()
    })
}

fn resolve<'a>(node: &'a Node, path: &KeyPath) -> std::result::Result<&'a Value, TreeError> {
    let (first, rest) = path
        .segments()
        .split_first()
        .ok_or_else(empty_path)?;

    let mut current = lookup(node, first, path)?;
    for segment in rest {
        let next = current.as_node().ok_or_else(|| not_found(path, segment))?;
        current = lookup(next, segment, path)?;
    }
    Ok(current)
}

fn lookup<'a>(
    node: &'a Node,
    key: &Key,
    path: &KeyPath,
) -> std::result::Result<&'a Value, TreeError> {
    node.get(key).ok_or_else(|| not_found(path, key))
}

fn not_found(path: &KeyPath, key: &Key) -> TreeError {
    TreeError::KeyNotFound {
        path: path.to_string(),
        key: key.to_string(),
    }
}

fn empty_path() -> TreeError {
    TreeError::InvalidArgument {
        reason: "path has no segments".to_string(),
    }
}

/// Returns a copy of `node` with `value` written at `path`.
///
/// Missing intermediate nodes are created. A leaf sitting where the path needs
/// to descend is replaced by a new node in the same position. The input is
/// never modified.
///
/// ```
/// # use arbor::{Node, Value, ops::{path_get, path_set}};
/// let node = path_set(&Node::new(), "a:b:c", 1, ":").unwrap();
/// assert_eq!(path_get(&node, "a:b:c", ":").unwrap(), &Value::from(1));
/// ```
pub fn path_set(
    node: &Node,
    path: &str,
    value: impl Into<Value>,
    delimiter: &str,
) -> Result<Node> {
    let parsed = KeyPath::parse(path, delimiter);
    if parsed.is_empty() {
        return Err(empty_path().into());
    }

    let mut result = node.clone();
    write(&mut result, parsed.segments(), value.into());
    Ok(result)
}

fn write(node: &mut Node, segments: &[Key], value: Value) {
    match segments {
        [] => {}
        [last] => {
            node.insert(last.clone(), value);
        }
        [first, rest @ ..] => {
            if !matches!(node.get(first), Some(Value::Node(_))) {
                node.insert(first.clone(), Node::new());
            }
            if let Some(Value::Node(child)) = node.get_mut(first) {
                write(child, rest, value);
            }
        }
    }
}

/// Groups a list of nodes into a tree keyed by the values at `keys`.
///
/// For every element the values under `keys` (in order) become the path of
/// its group; those entries are removed from the element, and the stripped
/// element is appended to a sequential list at that path. Elements that share
/// every grouping value collapse into the same list.
///
/// The grouping path is kept as a [`KeyPath`] of separate segments and never
/// joined into a string, so grouping values containing any delimiter cannot
/// collide with each other.
///
/// Grouping values become keys as follows: text and non-negative integers
/// directly, negative integers as their decimal name, `true`/`false` as `1`/`0`,
/// `null` as the empty name and floats truncated toward zero.
///
/// Errors:
/// - [`InvalidArgument`](TreeError::InvalidArgument) when `keys` is empty;
/// - [`KeyMissing`](TreeError::KeyMissing) when an element lacks a grouping key;
/// - [`TypeMismatch`](TreeError::TypeMismatch) when an element is not a node or
///   a grouping value is itself a node.
pub fn group_by_keys<K>(elements: &Node, keys: &[K]) -> Result<Node>
where
    K: Clone + Into<Key>,
{
    if keys.is_empty() {
        return Err(TreeError::InvalidArgument {
            reason: "grouping needs at least one key".to_string(),
        }
        .into());
    }
    let keys: Vec<Key> = keys.iter().cloned().map(Into::into).collect();

    let mut grouped = Node::new();
    for (position, element) in elements.iter() {
        let element = element.as_node().ok_or_else(|| TreeError::TypeMismatch {
            path: position.to_string(),
            expected: "node".to_string(),
            actual: element.type_name().to_string(),
        })?;

        let mut stripped = element.clone();
        let mut group = KeyPath::new();
        for key in &keys {
            let location = format!("{position}:{key}");
            let value = stripped
                .remove(key)
                .ok_or_else(|| TreeError::KeyMissing {
                    path: location.clone(),
                })?;
            group = group.push(group_key(&value, location)?);
        }

        append_at(&mut grouped, group.segments(), stripped);
    }

    debug!(
        elements = elements.len(),
        groups = grouped.len(),
        "Grouped elements by keys"
    );
    Ok(grouped)
}

fn group_key(value: &Value, location: String) -> std::result::Result<Key, TreeError> {
    let key = match value {
        Value::Null => Key::Name(String::new()),
        Value::Bool(b) => Key::Index(u64::from(*b)),
        Value::Int(n) => Key::from(*n),
        Value::Float(f) => Key::from(f.trunc() as i64),
        Value::Text(s) => Key::from(s.as_str()),
        Value::Node(_) => {
            return Err(TreeError::TypeMismatch {
                path: location,
                expected: "leaf".to_string(),
                actual: "node".to_string(),
            });
        }
    };
    Ok(key)
}

fn append_at(node: &mut Node, segments: &[Key], element: Node) {
    let Some((first, rest)) = segments.split_first() else {
        node.push(element);
        return;
    };
    if !matches!(node.get(first), Some(Value::Node(_))) {
        node.insert(first.clone(), Node::new());
    }
    if let Some(Value::Node(child)) = node.get_mut(first) {
        append_at(child, rest, element);
    }
}
