//! The ordered container type at the heart of a tree.
//!
//! A [`Node`] is an insertion-ordered mapping from [`Key`] to [`Value`]. Whether
//! it behaves like a list or like a map is not stored anywhere: a node is
//! *sequential* exactly when its keys are `0..len` in order, and *associative*
//! otherwise.
//!
//! ```
//! # use arbor::tree::{Node, Key};
//! let mut list = Node::new();
//! list.push("a");
//! list.push("b");
//! assert!(list.is_sequential());
//!
//! let mut map = Node::new();
//! map.insert("name", "Alice");
//! assert!(map.is_associative());
//! ```

use std::fmt;

use indexmap::IndexMap;

use super::{Key, KeyPath, Value};

/// An ordered key/value container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Child values in insertion order
    children: IndexMap<Key, Value>,
}

impl Node {
    /// Creates a new empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            children: IndexMap::with_capacity(capacity),
        }
    }

    /// Creates a sequential node from a list of values
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().map(Into::<Value>::into).collect()
    }

    /// Returns the number of direct entries
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no entries
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if the keys are exactly `0..len` in insertion order.
    ///
    /// An empty node is sequential.
    pub fn is_sequential(&self) -> bool {
        self.children
            .keys()
            .enumerate()
            .all(|(position, key)| key.as_index() == Some(position as u64))
    }

    /// Returns true if the node is not sequential
    pub fn is_associative(&self) -> bool {
        !self.is_sequential()
    }

    /// Returns true if the node has an entry for `key`
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.children.contains_key(&key.into())
    }

    /// Gets a direct child by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.children.get(&key.into())
    }

    /// Gets a mutable reference to a direct child by key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.children.get_mut(&key.into())
    }

    /// Gets a direct child by key with automatic type conversion using TryFrom
    ///
    /// ```
    /// # use arbor::tree::Node;
    /// let mut node = Node::new();
    /// node.insert("name", "Alice");
    /// node.insert("age", 30);
    ///
    /// assert_eq!(node.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(node.get_as::<i64>("age"), Some(30));
    /// assert_eq!(node.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl Into<Key>) -> Option<T>
    where
        T: TryFrom<&'a Value>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Walks `path` from this node, returning the value it resolves to.
    ///
    /// Returns `None` when a segment is missing or when the walk would have to
    /// descend into a leaf. An empty path resolves to nothing.
    pub fn get_path(&self, path: &KeyPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.children.get(first)?;
        for segment in rest {
            current = current.as_node()?.children.get(segment)?;
        }
        Some(current)
    }

    /// Inserts a value, returning the previous value for that key.
    ///
    /// Overwriting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Appends a value under the next free integer key and returns that key.
    ///
    /// The next free key is one past the highest integer key present, or `0`.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let key = Key::Index(self.next_index());
        self.children.insert(key.clone(), value.into());
        key
    }

    /// One past the highest integer key, or `0` when there is none
    pub fn next_index(&self) -> u64 {
        self.children
            .keys()
            .filter_map(Key::as_index)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Removes an entry, preserving the order of the remaining entries
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.children.shift_remove(&key.into())
    }

    /// Returns the position of `key` in insertion order
    pub fn position_of(&self, key: &Key) -> Option<usize> {
        self.children.get_index_of(key)
    }

    /// Returns the entry at insertion position `position`
    pub fn get_index(&self, position: usize) -> Option<(&Key, &Value)> {
        self.children.get_index(position)
    }

    /// Returns the last entry in insertion order
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.children.last()
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.children.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.children.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.children.keys()
    }

    /// Returns an iterator over all values.
    ///
    /// The iterator is double-ended and knows its length, so it can be
    /// walked from the back.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.children.values()
    }

    /// Returns a mutable iterator over all values
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.children.values_mut()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Rebuilds a node from entries the way a splice does.
    ///
    /// Integer keys are renumbered `0, 1, 2, ...` in order of appearance while
    /// string keys are kept as they are.
    pub(crate) fn from_spliced(entries: impl IntoIterator<Item = (Key, Value)>) -> Self {
        let mut node = Node::new();
        let mut next = 0u64;
        for (key, value) in entries {
            match key {
                Key::Index(_) => {
                    node.children.insert(Key::Index(next), value);
                    next += 1;
                }
                name @ Key::Name(_) => {
                    node.children.insert(name, value);
                }
            }
        }
        node
    }

    /// Drains this node into its entries in insertion order
    pub(crate) fn into_entries(self) -> Vec<(Key, Value)> {
        self.children.into_iter().collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

impl<K, V> FromIterator<(K, V)> for Node
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl FromIterator<Value> for Node {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            children: iter
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i as u64), v))
                .collect(),
        }
    }
}

impl IntoIterator for Node {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
