//! Delimited paths addressing nested locations in a tree.
//!
//! A [`KeyPath`] is a sequence of [`Key`] segments. Paths are usually parsed
//! from a delimiter-joined string such as `"users:0:name"`; empty segments are
//! discarded during parsing, so `"users::0:"` resolves the same way.
//!
//! # Usage
//!
//! ```rust
//! use arbor::tree::{Key, KeyPath};
//! use arbor::path;
//!
//! // Parse with the default `:` delimiter
//! let parsed: KeyPath = "users:0:name".parse().unwrap();
//!
//! // Parse with a custom multi-character delimiter
//! let custom = KeyPath::parse("users::0::name", "::");
//! assert_eq!(parsed, custom);
//!
//! // Build incrementally
//! let built = KeyPath::new().push("users").push(0).push("name");
//! assert_eq!(parsed, built);
//!
//! // Or with the macro
//! assert_eq!(parsed, path!("users", 0, "name"));
//! ```

use std::{fmt, str::FromStr};

use super::Key;
use crate::constants::DEFAULT_DELIMITER;

/// An owned path of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Key>,
}

impl KeyPath {
    /// Creates a new empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` by splitting on `delimiter` and discarding empty segments.
    ///
    /// Each segment is normalized into a [`Key`], so numeric segments address
    /// integer keys. An empty delimiter treats the whole input as one segment.
    ///
    /// ```rust
    /// # use arbor::tree::{Key, KeyPath};
    /// let path = KeyPath::parse("one!__!0", "!__!");
    /// assert_eq!(path.segments(), &[Key::from("one"), Key::Index(0)]);
    ///
    /// assert!(KeyPath::parse(":::", ":").is_empty());
    /// ```
    pub fn parse(path: &str, delimiter: &str) -> Self {
        if delimiter.is_empty() {
            return std::iter::once(path).filter(|s| !s.is_empty()).collect();
        }
        path.split(delimiter)
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Adds a key to the end of this path
    pub fn push(mut self, key: impl Into<Key>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Joins this path with another path
    pub fn join(mut self, other: &KeyPath) -> Self {
        self.segments.extend(other.segments.iter().cloned());
        self
    }

    /// Returns the path segments
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Returns an iterator over the path segments
    pub fn components(&self) -> impl Iterator<Item = &Key> {
        self.segments.iter()
    }

    /// Returns the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the parent path, or `None` if this path is empty
    pub fn parent(&self) -> Option<KeyPath> {
        let (_, parent) = self.segments.split_last()?;
        Some(KeyPath {
            segments: parent.to_vec(),
        })
    }

    /// Returns the last segment of the path, or `None` if empty
    pub fn last(&self) -> Option<&Key> {
        self.segments.last()
    }

    /// Renders the path joined by `delimiter`
    pub fn to_string_with(&self, delimiter: &str) -> String {
        self.segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(DEFAULT_DELIMITER))
    }
}

impl FromStr for KeyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyPath::parse(s, DEFAULT_DELIMITER))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath::parse(s, DEFAULT_DELIMITER)
    }
}

impl From<Vec<Key>> for KeyPath {
    fn from(segments: Vec<Key>) -> Self {
        KeyPath { segments }
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        KeyPath {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AsRef<KeyPath> for KeyPath {
    fn as_ref(&self) -> &KeyPath {
        self
    }
}

/// Constructs a [`KeyPath`].
///
/// - `path!()` - Empty path
/// - `path!("users:0:name")` - Single literal, parsed with the default delimiter
/// - `path!("users", 0, "name")` - One segment per argument
/// - `path!(base, "name")` - Mix runtime values and literals
///
/// ```rust
/// # use arbor::{path, tree::Key};
/// let parsed = path!("users:0");
/// let built = path!("users", 0);
/// assert_eq!(parsed, built);
/// assert_eq!(built.last(), Some(&Key::Index(0)));
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::tree::KeyPath::new()
    };

    ($single:literal) => {
        $crate::tree::KeyPath::from($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::tree::KeyPath::new().push($first);
        $(
            let path = path.push($rest);
        )*
        path
    }};
}
