//! Keys addressing entries inside a [`Node`](super::Node).
//!
//! A key is either a non-negative integer index or a string name. String input
//! that spells a canonical non-negative integer is normalized to an index, so
//! `"3"` and `3` always address the same entry.

use std::{fmt, str::FromStr};

/// A key within a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer position-style key
    Index(u64),
    /// Arbitrary string key
    Name(String),
}

impl Key {
    /// Builds a key from a string, normalizing canonical integers to [`Key::Index`].
    ///
    /// ```
    /// # use arbor::tree::Key;
    /// assert_eq!(Key::normalize("7"), Key::Index(7));
    /// assert_eq!(Key::normalize("07"), Key::Name("07".to_string()));
    /// assert_eq!(Key::normalize("-1"), Key::Name("-1".to_string()));
    /// ```
    pub fn normalize(s: &str) -> Self {
        if is_canonical_index(s) {
            if let Ok(index) = s.parse::<u64>() {
                return Key::Index(index);
            }
        }
        Key::Name(s.to_string())
    }

    /// Returns the index if this is an integer key
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(s) => Some(s),
            Key::Index(_) => None,
        }
    }

    /// Returns true for integer keys
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

/// `0` or a digit string without a leading zero.
fn is_canonical_index(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Key::normalize(s))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::normalize(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        if is_canonical_index(&value) {
            Key::normalize(&value)
        } else {
            Key::Name(value)
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::normalize(value)
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Index(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as u64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(u64::from(value))
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        match u64::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match self {
            Key::Name(s) => s == other,
            Key::Index(i) => is_canonical_index(other) && other.parse::<u64>() == Ok(*i),
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<u64> for Key {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Key::Index(i) if i == other)
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Key::from(s))
    }
}
