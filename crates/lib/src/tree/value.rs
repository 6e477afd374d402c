//! Value types for container trees.
//!
//! This module provides the [`Value`] enum: every position in a tree is either
//! a leaf (an atomic scalar) or a branch holding a nested [`Node`].

use std::fmt;

use super::{Node, TreeError};

/// A value stored in a container tree.
///
/// ## Leaf Values
/// - [`Value::Null`], [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`]
///
/// ## Branch Values
/// - [`Value::Node`] - an ordered key/value mapping, sequential or associative
///
/// `Value` implements `PartialEq` with primitive types for ergonomic comparisons:
///
/// ```
/// # use arbor::tree::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
///
/// Strict equality (`==` between two `Value`s) compares variants exactly. The
/// toolkit's own comparisons use [`Value::loosely_equals`], which treats
/// `1`, `1.0` and `"1"` as the same value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Nested container
    Node(Node),
}

impl Value {
    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_node()
    }

    /// Returns true if this value is a nested node
    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Node(_) => "node",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a Node (immutable reference)
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable Node reference
    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Consumes the value, returning the node if it is one
    pub fn into_node(self) -> Option<Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the numeric reading of this value.
    ///
    /// Integers and floats are numeric; text is numeric when it parses as a
    /// decimal number (surrounding whitespace allowed, no `inf`/`nan`).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Text(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Returns true for integers, floats and numeric text
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns true if this value counts as blank.
    ///
    /// `Null`, `false`, the empty string and empty nodes are blank. Numeric
    /// leaves are never blank, so `0`, `0.0` and `"0"` all count as present.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(_) | Value::Float(_) => false,
            Value::Text(s) => s.is_empty(),
            Value::Node(node) => node.is_empty(),
        }
    }

    /// Boolean reading of the value used by loose comparisons.
    ///
    /// Unlike [`Value::is_blank`], zero and `"0"` read as false here.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Text(s) => !(s.is_empty() || s == "0"),
            Value::Node(node) => !node.is_empty(),
        }
    }

    /// Compares two values by value rather than by exact variant.
    ///
    /// - numbers compare numerically across ints, floats and numeric text
    /// - a bool compares against the truthiness of the other side
    /// - null equals the empty string and any other falsy non-text value
    /// - nodes are equal when they hold the same keys with loosely equal values
    ///
    /// ```
    /// # use arbor::tree::Value;
    /// assert!(Value::from(1).loosely_equals(&Value::from("1")));
    /// assert!(Value::from(1).loosely_equals(&Value::from(1.0)));
    /// assert!(Value::Null.loosely_equals(&Value::from("")));
    /// assert!(!Value::from("abc").loosely_equals(&Value::from("ABC")));
    /// ```
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Node(a), Value::Node(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.get(key).is_some_and(|o| value.loosely_equals(o)))
            }
            (Value::Null, Value::Null) => true,
            (Value::Bool(b), other) | (other, Value::Bool(b)) => *b == other.is_truthy(),
            (Value::Null, Value::Text(s)) | (Value::Text(s), Value::Null) => s.is_empty(),
            (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),
            (Value::Node(_), _) | (_, Value::Node(_)) => false,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Value::Text(s), number) | (number, Value::Text(s)) => match parse_numeric(s) {
                Some(x) => number.as_number() == Some(x),
                None => number.to_plain_string() == *s,
            },
            (a, b) => a.as_number() == b.as_number(),
        }
    }

    /// Renders a leaf as plain text.
    ///
    /// `Null` and `false` render as the empty string, `true` as `"1"`, numbers
    /// in their shortest decimal form. Nodes render as compact JSON.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => String::new(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Text(s) => s.clone(),
            Value::Node(node) => node.to_string(),
        }
    }
}

/// Parses a decimal number the way numeric text is recognized.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Node(node) => write!(f, "{node}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Node(value.into_iter().map(Into::<Value>::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<&Value> for String {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(type_mismatch("String", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = TreeError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(type_mismatch("&str", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(type_mismatch("i64", value)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            _ => Err(type_mismatch("f64", value)),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(type_mismatch("bool", value)),
        }
    }
}

impl TryFrom<&Value> for Node {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Node(node) => Ok(node.clone()),
            _ => Err(type_mismatch("Node", value)),
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = TreeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Node(node) => Ok(node),
            other => Err(type_mismatch("Node", &other)),
        }
    }
}

fn type_mismatch(expected: &str, actual: &Value) -> TreeError {
    TreeError::TypeMismatch {
        path: String::new(),
        expected: expected.to_string(),
        actual: actual.type_name().to_string(),
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == i64::from(*other))
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
