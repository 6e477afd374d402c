//! Structural matching of a node against a specification with wildcard leaves.
//!
//! Leaf patterns use shell-style globs: `*` matches any run of characters,
//! `?` a single character and `[...]` a character class (`[!...]` negates it).
//! Every other character matches itself.

use regex::Regex;
use tracing::debug;

use crate::{
    Result,
    tree::{KeyPath, Node, TreeError, Value},
};

/// Checks that `node` has every key of `spec` with a matching value.
///
/// For each key in `spec`:
/// - absent from `node`: [`TreeError::KeyMissing`];
/// - both values are nodes: matched recursively;
/// - exactly one side is a node: [`TreeError::TypeMismatch`];
/// - both leaves: the node's value, in plain string form, must match the spec
///   value as a glob, else [`TreeError::ValueMismatch`].
///
/// With `raise` set these failures are returned as errors. Without it they
/// yield `Ok(false)`. A glob that cannot be compiled is always an error.
///
/// ```
/// # use arbor::{Node, ops::matches};
/// let mut node = Node::new();
/// node.insert("hello", "there");
///
/// let mut spec = Node::new();
/// spec.insert("hello", "th*");
/// assert!(matches(&node, &spec, true).unwrap());
///
/// spec.insert("hello", "xy*");
/// assert!(matches(&node, &spec, true).unwrap_err().is_value_mismatch());
/// assert!(!matches(&node, &spec, false).unwrap());
/// ```
pub fn matches(node: &Node, spec: &Node, raise: bool) -> Result<bool> {
    match match_node(node, spec, &KeyPath::new()) {
        Ok(()) => Ok(true),
        Err(err) if !raise && err.is_mismatch() => {
            debug!(error = %err, "Node does not match");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn match_node(node: &Node, spec: &Node, at: &KeyPath) -> std::result::Result<(), TreeError> {
    for (key, expected) in spec.iter() {
        let path = at.clone().push(key);
        let actual = node.get(key).ok_or_else(|| TreeError::KeyMissing {
            path: path.to_string(),
        })?;

        match (actual, expected) {
            (Value::Node(actual), Value::Node(expected)) => match_node(actual, expected, &path)?,
            (Value::Node(_), _) | (_, Value::Node(_)) => {
                return Err(TreeError::TypeMismatch {
                    path: path.to_string(),
                    expected: expected.type_name().to_string(),
                    actual: actual.type_name().to_string(),
                });
            }
            (actual, expected) => {
                let pattern = expected.to_plain_string();
                let text = actual.to_plain_string();
                if !glob_match(&pattern, &text)? {
                    return Err(TreeError::ValueMismatch {
                        path: path.to_string(),
                        pattern,
                        actual: text,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Matches `text` against a shell-style glob. The whole text must match.
///
/// ```
/// # use arbor::ops::glob_match;
/// assert!(glob_match("th*", "there").unwrap());
/// assert!(glob_match("b?t", "bat").unwrap());
/// assert!(glob_match("[!a]*", "there").unwrap());
/// assert!(!glob_match("th", "there").unwrap());
/// ```
pub fn glob_match(pattern: &str, text: &str) -> std::result::Result<bool, TreeError> {
    let regex = Regex::new(&glob_to_regex(pattern)).map_err(|err| TreeError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })?;
    Ok(regex.is_match(text))
}

fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i + 1..end]);
                    i = end;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
        i += 1;
    }

    out.push('$');
    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// `[` or `[!` is a literal member.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if chars.get(i) == Some(&'!') {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    chars[i.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| i + offset)
}

fn push_class(out: &mut String, members: &[char]) {
    out.push('[');
    let mut members = members;
    if let ['!' | '^', rest @ ..] = members {
        out.push('^');
        members = rest;
    }
    for &c in members {
        match c {
            '\\' | '[' | ']' | '^' | '&' | '~' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(']');
}
