//! Loading JSON documents from files or stdin.

use std::{io::Read, path::Path};

use arbor::{Node, Value};
use tracing::debug;

/// Reads the document at `path` (`-` reads stdin) as a tree.
pub fn load_value(path: &Path) -> arbor::Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    debug!(path = %path.display(), bytes = text.len(), "Loaded document");
    Ok(serde_json::from_str(&text)?)
}

/// Reads the document at `path`, requiring an array or object at the top.
pub fn load_node(path: &Path) -> Result<Node, Box<dyn std::error::Error>> {
    match load_value(path)? {
        Value::Node(node) => Ok(node),
        leaf => Err(format!(
            "{}: expected a JSON array or object, found {}",
            path.display(),
            leaf.type_name()
        )
        .into()),
    }
}

/// Parses a command-line value as JSON, treating anything else as text
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}
