//!
//! Arbor: a toolkit for recursive nested containers.
//! This library provides stateless operations over dynamically-typed trees of values.
//!
//! ## Core Concepts
//!
//! * **Values (`tree::Value`)**: A tree position, either a leaf scalar (null, bool, number, text) or a nested node.
//! * **Nodes (`tree::Node`)**: Insertion-ordered key/value containers. A node whose keys are `0..len` in order is *sequential*; any other node is *associative*.
//! * **Paths (`tree::KeyPath`)**: Delimiter-split addresses of nested locations, e.g. `users:0:name`.
//! * **Operations (`ops`)**: Pure functions that read trees and return new trees or scalars:
//!     * **Metrics (`ops::metrics`)**: classification, emptiness, depth and counts.
//!     * **Flattening (`ops::flatten`)**: value-only and key-preserving flattening.
//!     * **Comparison (`ops::diff`)**: set difference, recursive diff and key intersection.
//!     * **Access (`ops::access`)**: path reads and writes, grouping by keys.
//!     * **Elements (`ops::elements`)**: move, replace, append, dedupe, partition, trim, zip.
//!     * **Matching (`ops::matching`)**: structural matching with wildcard leaves.
//! * **Codec (`codec`)**: compact text encoding of trees.
//!
//! No operation mutates its inputs; every result is a freshly built tree.

pub mod codec;
pub mod constants;
pub mod ops;
pub mod tree;

pub use tree::{Key, KeyPath, Node, TreeError, Value};

/// Result type used throughout the arbor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the arbor library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Decoding error: {reason}")]
    Decode { reason: String },

    /// Structured tree errors from the tree and ops modules
    #[error(transparent)]
    Tree(TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Decode { .. } => "codec",
            Error::Tree(_) => "tree",
        }
    }

    /// Returns the tree error if this is one
    pub fn as_tree_error(&self) -> Option<&TreeError> {
        match self {
            Error::Tree(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error indicates a key or path segment was not found.
    pub fn is_not_found(&self) -> bool {
        self.as_tree_error().is_some_and(TreeError::is_not_found)
    }

    /// Check if this error was caused by bad arguments.
    pub fn is_invalid_argument(&self) -> bool {
        self.as_tree_error()
            .is_some_and(TreeError::is_invalid_argument)
    }

    /// Check if this error is a structural shape mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        self.as_tree_error().is_some_and(TreeError::is_type_mismatch)
    }

    /// Check if this error is a wildcard value mismatch.
    pub fn is_value_mismatch(&self) -> bool {
        self.as_tree_error()
            .is_some_and(TreeError::is_value_mismatch)
    }

    /// Check if this error came from decoding or parsing input.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::Serialize(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
