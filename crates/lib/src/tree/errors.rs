//! Error types for tree operations.
//!
//! This module defines the structured errors raised by the container toolkit.
//! Every failure is a distinguishable variant so callers can branch on the kind
//! of problem (bad arguments, missing keys, shape or value mismatches) instead
//! of parsing messages.

use thiserror::Error;

/// Structured error types for tree operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TreeError {
    /// Wrong arity or malformed arguments
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A path segment did not resolve while walking a tree
    #[error("Key '{key}' not found while resolving path '{path}'")]
    KeyNotFound { path: String, key: String },

    /// A key required by a match specification is absent from the node
    #[error("Key missing at '{path}'")]
    KeyMissing { path: String },

    /// One side is a node while the other side is a leaf
    #[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A leaf value does not satisfy a wildcard pattern
    #[error("Value mismatch at '{path}': '{actual}' does not match '{pattern}'")]
    ValueMismatch {
        path: String,
        pattern: String,
        actual: String,
    },

    /// A wildcard pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl TreeError {
    /// Check if this error was caused by bad arguments
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TreeError::InvalidArgument { .. })
    }

    /// Check if this error indicates a key could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TreeError::KeyNotFound { .. } | TreeError::KeyMissing { .. }
        )
    }

    /// Check if this error is a structural shape mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Check if this error is a leaf value mismatch
    pub fn is_value_mismatch(&self) -> bool {
        matches!(self, TreeError::ValueMismatch { .. })
    }

    /// Check if this error is one of the three failures reported by `matches`.
    ///
    /// These are the kinds that `matches` swallows when asked to report
    /// mismatches as `false` instead of an error.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            TreeError::KeyMissing { .. }
                | TreeError::TypeMismatch { .. }
                | TreeError::ValueMismatch { .. }
        )
    }

    /// Get the path if this error is tied to a location in a tree
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::KeyNotFound { path, .. }
            | TreeError::KeyMissing { path }
            | TreeError::TypeMismatch { path, .. }
            | TreeError::ValueMismatch { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the key if this is a lookup error
    pub fn key(&self) -> Option<&str> {
        match self {
            TreeError::KeyNotFound { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
