//! The container tree model.
//!
//! A tree is a [`Value`]: either a leaf scalar or a [`Node`], an ordered
//! mapping from [`Key`] to further values. Nodes are classified on demand as
//! *sequential* (keys are exactly `0..len` in order) or *associative*.
//!
//! # Core Types
//!
//! - [`Value`] - Leaf or branch value
//! - [`Node`] - Insertion-ordered key/value container
//! - [`Key`] - Integer or string key
//! - [`KeyPath`] - Parsed, delimiter-split path of keys
//! - [`TreeError`] - Structured failures raised by tree operations

pub mod errors;
mod json;
pub mod key;
pub mod node;
pub mod path;
pub mod value;

pub use errors::TreeError;
pub use key::Key;
pub use node::Node;
pub use path::KeyPath;
pub use value::Value;
