//! Tree model integration tests
//!
//! Tests for the Value, Node, Key and KeyPath types and for JSON interop.

mod node_tests;
mod serialization_tests;
