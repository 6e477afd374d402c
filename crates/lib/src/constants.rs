//! Constants used throughout the arbor library.
//!
//! Default separators shared by the flattening and path helpers and by the CLI.

/// Default glue joining parent and child keys when flattening.
pub const DEFAULT_GLUE: &str = "_";

/// Default delimiter separating the segments of a textual path.
pub const DEFAULT_DELIMITER: &str = ":";
