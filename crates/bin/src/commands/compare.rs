//! Compare commands - recursive diff and key intersection of two documents.

use arbor::{
    Node, Value,
    constants::DEFAULT_DELIMITER,
    ops::{diff_assoc_recursive, intersect_keys_recursive},
};

use crate::cli::CompareArgs;
use crate::input::load_node;
use crate::output::{OutputFormat, print_value};

/// Run the `diff` command
pub fn diff(args: &CompareArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    compare(args, format, diff_assoc_recursive)
}

/// Run the `intersect` command
pub fn intersect(
    args: &CompareArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    compare(args, format, intersect_keys_recursive)
}

fn compare(
    args: &CompareArgs,
    format: OutputFormat,
    op: fn(&Node, &Node) -> Node,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = load_node(&args.input.file)?;
    let second = load_node(&args.other)?;

    let result = op(&first, &second);
    print_value(&Value::Node(result), format, DEFAULT_DELIMITER)
}
