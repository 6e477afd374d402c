//! Group command - groups a list of objects by some of their keys.

use arbor::{Value, constants::DEFAULT_DELIMITER, ops::group_by_keys};

use crate::cli::GroupArgs;
use crate::input::load_node;
use crate::output::{OutputFormat, print_value};

/// Run the group command
pub fn run(args: &GroupArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let rows = load_node(&args.input.file)?;
    let keys: Vec<&str> = args.by.iter().map(String::as_str).collect();

    let grouped = group_by_keys(&rows, &keys)?;
    print_value(&Value::Node(grouped), format, DEFAULT_DELIMITER)
}
