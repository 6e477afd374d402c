//! Path commands - read and write values by delimited path.

use arbor::{
    Value,
    ops::{path_get, path_set},
};
use tracing::info;

use crate::cli::{GetArgs, SetArgs};
use crate::input::{load_node, parse_value};
use crate::output::{OutputFormat, print_value};

/// Run the `get` command
pub fn get(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let node = load_node(&args.input.file)?;
    let delimiter = &args.path_config.delimiter;

    let value = path_get(&node, &args.path, delimiter)?;
    print_value(value, format, delimiter)
}

/// Run the `set` command
pub fn set(args: &SetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let node = load_node(&args.input.file)?;
    let delimiter = &args.path_config.delimiter;

    let updated = path_set(&node, &args.path, parse_value(&args.value), delimiter)?;
    info!(path = %args.path, "Value written");

    print_value(&Value::Node(updated), format, delimiter)
}
