//! Inspect command - shows classification, depth and counts of a document.

use arbor::ops::{deep_count, depth, find_highest_count, flat_count, has_empty_values};

use crate::cli::InspectArgs;
use crate::input::load_node;
use crate::output::OutputFormat;

/// Run the inspect command
pub fn run(args: &InspectArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let node = load_node(&args.input.file)?;

    let kind = if node.is_sequential() {
        "sequential"
    } else {
        "associative"
    };
    let entries = node.len();
    let depth = depth(&node);
    let leaves = deep_count(&node);
    let flat = flat_count(&node);
    let widest = find_highest_count(&node, true);
    let has_empty = has_empty_values(&node);

    match format {
        OutputFormat::Human => {
            println!("Kind:          {kind}");
            println!("Entries:       {entries}");
            println!("Depth:         {depth}");
            println!("Leaves:        {leaves}");
            println!("Flat entries:  {flat}");
            println!("Widest node:   {widest}");
            println!("Empty values:  {}", if has_empty { "yes" } else { "no" });
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "kind": kind,
                "entries": entries,
                "depth": depth,
                "deep_count": leaves,
                "flat_count": flat,
                "highest_count": widest,
                "has_empty_values": has_empty,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
