//! Flatten command

use arbor::{
    Value,
    ops::{flatten, flatten_assoc, flatten_values},
};

use crate::cli::FlattenArgs;
use crate::input::load_node;
use crate::output::{OutputFormat, display_leaf, print_table};

/// Run the flatten command
pub fn run(args: &FlattenArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let node = load_node(&args.input.file)?;

    if args.keys {
        let flat = flatten_assoc(&node, &args.glue);
        match format {
            OutputFormat::Human => {
                let rows: Vec<Vec<String>> = flat
                    .iter()
                    .map(|(key, leaf)| vec![key.to_string(), display_leaf(leaf)])
                    .collect();
                print_table(&["KEY", "VALUE"], &rows);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&flat)?),
        }
    } else if args.values {
        print_lines(&flatten_values(&node, &args.glue), format)?;
    } else {
        let leaves: Vec<Value> = flatten(&node);
        match format {
            OutputFormat::Human => leaves.iter().for_each(|leaf| println!("{}", display_leaf(leaf))),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&leaves)?),
        }
    }

    Ok(())
}

fn print_lines(lines: &[String], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => lines.iter().for_each(|line| println!("{line}")),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(lines)?),
    }
    Ok(())
}
