//! Output formatting helpers for human-readable and JSON output.

use arbor::{Node, Value, ops::flatten_assoc};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Print a value in the selected format.
///
/// Humans get leaves as plain text and nodes as a `PATH VALUE` table of their
/// leaves. JSON output is pretty-printed.
pub fn print_value(
    value: &Value,
    format: OutputFormat,
    delimiter: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => match value {
            Value::Node(node) => {
                let rows = tree_rows(node, delimiter);
                if rows.is_empty() {
                    println!("(empty)");
                } else {
                    print_table(&["PATH", "VALUE"], &rows);
                }
            }
            leaf => println!("{}", leaf.to_plain_string()),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// One `[path, value]` row per leaf of `node`.
///
/// Nodes without any leaves, such as `{"a": {}}`, yield no rows.
pub fn tree_rows(node: &Node, delimiter: &str) -> Vec<Vec<String>> {
    flatten_assoc(node, delimiter)
        .iter()
        .map(|(path, leaf)| vec![path.to_string(), display_leaf(leaf)])
        .collect()
}

/// Renders a leaf for tables, keeping null and booleans visible
pub fn display_leaf(leaf: &Value) -> String {
    match leaf {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_plain_string(),
    }
}
