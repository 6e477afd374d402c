//! Match command - checks a document against a wildcard specification.

use arbor::{Node, ops::matches};
use tracing::info;

use crate::cli::MatchArgs;
use crate::input::load_node;
use crate::output::OutputFormat;

/// Result of matching a document, with the reason for a mismatch
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub matched: bool,
    pub reason: Option<String>,
}

/// Matches `node` against `spec`.
///
/// `matches` runs in raising mode so that a key, type or value mismatch can be
/// reported with its reason; those kinds become a non-match here. Any other
/// failure, such as an invalid glob, is returned as an error.
pub fn evaluate(node: &Node, spec: &Node) -> arbor::Result<Outcome> {
    match matches(node, spec, true) {
        Ok(matched) => Ok(Outcome {
            matched,
            reason: None,
        }),
        Err(err) if err.as_tree_error().is_some_and(|e| e.is_mismatch()) => Ok(Outcome {
            matched: false,
            reason: Some(err.to_string()),
        }),
        Err(err) => Err(err),
    }
}

/// Run the match command, returning whether the document matched
pub fn run(args: &MatchArgs, format: OutputFormat) -> Result<bool, Box<dyn std::error::Error>> {
    let node = load_node(&args.input.file)?;
    let spec = load_node(&args.spec)?;

    let Outcome { matched, reason } = evaluate(&node, &spec)?;
    info!(matched, "Match finished");

    match format {
        OutputFormat::Human => match &reason {
            None => println!("match"),
            Some(reason) => println!("no match: {reason}"),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "matched": matched,
                "reason": reason,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(matched)
}
