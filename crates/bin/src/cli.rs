//! CLI argument definitions for the Arbor binary.

use std::path::PathBuf;

use arbor::constants::{DEFAULT_DELIMITER, DEFAULT_GLUE};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Arbor nested container toolkit
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Arbor: inspect and transform nested JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "ARBOR_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show classification, depth and counts of a document
    Inspect(InspectArgs),
    /// Flatten a document into a single level
    Flatten(FlattenArgs),
    /// Read the value at a path
    Get(GetArgs),
    /// Write a value at a path and print the resulting document
    Set(SetArgs),
    /// Show the entries of a document that another document does not carry
    Diff(CompareArgs),
    /// Keep the entries of a document whose keys another document also has
    Intersect(CompareArgs),
    /// Check a document against a specification with wildcard leaves
    Match(MatchArgs),
    /// Group a list of objects by the values of some of their keys
    Group(GroupArgs),
}

/// The document a command operates on
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON file to read, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Path parsing options shared by the path commands
#[derive(clap::Args, Debug)]
pub struct PathConfig {
    /// Separator between path segments
    #[arg(short, long, default_value = DEFAULT_DELIMITER, env = "ARBOR_DELIMITER")]
    pub delimiter: String,
}

/// Arguments for the inspect command
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep keys, joining nested keys with the glue
    #[arg(long, conflicts_with = "values")]
    pub keys: bool,

    /// Print only the joined keys of every leaf
    #[arg(long)]
    pub values: bool,

    /// Glue between joined keys
    #[arg(short, long, default_value = DEFAULT_GLUE, env = "ARBOR_GLUE")]
    pub glue: String,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path to read, e.g. `users:0:name`
    pub path: String,

    #[command(flatten)]
    pub path_config: PathConfig,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path to write, e.g. `users:0:name`
    pub path: String,

    /// Value to write. Parsed as JSON, falling back to a plain string.
    pub value: String,

    #[command(flatten)]
    pub path_config: PathConfig,
}

/// Arguments for commands comparing two documents
#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON file to compare against
    #[arg(value_name = "OTHER")]
    pub other: PathBuf,
}

/// Arguments for the match command
#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON file holding the specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}

/// Arguments for the group command
#[derive(clap::Args, Debug)]
pub struct GroupArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keys to group by, in order
    #[arg(long, value_delimiter = ',', required = true)]
    pub by: Vec<String>,
}
