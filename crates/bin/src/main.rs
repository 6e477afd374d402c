use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so command output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arbor=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Inspect(args) => commands::inspect::run(&args, format)?,
        Commands::Flatten(args) => commands::flatten::run(&args, format)?,
        Commands::Get(args) => commands::path::get(&args, format)?,
        Commands::Set(args) => commands::path::set(&args, format)?,
        Commands::Diff(args) => commands::compare::diff(&args, format)?,
        Commands::Intersect(args) => commands::compare::intersect(&args, format)?,
        Commands::Match(args) => {
            if !commands::matching::run(&args, format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Group(args) => commands::group::run(&args, format)?,
    }

    Ok(ExitCode::SUCCESS)
}
