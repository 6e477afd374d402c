//! Subcommand implementations.

pub mod compare;
pub mod flatten;
pub mod group;
pub mod inspect;
pub mod matching;
pub mod path;
