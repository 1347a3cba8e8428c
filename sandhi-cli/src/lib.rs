//! Sandhi CLI library
//!
//! Command definitions and output formatting for the `sandhi` binary.

pub mod commands;
pub mod error;
pub mod grammar_source;
pub mod output;

pub use error::{CliError, CliResult};
