//! CLI module for submitdb
//!
//! Provides the command-line interface:
//! - init: Write a default configuration file
//! - start: Load configuration and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, start, Config};
pub use errors::{CliError, CliResult};
