//! CLI argument definitions using clap
//!
//! Commands:
//! - submitdb init --config <path>
//! - submitdb start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// submitdb - A small, self-hostable submission record service
#[derive(Parser, Debug)]
#[command(name = "submitdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./submitdb.json")]
        config: PathBuf,
    },

    /// Start the submitdb server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./submitdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
