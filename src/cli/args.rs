//! CLI argument definitions using clap
//!
//! Commands:
//! - stockroom init --config <path>
//! - stockroom serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stockroom - A small product-inventory CRUD service over HTTP and MySQL
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
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
        #[arg(long, default_value = "./stockroom.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./stockroom.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
