//! CLI module for stockroom
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Connect to the database and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliResult};
