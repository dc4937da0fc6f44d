//! CLI module for the employee service
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Open storage and serve the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, open_repository, run, run_command, serve};
pub use config::{Config, StorageBackend, StorageConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
