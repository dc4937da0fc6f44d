//! CLI argument definitions using clap
//!
//! Commands:
//! - employee-management init --config <path>
//! - employee-management serve --config <path> [--port <port>] [--memory]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Employee Management - HTTP backend for employee records
#[derive(Parser, Debug)]
#[command(name = "employee-management")]
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
        #[arg(long, default_value = "./employees.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply if it does not exist)
        #[arg(long, default_value = "./employees.json")]
        config: PathBuf,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,

        /// Keep employees in memory instead of the configured database
        #[arg(long)]
        memory: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
