//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for snaplink using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// snaplink - shorten URLs and read their click statistics
#[derive(Parser, Debug)]
#[command(name = "snaplink")]
#[command(version)]
#[command(about = "Shorten URLs and look up their click statistics", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML); missing file means defaults + environment
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a long URL and remember its analytics token
    Shorten {
        /// The URL to shorten
        url: String,
    },

    /// Show click statistics for a short code
    ///
    /// A token stored by an earlier `shorten` is used automatically;
    /// otherwise pass the one you saved with --token.
    Stats {
        /// Short code, e.g. abc123
        code: String,

        /// Analytics token, used only if none is stored for the code
        #[arg(long, short = 't')]
        token: Option<String>,

        /// Show the creation time converted to UTC
        #[arg(long)]
        utc: bool,
    },

    /// Print the locally stored analytics token for a short code
    Token {
        code: String,
    },

    /// List all locally stored analytics tokens
    Tokens,

    /// Drop the locally stored analytics token for a short code
    Forget {
        code: String,
    },

    /// Check that the backend is reachable
    Health,

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a sample configuration file
    Generate {
        /// Output path (default: snaplink.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
