//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the fr CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// fr - Query Fritter posts with filter expressions
#[derive(Parser, Debug)]
#[command(name = "fr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Snapshot file to query (default: from config, then the data directory)
    #[arg(long, global = true, env = "FR_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a filter expression without evaluating it
    #[command(alias = "c")]
    Check {
        /// Filter expression (e.g., "&(@alice,#dog)")
        expression: String,
    },

    /// Evaluate a filter expression and list matching posts
    #[command(alias = "e")]
    Eval {
        /// Filter expression (e.g., "|(@alice,!(#dog))")
        expression: String,

        /// Limit results (default: from config, else 50)
        #[arg(long)]
        limit: Option<u32>,

        /// Show all matching posts (no limit)
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// List posts by the given authors
    #[command(alias = "f")]
    Following {
        /// Usernames being followed
        usernames: Vec<String>,

        /// Limit results (default: from config, else 50)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a default config file if none exists
    Init,
}

/// Supported shells for completions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
