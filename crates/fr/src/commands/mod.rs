//! Command implementations for the fr CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod eval;
pub mod following;
pub mod hints;

use std::env;

use fritter_store_rs::StoreError;

use crate::cli::Cli;

/// Default number of posts listed when no limit is configured.
pub const DEFAULT_LIMIT: u32 = 50;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter syntax error.
    #[error("filter error: {0}")]
    Syntax(#[from] fritter_expr_rs::SyntaxError),

    /// Store error (snapshot loading or lookup).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Default result limit.
    pub limit: u32,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Colors are disabled by `--no-color`, by `color = false` in the config,
    /// or by a non-empty `NO_COLOR` environment variable.
    pub fn new(cli: &Cli, config: &config::Config) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
            limit: config.output.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Resolves a command's limit flag against the configured default.
    ///
    /// Returns `None` when every result should be shown.
    pub fn effective_limit(&self, limit: Option<u32>, all: bool) -> Option<usize> {
        if all {
            None
        } else {
            Some(limit.unwrap_or(self.limit) as usize)
        }
    }
}
