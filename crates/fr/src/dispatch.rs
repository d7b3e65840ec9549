//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need a loaded snapshot.

use std::path::Path;

use fritter_store_rs::MemoryStore;
use tracing::debug;

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::config::{resolve_snapshot_path, Config};
use crate::commands::eval::EvalOptions;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without a snapshot.
pub trait LocalCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that query the snapshot.
#[allow(async_fn_in_trait)]
pub trait SnapshotCommand {
    /// Execute the command against the loaded store.
    async fn execute(&self, ctx: &CommandContext, store: &MemoryStore) -> Result<()>;
}

/// Commands that don't need a snapshot.
pub enum LocalDispatch<'a> {
    Check(&'a str),
    Config(&'a Option<ConfigCommands>),
    Completions(Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Try to create a local dispatch from the CLI command.
    /// Returns None if the command needs a snapshot.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Check { expression }) => Some(Self::Check(expression)),
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(*shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Check(expression) => commands::check::execute(ctx, expression),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(*shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("fr - Fritter filter CLI");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Init) => commands::config::execute_init(ctx),
    }
}

/// Commands that query the snapshot.
pub enum SnapshotDispatch<'a> {
    Eval(EvalOptions<'a>),
    Following {
        usernames: &'a [String],
        limit: Option<u32>,
    },
}

impl<'a> SnapshotDispatch<'a> {
    /// Create a snapshot dispatch from the CLI command.
    /// Returns None for commands handled by [`LocalDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Eval {
                expression,
                limit,
                all,
            }) => Some(Self::Eval(EvalOptions {
                expression,
                limit: *limit,
                all: *all,
            })),
            Some(Commands::Following { usernames, limit }) => Some(Self::Following {
                usernames,
                limit: *limit,
            }),
            _ => None,
        }
    }
}

impl SnapshotCommand for SnapshotDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, store: &MemoryStore) -> Result<()> {
        match self {
            Self::Eval(opts) => commands::eval::execute(ctx, store, opts).await,
            Self::Following { usernames, limit } => {
                commands::following::execute(ctx, store, usernames, *limit).await
            }
        }
    }
}

/// Loads the snapshot a store-backed command should query.
///
/// # Errors
///
/// Returns a config error when no snapshot path can be determined, or the
/// store error from reading and decoding the file.
pub async fn load_store(flag: Option<&Path>, config: &Config) -> Result<MemoryStore> {
    let path = resolve_snapshot_path(flag, config)?;
    debug!(path = %path.display(), "using snapshot");
    Ok(MemoryStore::load(&path).await?)
}
