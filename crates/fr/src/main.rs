use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod logging;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{LocalCommand, LocalDispatch, SnapshotCommand, SnapshotDispatch};
use fritter_store_rs::StoreError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", error_json(&e));
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::new(cli, &config);

    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    if let Some(dispatch) = SnapshotDispatch::from_cli(cli) {
        let store = dispatch::load_store(cli.snapshot.as_deref(), &config).await?;
        return dispatch.execute(&ctx, &store).await;
    }

    Ok(())
}

/// Renders an error as the JSON document written to stderr.
fn error_json(e: &CommandError) -> String {
    let mut error = serde_json::json!({
        "code": error_code(e),
        "message": e.to_string(),
    });
    if let CommandError::Syntax(syntax) = e {
        if let Some(index) = syntax.token_index() {
            error["token_index"] = index.into();
        }
    }
    serde_json::json!({ "error": error }).to_string()
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Syntax(_) => "SYNTAX_ERROR",
        CommandError::Store(StoreError::ReadError { .. }) => "SNAPSHOT_READ_ERROR",
        CommandError::Store(_) => "STORE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Syntax(_) => ExitCode::from(1),
        CommandError::Store(StoreError::ReadError { .. }) => ExitCode::from(3),
        CommandError::Store(_) => ExitCode::from(2),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
