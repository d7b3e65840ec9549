//! Eval command implementation.
//!
//! Resolves a filter expression against the snapshot and lists the matching
//! posts.

use fritter_expr_rs::{parse, Expression};
use fritter_store_rs::MemoryStore;
use owo_colors::OwoColorize;
use tracing::debug;

use super::hints::{unknown_names, UnknownName};
use super::{CommandContext, Result};
use crate::output::{collect_rows, format_posts_json, format_posts_table};

/// Options for the eval command.
#[derive(Debug)]
pub struct EvalOptions<'a> {
    pub expression: &'a str,
    pub limit: Option<u32>,
    pub all: bool,
}

/// Executes the eval command.
///
/// The expression is parsed in full before the store is queried. Names
/// missing from the snapshot only produce warnings.
///
/// # Errors
///
/// Returns a syntax error for malformed input, or the store error that
/// stopped evaluation.
pub async fn execute(ctx: &CommandContext, store: &MemoryStore, opts: &EvalOptions<'_>) -> Result<()> {
    let expression = parse(opts.expression)?;
    if ctx.verbose && !ctx.json_output {
        eprintln!("expression: {}", expression.render());
    }
    warn_unknown_names(ctx, &expression, store);

    let ids = expression.resolve(store).await?;
    debug!(matches = ids.len(), "filter resolved");

    let page = collect_rows(&ids, store, ctx.effective_limit(opts.limit, opts.all));

    if ctx.json_output {
        let output = format_posts_json(
            &page,
            Some(expression.to_filter_string()),
            Some(expression.render()),
        )?;
        println!("{output}");
    } else if !ctx.quiet {
        print!("{}", format_posts_table(&page, ctx.use_colors));
    }

    Ok(())
}

/// Prints a warning on stderr for every name the snapshot doesn't know.
pub(crate) fn warn_unknown_names(ctx: &CommandContext, expression: &Expression, store: &MemoryStore) {
    if ctx.quiet {
        return;
    }
    for unknown in unknown_names(expression, store) {
        eprintln!("{}", format_warning(&unknown, ctx.use_colors));
    }
}

fn format_warning(unknown: &UnknownName, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "warning:".yellow().bold(), unknown.message())
    } else {
        format!("warning: {}", unknown.message())
    }
}
