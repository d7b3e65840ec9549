//! Check command implementation.
//!
//! Parses a filter expression without touching any snapshot.

use fritter_expr_rs::{parse, Expression};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{CommandContext, Result};

/// JSON output structure for the check command.
#[derive(Serialize)]
struct CheckOutput<'a> {
    valid: bool,
    kind: &'a str,
    filter: String,
    expression: String,
}

/// Executes the check command.
///
/// # Errors
///
/// Returns [`super::CommandError::Syntax`] when the expression is malformed.
pub fn execute(ctx: &CommandContext, input: &str) -> Result<()> {
    let expression = parse(input)?;

    if ctx.json_output {
        println!("{}", format_check_json(&expression)?);
    } else if !ctx.quiet {
        print!("{}", format_check_text(&expression, ctx.use_colors));
    }

    Ok(())
}

fn format_check_json(expression: &Expression) -> std::result::Result<String, serde_json::Error> {
    let output = CheckOutput {
        valid: true,
        kind: expression.kind(),
        filter: expression.to_filter_string(),
        expression: expression.render(),
    };
    serde_json::to_string_pretty(&output)
}

fn format_check_text(expression: &Expression, use_colors: bool) -> String {
    let render = expression.render();
    let filter = expression.to_filter_string();
    if use_colors {
        format!("{}\n{} {}\n", render.green(), "filter:".dimmed(), filter)
    } else {
        format!("{render}\nfilter: {filter}\n")
    }
}
