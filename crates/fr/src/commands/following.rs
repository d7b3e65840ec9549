//! Following command implementation.
//!
//! Lists the feed for a set of followed usernames.

use fritter_expr_rs::feed::resolve_feed;
use fritter_expr_rs::Expression;
use fritter_store_rs::MemoryStore;

use super::eval::warn_unknown_names;
use super::{CommandContext, Result};
use crate::output::{collect_rows, format_posts_json, format_posts_table};

/// Executes the following command.
///
/// Following nobody lists nothing.
pub async fn execute(
    ctx: &CommandContext,
    store: &MemoryStore,
    usernames: &[String],
    limit: Option<u32>,
) -> Result<()> {
    let expression = Expression::any_author(usernames.iter().cloned());
    if let Some(expression) = &expression {
        warn_unknown_names(ctx, expression, store);
    }

    let ids = resolve_feed(expression.as_ref(), store).await?;
    let page = collect_rows(&ids, store, ctx.effective_limit(limit, false));

    if ctx.json_output {
        let output = format_posts_json(
            &page,
            expression.as_ref().map(Expression::to_filter_string),
            expression.as_ref().map(Expression::render),
        )?;
        println!("{output}");
    } else if !ctx.quiet {
        print!("{}", format_posts_table(&page, ctx.use_colors));
    }

    Ok(())
}
