//! Post list output formatting.

use fritter_store_rs::{MemoryStore, PostId, PostIdSet};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_created, single_line, truncate_id, truncate_str};

/// A matched post joined with what the snapshot knows about it.
///
/// Tags can reference posts the snapshot doesn't contain, so everything but
/// the id is optional.
pub struct PostRow<'a> {
    pub id: PostId,
    pub author: Option<&'a str>,
    pub content: Option<&'a str>,
    pub created_at: Option<&'a chrono::DateTime<chrono::Utc>>,
}

/// A page of matched posts plus the total match count.
pub struct PostPage<'a> {
    pub rows: Vec<PostRow<'a>>,
    pub total: usize,
}

impl PostPage<'_> {
    /// Whether some matches were left out by the limit.
    pub fn truncated(&self) -> bool {
        self.rows.len() < self.total
    }
}

/// Looks up the matched ids in the snapshot, keeping at most `limit` rows.
///
/// Rows are listed newest first. Posts without a timestamp come last, and
/// ties fall back to descending id, since ids start with their creation time.
pub fn collect_rows<'a>(
    ids: &PostIdSet,
    store: &'a MemoryStore,
    limit: Option<usize>,
) -> PostPage<'a> {
    let mut rows: Vec<PostRow<'a>> = ids
        .iter()
        .map(|id| {
            let post = store.post(id);
            PostRow {
                id: *id,
                author: post.and_then(|p| store.author_of(p)),
                content: post.map(|p| p.content.as_str()),
                created_at: post.and_then(|p| p.created_at.as_ref()),
            }
        })
        .collect();

    // Some sorts after None, so reversing puts timestamped posts first
    rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    PostPage {
        rows,
        total: ids.len(),
    }
}

/// JSON output structure for a post list.
#[derive(Serialize)]
pub struct PostsListOutput<'a> {
    /// Canonical filter text, when the list came from an expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Tree rendering of the expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    pub count: usize,
    pub truncated: bool,
    pub posts: Vec<PostOutput<'a>>,
}

/// JSON output structure for a single post.
#[derive(Serialize)]
pub struct PostOutput<'a> {
    pub id: String,
    pub author: Option<&'a str>,
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Formats posts as JSON.
pub fn format_posts_json(
    page: &PostPage<'_>,
    filter: Option<String>,
    expression: Option<String>,
) -> Result<String, serde_json::Error> {
    let posts = page
        .rows
        .iter()
        .map(|row| PostOutput {
            id: row.id.to_hex(),
            author: row.author,
            content: row.content,
            created_at: row.created_at.map(|ts| ts.to_rfc3339()),
        })
        .collect();

    let output = PostsListOutput {
        filter,
        expression,
        count: page.total,
        truncated: page.truncated(),
        posts,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats posts as a table.
pub fn format_posts_table(page: &PostPage<'_>, use_colors: bool) -> String {
    if page.rows.is_empty() {
        return "No posts found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<10} {:<16} {:<17} {}", "ID", "Author", "Created", "Content");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for row in &page.rows {
        let id = truncate_id(&row.id.to_hex());
        let author = row
            .author
            .map(|name| format!("@{name}"))
            .unwrap_or_else(|| "?".to_string());
        let author = truncate_str(&author, 16);
        let created = format_created(row.created_at);
        let content = match row.content {
            Some(content) => truncate_str(&single_line(content), 60),
            None if use_colors => "(not in snapshot)".dimmed().to_string(),
            None => "(not in snapshot)".to_string(),
        };

        let line = if use_colors {
            format!("{:<10} {:<16} {:<17} {}", id.cyan(), author.green(), created, content)
        } else {
            format!("{:<10} {:<16} {:<17} {}", id, author, created, content)
        };
        output.push_str(&line);
        output.push('\n');
    }

    if page.truncated() {
        let footer = format!(
            "Showing {} of {} posts (use --all to show everything)",
            page.rows.len(),
            page.total
        );
        if use_colors {
            output.push_str(&format!("{}\n", footer.dimmed()));
        } else {
            output.push_str(&footer);
            output.push('\n');
        }
    }

    output
}
