//! Output formatting utilities for the fr CLI.
//!
//! - [`posts`] - Post list formatting (table and JSON)
//! - [`helpers`] - Common formatting utilities (truncation, timestamps)

pub mod helpers;
mod posts;

pub use posts::{collect_rows, format_posts_json, format_posts_table};
