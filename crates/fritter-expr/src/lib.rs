//! Filter expressions for Fritter posts.
//!
//! This crate compiles filter text such as `&(@alice,#dog)` into an
//! [`Expression`] tree and resolves it against a post/tag store to the set
//! of matching post ids.
//!
//! - [`expression`] - tokenizer, parser, AST and evaluator
//! - [`saved`] - named filters owned by a user
//! - [`feed`] - expressions built from a user's followees

pub mod error;
pub mod expression;
pub mod feed;
pub mod saved;

pub use error::{FilterError, FilterResult};
pub use expression::{parse, Expression, SyntaxError};
pub use saved::SavedFilter;

use fritter_store_rs::{PostIdSet, PostStore, TagStore};

/// Parses `input` and resolves it against `store`.
///
/// The whole expression is parsed before the store is touched, so malformed
/// input never causes a lookup.
///
/// # Errors
///
/// Returns `FilterError::Syntax` for malformed input and `FilterError::Store`
/// if a lookup fails.
pub async fn resolve_filter<S>(input: &str, store: &S) -> FilterResult<PostIdSet>
where
    S: PostStore + TagStore,
{
    let expression = parse(input)?;
    Ok(expression.resolve(store).await?)
}
