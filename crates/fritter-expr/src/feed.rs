//! Feed of posts by followed accounts.

use fritter_store_rs::{PostIdSet, PostStore, StoreResult, TagStore};
use tracing::debug;

use crate::expression::Expression;

/// Resolves the posts written by any of `followees`.
///
/// Following nobody yields an empty feed without touching the store.
pub async fn resolve_following<S, I>(followees: I, store: &S) -> StoreResult<PostIdSet>
where
    S: PostStore + TagStore,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let feed = Expression::any_author(followees);
    resolve_feed(feed.as_ref(), store).await
}

/// Resolves a feed expression built by [`Expression::any_author`].
///
/// `None` stands for an empty followee list and resolves to no posts.
pub async fn resolve_feed<S>(feed: Option<&Expression>, store: &S) -> StoreResult<PostIdSet>
where
    S: PostStore + TagStore,
{
    match feed {
        Some(expression) => expression.resolve(store).await,
        None => {
            debug!("no followees, feed is empty");
            Ok(PostIdSet::new())
        }
    }
}
