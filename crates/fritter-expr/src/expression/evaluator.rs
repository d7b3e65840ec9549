//! Expression evaluation against post and tag stores.
//!
//! Leaves query the store; inner nodes combine their children's results with
//! set algebra. Both children of `And`/`Or` are resolved concurrently, as are
//! the inner expression of `Not` and the post universe it is subtracted from.
//! The first store error aborts the whole evaluation; sibling lookups still
//! in flight are dropped.
//!
//! # Example
//!
//! ```
//! use fritter_expr_rs::expression::parse;
//! use fritter_store_rs::{MemoryStore, Post, PostId, User};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut store = MemoryStore::new();
//! store.add_user(User::new("u1", "alice"));
//! let id = PostId::generate();
//! store.add_post(Post::new(id, "u1", "woof"));
//!
//! let matches = parse("@alice").unwrap().resolve(&store).await.unwrap();
//! assert!(matches.contains(&id));
//! # }
//! ```

use futures_util::future::{BoxFuture, FutureExt};
use tracing::{debug, debug_span, Instrument};

use fritter_store_rs::{PostIdSet, PostKey, PostStore, StoreResult, TagStore};

use super::ast::Expression;

impl Expression {
    /// Resolves the expression to the set of matching post ids.
    ///
    /// Unknown authors and tags resolve to the empty set. Store errors are
    /// returned unchanged.
    ///
    /// Nothing is cached between calls: each `Not` fetches the universe
    /// afresh, so the result reflects the store state at call time.
    pub fn resolve<'a, S>(&'a self, store: &'a S) -> BoxFuture<'a, StoreResult<PostIdSet>>
    where
        S: PostStore + TagStore,
    {
        let span = debug_span!("resolve", node = self.kind());

        async move {
            let ids = match self {
                Expression::Author(username) => {
                    normalize(&store.find_all_by_author(username).await?)?
                }
                Expression::Tag(label) => match store.find_by_label(label).await? {
                    Some(tag) => normalize(&tag.post_ids)?,
                    None => {
                        debug!(label = %label, "tag not found");
                        PostIdSet::new()
                    }
                },
                Expression::Not(sub) => {
                    let (universe, excluded) =
                        tokio::try_join!(resolve_universe(store), sub.resolve(store))?;
                    universe.difference(&excluded).copied().collect()
                }
                Expression::And(left, right) => {
                    let (left, right) =
                        tokio::try_join!(left.resolve(store), right.resolve(store))?;
                    left.intersection(&right).copied().collect()
                }
                Expression::Or(left, right) => {
                    let (mut left, right) =
                        tokio::try_join!(left.resolve(store), right.resolve(store))?;
                    left.extend(right);
                    left
                }
            };

            debug!(matches = ids.len(), "resolved");
            Ok(ids)
        }
        .instrument(span)
        .boxed()
    }
}

/// Fetches every post id known to the store.
async fn resolve_universe<S: PostStore>(store: &S) -> StoreResult<PostIdSet> {
    normalize(&store.find_all().await?)
}

/// Converts raw store keys to canonical ids, deduplicating them.
fn normalize(keys: &[PostKey]) -> StoreResult<PostIdSet> {
    keys.iter().map(PostKey::normalize).collect()
}
