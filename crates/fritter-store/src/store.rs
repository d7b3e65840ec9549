//! Store traits consumed by the filter evaluator.
//!
//! Both traits return futures that are `Send`, so an evaluation can run on a
//! multi-threaded runtime and fan out across subtrees. Blanket impls let
//! callers pass a store by reference or behind an [`Arc`].

use std::future::Future;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::id::PostKey;
use crate::models::TagRecord;

/// Read access to posts.
pub trait PostStore: Send + Sync {
    /// Returns every post currently known to the store.
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<PostKey>>> + Send;

    /// Returns the posts authored by `username`.
    ///
    /// An unknown username yields an empty list, not an error.
    fn find_all_by_author(
        &self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Vec<PostKey>>> + Send;
}

/// Read access to tags.
pub trait TagStore: Send + Sync {
    /// Returns the tag with the given label, if one exists.
    fn find_by_label(
        &self,
        label: &str,
    ) -> impl Future<Output = StoreResult<Option<TagRecord>>> + Send;
}

impl<T: PostStore> PostStore for &T {
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<PostKey>>> + Send {
        (**self).find_all()
    }

    fn find_all_by_author(
        &self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Vec<PostKey>>> + Send {
        (**self).find_all_by_author(username)
    }
}

impl<T: TagStore> TagStore for &T {
    fn find_by_label(
        &self,
        label: &str,
    ) -> impl Future<Output = StoreResult<Option<TagRecord>>> + Send {
        (**self).find_by_label(label)
    }
}

impl<T: PostStore> PostStore for Arc<T> {
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<PostKey>>> + Send {
        (**self).find_all()
    }

    fn find_all_by_author(
        &self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Vec<PostKey>>> + Send {
        (**self).find_all_by_author(username)
    }
}

impl<T: TagStore> TagStore for Arc<T> {
    fn find_by_label(
        &self,
        label: &str,
    ) -> impl Future<Output = StoreResult<Option<TagRecord>>> + Send {
        (**self).find_by_label(label)
    }
}
