//! In-memory store backed by a [`Snapshot`].
//!
//! Snapshots are plain JSON documents. Both synchronous (`from_json`) and
//! asynchronous (`load`, using `tokio::fs`) constructors are provided.

use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::id::{PostId, PostKey};
use crate::models::{Post, Snapshot, TagRecord, User};
use crate::store::{PostStore, TagStore};

/// A store holding users, posts and tags in memory.
///
/// Lookups never fail; the [`StoreResult`] return type exists to satisfy the
/// store traits.
///
/// # Example
///
/// ```
/// use fritter_store_rs::{MemoryStore, Post, PostId, User};
///
/// let mut store = MemoryStore::new();
/// store.add_user(User::new("u1", "alice"));
///
/// let id = PostId::generate();
/// store.add_post(Post::new(id, "u1", "woof"));
/// store.tag_post("dog", id);
///
/// assert_eq!(store.labels(), vec!["dog"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Loads a snapshot file asynchronously.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadError` if the file cannot be read, or
    /// `StoreError::Json` if it is not a valid snapshot.
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::ReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            users = store.snapshot.users.len(),
            posts = store.snapshot.posts.len(),
            tags = store.snapshot.tags.len(),
            "loaded snapshot"
        );
        Ok(store)
    }

    /// Returns the underlying snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Adds a user.
    pub fn add_user(&mut self, user: User) -> &mut Self {
        self.snapshot.users.push(user);
        self
    }

    /// Adds a post.
    pub fn add_post(&mut self, post: Post) -> &mut Self {
        self.snapshot.posts.push(post);
        self
    }

    /// Attaches a post to the tag with `label`, creating the tag if needed.
    pub fn tag_post(&mut self, label: &str, post: impl Into<PostKey>) -> &mut Self {
        let key = post.into();
        match self.snapshot.tags.iter_mut().find(|t| t.label == label) {
            Some(tag) => tag.post_ids.push(key),
            None => {
                let mut tag = TagRecord::new(label);
                tag.post_ids.push(key);
                self.snapshot.tags.push(tag);
            }
        }
        self
    }

    /// Finds a user by exact username.
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.snapshot.users.iter().find(|u| u.username == username)
    }

    /// Finds a post by id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.snapshot.posts.iter().find(|p| &p.id == id)
    }

    /// Returns all usernames.
    pub fn usernames(&self) -> Vec<&str> {
        self.snapshot
            .users
            .iter()
            .map(|u| u.username.as_str())
            .collect()
    }

    /// Returns all tag labels.
    pub fn labels(&self) -> Vec<&str> {
        self.snapshot
            .tags
            .iter()
            .map(|t| t.label.as_str())
            .collect()
    }

    /// Returns the username of a post's author, if the author is known.
    pub fn author_of(&self, post: &Post) -> Option<&str> {
        self.snapshot
            .users
            .iter()
            .find(|u| u.id == post.author_id)
            .map(|u| u.username.as_str())
    }
}

impl PostStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<PostKey>> {
        Ok(self
            .snapshot
            .posts
            .iter()
            .map(|p| PostKey::from(p.id))
            .collect())
    }

    async fn find_all_by_author(&self, username: &str) -> StoreResult<Vec<PostKey>> {
        let Some(author) = self.find_user(username) else {
            return Ok(Vec::new());
        };

        Ok(self
            .snapshot
            .posts
            .iter()
            .filter(|p| p.author_id == author.id)
            .map(|p| PostKey::from(p.id))
            .collect())
    }
}

impl TagStore for MemoryStore {
    async fn find_by_label(&self, label: &str) -> StoreResult<Option<TagRecord>> {
        Ok(self
            .snapshot
            .tags
            .iter()
            .find(|t| t.label == label)
            .cloned())
    }
}
