//! Data model for users, posts and tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{PostId, PostKey};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Unique username, referenced by `@username` in filters.
    pub username: String,
}

impl User {
    /// Creates a user.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// A post ("freet").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Identifier of the authoring [`User`].
    pub author_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Creates a post with no creation timestamp.
    pub fn new(id: PostId, author_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            author_id: author_id.into(),
            content: content.into(),
            created_at: None,
        }
    }
}

/// A tag label and the posts it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub label: String,
    /// Tagged posts, in whatever representation the store recorded them.
    #[serde(default)]
    pub post_ids: Vec<PostKey>,
}

impl TagRecord {
    /// Creates an empty tag.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            post_ids: Vec::new(),
        }
    }
}

/// A JSON document holding a complete store state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub tags: Vec<TagRecord>,
}
