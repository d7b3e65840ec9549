//! Store contracts and data model for Fritter posts ("freets").
//!
//! The filter engine treats persistence as an external collaborator. This
//! crate defines what it needs from that collaborator:
//!
//! - [`PostId`] / [`PostKey`] - canonical post identifiers and the raw forms
//!   a store may hand back
//! - [`PostStore`] / [`TagStore`] - the async lookups the evaluator performs
//! - [`MemoryStore`] - an in-memory implementation backed by a JSON snapshot
//!
//! # Quick Start
//!
//! ```
//! use fritter_store_rs::prelude::*;
//!
//! let mut store = MemoryStore::new();
//! store.add_user(User::new("u1", "alice"));
//! assert_eq!(store.usernames(), vec!["alice"]);
//! ```

pub mod error;
pub mod id;
pub mod memory;
pub mod models;
pub mod prelude;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use id::{PostId, PostIdSet, PostKey};
pub use memory::MemoryStore;
pub use models::{Post, Snapshot, TagRecord, User};
pub use store::{PostStore, TagStore};
