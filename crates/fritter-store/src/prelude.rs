//! Convenient re-exports for common store types.
//!
//! ```
//! use fritter_store_rs::prelude::*;
//! ```

pub use crate::error::{StoreError, StoreResult};
pub use crate::id::{PostId, PostIdSet, PostKey};
pub use crate::memory::MemoryStore;
pub use crate::models::{Post, Snapshot, TagRecord, User};
pub use crate::store::{PostStore, TagStore};
