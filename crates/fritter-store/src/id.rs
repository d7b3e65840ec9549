//! Post identifiers.
//!
//! Stores may return the same post under different representations: a
//! structured object id (`{"$oid": "..."}`) from one query path and a bare
//! hex string from another. [`PostKey`] captures those raw forms and
//! [`PostKey::normalize`] turns either into the canonical [`PostId`], which
//! is what every set operation compares.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::StoreError;

/// Number of bytes in a post identifier.
const ID_LEN: usize = 12;

/// An ordered, deduplicated set of post identifiers.
pub type PostIdSet = BTreeSet<PostId>;

/// Error returned when text is not a valid 24-digit hex post id.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{value}' is not a 24-digit hex post id")]
pub struct ParsePostIdError {
    /// The rejected text.
    pub value: String,
}

impl From<ParsePostIdError> for StoreError {
    fn from(err: ParsePostIdError) -> Self {
        StoreError::InvalidPostId { value: err.value }
    }
}

/// Canonical post identifier: 12 opaque bytes.
///
/// Rendered and serialized as 24 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId([u8; ID_LEN]);

impl PostId {
    /// Creates a post id from raw bytes.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Generates a fresh id: a big-endian seconds timestamp followed by
    /// eight random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_LEN];
        let secs = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&uuid::Uuid::new_v4().as_bytes()[..8]);
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Returns the hex form of this id.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({self})")
    }
}

impl FromStr for PostId {
    type Err = ParsePostIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePostIdError {
            value: s.to_string(),
        };

        // from_str_radix tolerates a sign, so check the digits up front
        if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [0u8; ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A post identifier as returned by a store, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostKey {
    /// A structured object id, `{"$oid": "<hex>"}` in JSON.
    Object {
        /// The already-decoded id.
        #[serde(rename = "$oid")]
        oid: PostId,
    },

    /// An id carried as plain text.
    Text(String),
}

impl PostKey {
    /// Converts the key to its canonical [`PostId`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPostId` if a text key is not valid hex.
    pub fn normalize(&self) -> Result<PostId, StoreError> {
        match self {
            PostKey::Object { oid } => Ok(*oid),
            PostKey::Text(text) => Ok(text.parse::<PostId>()?),
        }
    }
}

impl From<PostId> for PostKey {
    fn from(oid: PostId) -> Self {
        PostKey::Object { oid }
    }
}

impl From<&str> for PostKey {
    fn from(text: &str) -> Self {
        PostKey::Text(text.to_string())
    }
}

impl From<String> for PostKey {
    fn from(text: String) -> Self {
        PostKey::Text(text)
    }
}
