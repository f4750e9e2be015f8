//! Common types used throughout the runtime.
//!
//! These provide semantic clarity for primitive values that carry a specific
//! meaning across records, requests and events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Point in time as seen by the ledger (block time).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Token amount of a single player's stake.
pub type Amount = u64;

/// Storage key of a stored game, minted from `SystemInfo::next_id`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameIndex(String);

impl GameIndex {
    pub fn new(index: impl Into<String>) -> Self {
        Self(index.into())
    }

    pub fn from_id(id: u64) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameIndex {
    fn from(index: &str) -> Self {
        Self::new(index)
    }
}

impl From<String> for GameIndex {
    fn from(index: String) -> Self {
        Self(index)
    }
}
