//! Repository layer for persisted game records.
//!
//! Repositories are plain key-value capabilities over the four record kinds:
//! - Stored games, keyed by index
//! - The `SystemInfo` singleton (id counter and registry endpoints)
//! - Player statistics, keyed by identity
//! - The `Leaderboard` singleton
//!
//! Runtime operations never write to a repository directly; they go through a
//! [`StagedStore`] that is committed once the whole operation succeeded.

mod error;
mod memory;
mod staged;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryStore;
pub use staged::StagedStore;
pub use traits::{
    LeaderboardRepository, PlayerInfoRepository, Store, StoredGameRepository,
    SystemInfoRepository,
};
pub use types::{Leaderboard, PlayerInfo, StoredGame, SystemInfo, WinningPlayer};
