//! Repository contracts for the records a game touches.
//!
//! Each contract is a plain key-value capability (`load`, `save`, `delete`).
//! Ordering, linkage and aggregation live above this layer.

use crate::identity::Identity;
use crate::repository::Result;
use crate::types::GameIndex;

use super::types::{Leaderboard, PlayerInfo, StoredGame, SystemInfo};

/// Games keyed by index.
pub trait StoredGameRepository: Send + Sync {
    fn load_game(&self, index: &GameIndex) -> Result<Option<StoredGame>>;

    /// Insert or overwrite the game stored under `game.index`.
    fn save_game(&self, game: &StoredGame) -> Result<()>;

    /// Removing an absent game is not an error.
    fn delete_game(&self, index: &GameIndex) -> Result<()>;

    /// All stored indices, for diagnostics.
    fn list_games(&self) -> Result<Vec<GameIndex>>;
}

/// The singleton [`SystemInfo`] record.
pub trait SystemInfoRepository: Send + Sync {
    fn load_system_info(&self) -> Result<Option<SystemInfo>>;

    fn save_system_info(&self, info: &SystemInfo) -> Result<()>;
}

/// Per identity statistics.
pub trait PlayerInfoRepository: Send + Sync {
    fn load_player_info(&self, player: &Identity) -> Result<Option<PlayerInfo>>;

    /// Insert or overwrite the record stored under `info.index`.
    fn save_player_info(&self, info: &PlayerInfo) -> Result<()>;
}

/// The singleton [`Leaderboard`] record.
pub trait LeaderboardRepository: Send + Sync {
    fn load_leaderboard(&self) -> Result<Option<Leaderboard>>;

    fn save_leaderboard(&self, leaderboard: &Leaderboard) -> Result<()>;
}

/// Everything the runtime persists.
pub trait Store:
    StoredGameRepository + SystemInfoRepository + PlayerInfoRepository + LeaderboardRepository
{
}

impl<T> Store for T where
    T: StoredGameRepository + SystemInfoRepository + PlayerInfoRepository + LeaderboardRepository
{
}
