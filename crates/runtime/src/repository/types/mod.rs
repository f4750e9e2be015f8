//! Persisted record layouts.

mod leaderboard;
mod player_info;
mod stored_game;
mod system_info;

pub use leaderboard::{Leaderboard, WinningPlayer};
pub use player_info::PlayerInfo;
pub use stored_game::StoredGame;
pub use system_info::SystemInfo;
