//! In-memory store implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::identity::Identity;
use crate::repository::{
    Leaderboard, LeaderboardRepository, PlayerInfo, PlayerInfoRepository, RepositoryError, Result,
    StoredGame, StoredGameRepository, SystemInfo, SystemInfoRepository,
};
use crate::types::GameIndex;

/// In-memory implementation of every repository contract.
///
/// Thread-safe but not persistent across process restarts.
#[derive(Default)]
pub struct InMemoryStore {
    games: RwLock<BTreeMap<GameIndex, StoredGame>>,
    system_info: RwLock<Option<SystemInfo>>,
    players: RwLock<BTreeMap<Identity, PlayerInfo>>,
    leaderboard: RwLock<Option<Leaderboard>>,
}

impl InMemoryStore {
    /// Create a new empty store. Singletons are absent until the runtime
    /// initialises them.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoredGameRepository for InMemoryStore {
    fn load_game(&self, index: &GameIndex) -> Result<Option<StoredGame>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(index).cloned())
    }

    fn save_game(&self, game: &StoredGame) -> Result<()> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.insert(game.index.clone(), game.clone());
        Ok(())
    }

    fn delete_game(&self, index: &GameIndex) -> Result<()> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.remove(index);
        Ok(())
    }

    fn list_games(&self) -> Result<Vec<GameIndex>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.keys().cloned().collect())
    }
}

impl SystemInfoRepository for InMemoryStore {
    fn load_system_info(&self) -> Result<Option<SystemInfo>> {
        let info = self
            .system_info
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(info.clone())
    }

    fn save_system_info(&self, info: &SystemInfo) -> Result<()> {
        let mut slot = self
            .system_info
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(info.clone());
        Ok(())
    }
}

impl PlayerInfoRepository for InMemoryStore {
    fn load_player_info(&self, player: &Identity) -> Result<Option<PlayerInfo>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(player).cloned())
    }

    fn save_player_info(&self, info: &PlayerInfo) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(info.index.clone(), info.clone());
        Ok(())
    }
}

impl LeaderboardRepository for InMemoryStore {
    fn load_leaderboard(&self) -> Result<Option<Leaderboard>> {
        let leaderboard = self
            .leaderboard
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(leaderboard.clone())
    }

    fn save_leaderboard(&self, leaderboard: &Leaderboard) -> Result<()> {
        let mut slot = self
            .leaderboard
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(leaderboard.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_start_absent() {
        let store = InMemoryStore::new();
        assert!(store.load_system_info().unwrap().is_none());
        assert!(store.load_leaderboard().unwrap().is_none());

        store.save_system_info(&SystemInfo::default()).unwrap();
        assert_eq!(store.load_system_info().unwrap(), Some(SystemInfo::default()));
    }

    #[test]
    fn player_info_is_keyed_by_identity() {
        let store = InMemoryStore::new();
        let alice = Identity::parse("alice").unwrap();
        let mut info = PlayerInfo::new(alice.clone());
        info.won_count = 3;
        store.save_player_info(&info).unwrap();

        assert_eq!(store.load_player_info(&alice).unwrap(), Some(info));
        assert!(
            store
                .load_player_info(&Identity::parse("bob").unwrap())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn list_games_follows_saves_and_deletes() {
        use chrono::{TimeZone, Utc};

        let store = InMemoryStore::new();
        let alice = Identity::parse("alice").unwrap();
        for id in [2, 1, 3] {
            store
                .save_game(&StoredGame::new(
                    GameIndex::from_id(id),
                    alice.clone(),
                    alice.clone(),
                    alice.clone(),
                    0,
                    "stake".to_string(),
                    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                ))
                .unwrap();
        }
        store.delete_game(&GameIndex::from_id(2)).unwrap();
        store.delete_game(&GameIndex::from_id(9)).unwrap();

        assert_eq!(
            store.list_games().unwrap(),
            vec![GameIndex::from_id(1), GameIndex::from_id(3)]
        );
    }
}
