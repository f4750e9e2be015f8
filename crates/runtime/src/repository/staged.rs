//! Write buffer over a [`Store`] for one runtime operation.
//!
//! Reads see the operation's own pending writes first, then the base store.
//! Nothing reaches the base store until [`StagedStore::commit`]; dropping the
//! stage discards every pending write.

use std::collections::BTreeMap;

use crate::identity::Identity;
use crate::repository::{Leaderboard, PlayerInfo, Result, Store, StoredGame, SystemInfo};
use crate::types::GameIndex;

pub struct StagedStore<'a> {
    base: &'a dyn Store,
    /// `None` marks a pending delete.
    games: BTreeMap<GameIndex, Option<StoredGame>>,
    system_info: Option<SystemInfo>,
    players: BTreeMap<Identity, PlayerInfo>,
    leaderboard: Option<Leaderboard>,
}

impl<'a> StagedStore<'a> {
    pub fn new(base: &'a dyn Store) -> Self {
        Self {
            base,
            games: BTreeMap::new(),
            system_info: None,
            players: BTreeMap::new(),
            leaderboard: None,
        }
    }

    pub fn game(&self, index: &GameIndex) -> Result<Option<StoredGame>> {
        match self.games.get(index) {
            Some(staged) => Ok(staged.clone()),
            None => self.base.load_game(index),
        }
    }

    pub fn put_game(&mut self, game: StoredGame) {
        self.games.insert(game.index.clone(), Some(game));
    }

    pub fn remove_game(&mut self, index: &GameIndex) {
        self.games.insert(index.clone(), None);
    }

    pub fn system_info(&self) -> Result<Option<SystemInfo>> {
        match &self.system_info {
            Some(info) => Ok(Some(info.clone())),
            None => self.base.load_system_info(),
        }
    }

    pub fn put_system_info(&mut self, info: SystemInfo) {
        self.system_info = Some(info);
    }

    pub fn player_info(&self, player: &Identity) -> Result<Option<PlayerInfo>> {
        match self.players.get(player) {
            Some(info) => Ok(Some(info.clone())),
            None => self.base.load_player_info(player),
        }
    }

    pub fn put_player_info(&mut self, info: PlayerInfo) {
        self.players.insert(info.index.clone(), info);
    }

    pub fn leaderboard(&self) -> Result<Option<Leaderboard>> {
        match &self.leaderboard {
            Some(leaderboard) => Ok(Some(leaderboard.clone())),
            None => self.base.load_leaderboard(),
        }
    }

    pub fn put_leaderboard(&mut self, leaderboard: Leaderboard) {
        self.leaderboard = Some(leaderboard);
    }

    pub fn pending_writes(&self) -> usize {
        self.games.len()
            + self.players.len()
            + usize::from(self.system_info.is_some())
            + usize::from(self.leaderboard.is_some())
    }

    /// Writes every pending record to the base store. Returns the number of
    /// records written.
    pub fn commit(self) -> Result<usize> {
        let written = self.pending_writes();

        for (index, game) in &self.games {
            match game {
                Some(game) => self.base.save_game(game)?,
                None => self.base.delete_game(index)?,
            }
        }
        for info in self.players.values() {
            self.base.save_player_info(info)?;
        }
        if let Some(leaderboard) = &self.leaderboard {
            self.base.save_leaderboard(leaderboard)?;
        }
        if let Some(info) = &self.system_info {
            self.base.save_system_info(info)?;
        }

        Ok(written)
    }
}
