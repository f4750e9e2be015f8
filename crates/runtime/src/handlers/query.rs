//! Handler for the move dry run and read-only queries.

use checkers_core::{GameEngine, Player};

use crate::api::{CanPlayMove, CanPlayMoveResponse, Result, RuntimeError};
use crate::identity::Identity;
use crate::registry;
use crate::repository::{Leaderboard, PlayerInfo, StagedStore, StoredGame, SystemInfo};
use crate::runtime::Runtime;
use crate::types::GameIndex;

use super::{load_game, parse_state};

impl Runtime {
    /// Dry run of [`Runtime::play_move`] for the side named by its color
    /// marker. Only an unknown game is an error; every other refusal is
    /// reported as `possible: false` with the reason.
    pub fn can_play_move(&self, request: &CanPlayMove) -> Result<CanPlayMoveResponse> {
        let stage = self.read();
        let game = load_game(&stage, &request.game_index)?;
        if !game.is_live() {
            return Ok(CanPlayMoveResponse::refused(RuntimeError::AlreadyFinished {
                index: game.index,
            }));
        }

        let mut marker = request.player.chars();
        let player = match (marker.next().and_then(Player::from_marker), marker.next()) {
            (Some(player), None) => player,
            _ => {
                return Ok(CanPlayMoveResponse::refused(format!(
                    "message creator is not a player: {}",
                    request.player
                )));
            }
        };

        let mut state = match parse_state(&game) {
            Ok(state) => state,
            Err(err) => {
                tracing::error!(game = %game.index, error = %err, "stored game cannot be parsed");
                return Ok(CanPlayMoveResponse::refused(err));
            }
        };
        if !state.turn_is(player) {
            return Ok(CanPlayMoveResponse::refused(RuntimeError::NotYourTurn {
                player,
            }));
        }

        // `state` is a private copy, nothing is persisted.
        match GameEngine::new(&mut state).play(player, request.mv()) {
            Ok(_) => Ok(CanPlayMoveResponse::ok()),
            Err(err) => Ok(CanPlayMoveResponse::refused(RuntimeError::WrongMove(err))),
        }
    }

    pub fn stored_game(&self, index: &GameIndex) -> Result<Option<StoredGame>> {
        Ok(self.read().game(index)?)
    }

    pub fn system_info(&self) -> Result<SystemInfo> {
        self.read()
            .system_info()?
            .ok_or(RuntimeError::MissingSystemInfo)
    }

    pub fn player_info(&self, player: &Identity) -> Result<Option<PlayerInfo>> {
        Ok(self.read().player_info(player)?)
    }

    pub fn leaderboard(&self) -> Result<Leaderboard> {
        Ok(self.read().leaderboard()?.unwrap_or_default())
    }

    /// Live games from the closest deadline to the furthest.
    pub fn live_games(&self) -> Result<Vec<GameIndex>> {
        let info = self.system_info()?;
        registry::walk(&self.read(), &info)
    }

    /// Stage with no writes, used as a read view.
    fn read(&self) -> StagedStore<'_> {
        StagedStore::new(self.store.as_ref())
    }
}
