//! Handlers for the runtime operations.
//!
//! Each handler extends [`Runtime`](crate::Runtime) with one request type.
//! Handlers load what they need through the operation's stage, validate in
//! full, and only then stage registry, game and settlement writes.

mod create;
mod forfeit;
mod play_move;
mod query;
mod reject;

use checkers_core::GameState;

use crate::api::{Result, RuntimeError};
use crate::identity::Identity;
use crate::repository::{StagedStore, StoredGame};
use crate::types::GameIndex;

fn parse_identity(value: &str) -> Result<Identity> {
    Identity::parse(value).map_err(|source| RuntimeError::invalid_identity(value, source))
}

fn load_game(stage: &StagedStore<'_>, index: &GameIndex) -> Result<StoredGame> {
    stage
        .game(index)?
        .ok_or_else(|| RuntimeError::NotFound {
            index: index.clone(),
        })
}

fn parse_state(game: &StoredGame) -> Result<GameState> {
    game.parse_game()
        .map_err(|source| RuntimeError::MalformedRecord {
            index: game.index.clone(),
            source,
        })
}
