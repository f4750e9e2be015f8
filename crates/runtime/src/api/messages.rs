//! Plain request and response structures of the runtime operations.
//!
//! Identities arrive as raw strings and are validated by the runtime, the
//! way a ledger hands over message signers.

use serde::{Deserialize, Serialize};

use checkers_core::{Move, Player, Position, codec};

use crate::types::{Amount, GameIndex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGame {
    pub creator: String,
    pub black: String,
    pub red: String,
    pub wager: Amount,
    /// Empty selects the configured default denomination.
    #[serde(default)]
    pub denom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_index: GameIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMove {
    pub creator: String,
    pub game_index: GameIndex,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

impl PlayMove {
    pub fn mv(&self) -> Move {
        Move::from_coords(self.from_x, self.from_y, self.to_x, self.to_y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMoveResponse {
    /// `-1` when the move captured nothing.
    pub captured_x: i32,
    pub captured_y: i32,
    /// Winner marker: `b`, `r`, or `*` while the game is live.
    pub winner: String,
}

impl PlayMoveResponse {
    pub const NO_CAPTURE: i32 = -1;

    pub fn new(captured: Option<Position>, winner: Option<Player>) -> Self {
        let (captured_x, captured_y) = match captured {
            Some(position) => (position.x, position.y),
            None => (Self::NO_CAPTURE, Self::NO_CAPTURE),
        };
        Self {
            captured_x,
            captured_y,
            winner: codec::encode_player(winner),
        }
    }

    pub fn captured(&self) -> Option<Position> {
        (self.captured_x != Self::NO_CAPTURE || self.captured_y != Self::NO_CAPTURE)
            .then(|| Position::new(self.captured_x, self.captured_y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectGame {
    pub creator: String,
    pub game_index: GameIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanPlayMove {
    pub game_index: GameIndex,
    /// Color marker of the side to check: `b` or `r`.
    pub player: String,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

impl CanPlayMove {
    pub fn mv(&self) -> Move {
        Move::from_coords(self.from_x, self.from_y, self.to_x, self.to_y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanPlayMoveResponse {
    pub possible: bool,
    pub reason: String,
}

impl CanPlayMoveResponse {
    pub const OK: &'static str = "ok";

    pub fn ok() -> Self {
        Self {
            possible: true,
            reason: Self::OK.to_string(),
        }
    }

    pub fn refused(reason: impl ToString) -> Self {
        Self {
            possible: false,
            reason: reason.to_string(),
        }
    }
}
