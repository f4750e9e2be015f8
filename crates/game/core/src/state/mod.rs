//! Authoritative game state representation.
//!
//! This module owns the board, pieces and turn bookkeeping. Runtime layers
//! clone or query this state but mutate it exclusively through the engine.
pub mod types;

pub use types::{Board, Move, Piece, Player, Position};

/// Canonical snapshot of one game: the board and the side to move.
///
/// Forced-capture obligations are recomputed from the board on every call,
/// so no move history is carried.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    /// Side expected to move next. Stays on the winner once a game is won.
    pub turn: Player,
}

impl GameState {
    /// Fresh game in the opening layout with black to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Player::Black,
        }
    }

    /// Assembles a state from an arbitrary board, e.g. one decoded from storage.
    pub fn from_parts(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn turn_is(&self, player: Player) -> bool {
        self.turn == player
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
