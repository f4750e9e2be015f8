//! Move validation and application.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. A move is
//! validated in full before anything is written, then applied, then the
//! opponent's position is evaluated for a win. Given the same state and move
//! the outcome is always the same: there is no randomness and no clock.

mod errors;
mod movegen;
mod validation;

pub use errors::MoveError;
pub use movegen::LegalMoves;
pub use validation::MoveKind;

use crate::state::{GameState, Move, Player, Position};

/// Result of one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Square of the piece removed by a jump.
    pub captured: Option<Position>,
    /// True when a man reached the far row with this move.
    pub promoted: bool,
    /// Set when the opponent is left without pieces or without moves.
    pub winner: Option<Player>,
}

/// Game engine that validates and applies moves on a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Plays `mv` on behalf of `mover`.
    ///
    /// On error the state is left exactly as it was. On success the turn
    /// passes to the opponent, unless the move won the game, in which case the
    /// turn stays with the winner.
    pub fn play(&mut self, mover: Player, mv: Move) -> Result<MoveOutcome, MoveError> {
        let kind = self.state.validate_move(mover, mv)?;

        let board = &mut self.state.board;
        let Some(mut piece) = board.take(mv.from) else {
            return Err(MoveError::NoPiece { position: mv.from });
        };

        let captured = match kind {
            MoveKind::Jump { captured } => {
                board.take(captured);
                Some(captured)
            }
            MoveKind::Step => None,
        };

        let promoted = !piece.king && mv.to.y == mover.promotion_row();
        if promoted {
            piece = piece.crowned();
        }
        board.set(mv.to, Some(piece));

        let opponent = mover.opponent();
        let winner = if self.state.has_legal_move(opponent) {
            self.state.turn = opponent;
            None
        } else {
            Some(mover)
        };

        Ok(MoveOutcome {
            captured,
            promoted,
            winner,
        })
    }
}
