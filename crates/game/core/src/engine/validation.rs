//! Pure move validation shared by the engine and dry-run queries.

use super::MoveError;
use crate::state::{GameState, Move, Player, Position};

/// Shape of a move that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Single diagonal advance.
    Step,
    /// Jump over the opposing piece standing on `captured`.
    Jump { captured: Position },
}

impl GameState {
    /// Checks `mv` for `mover` against the rules without touching the state.
    ///
    /// Checks run from the cheapest (coordinates) to the most expensive
    /// (scanning the board for a mandatory capture).
    pub fn validate_move(&self, mover: Player, mv: Move) -> Result<MoveKind, MoveError> {
        for position in [mv.from, mv.to] {
            if !position.is_playable() {
                return Err(MoveError::NotPlayable { position });
            }
        }

        if !self.turn_is(mover) {
            return Err(MoveError::NotYourTurn { player: mover });
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPiece { position: mv.from })?;
        if piece.player != mover {
            return Err(MoveError::NotOwnPiece {
                position: mv.from,
                player: mover,
            });
        }

        if !self.board.is_empty_at(mv.to) {
            return Err(MoveError::Occupied { position: mv.to });
        }

        let (dx, dy) = mv.delta();
        if dx.abs() != dy.abs() {
            return Err(MoveError::NotDiagonal { mv });
        }
        let distance = dx.abs();
        if distance != 1 && distance != 2 {
            return Err(MoveError::WrongDistance { mv });
        }

        if !piece.king && dy.signum() != mover.forward() {
            return Err(MoveError::BackwardMan { mv });
        }

        if distance == 2 {
            let over = mv.from.offset(dx / 2, dy / 2);
            return match self.board.piece_at(over) {
                Some(victim) if victim.player != mover => Ok(MoveKind::Jump { captured: over }),
                _ => Err(MoveError::NothingToCapture { position: over }),
            };
        }

        if self.has_capture(mover) {
            return Err(MoveError::CaptureRequired { mv });
        }

        Ok(MoveKind::Step)
    }
}
