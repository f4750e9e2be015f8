//! Error types for move validation.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Move, Player, Position};

/// Reasons the rules engine refuses a move.
///
/// Every variant is raised before the state is touched, so a rejected move
/// never leaves a partially applied board behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("{position} is not a playable square")]
    NotPlayable { position: Position },

    #[error("not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("no piece at source position {position}")]
    NoPiece { position: Position },

    #[error("piece at {position} does not belong to {player}")]
    NotOwnPiece { position: Position, player: Player },

    #[error("already a piece at destination position {position}")]
    Occupied { position: Position },

    #[error("{mv} is not diagonal")]
    NotDiagonal { mv: Move },

    #[error("{mv} is neither a single step nor a jump")]
    WrongDistance { mv: Move },

    #[error("only a king may move backwards: {mv}")]
    BackwardMan { mv: Move },

    #[error("no opposing piece to capture at {position}")]
    NothingToCapture { position: Position },

    #[error("a capture is available and must be played instead of {mv}")]
    CaptureRequired { mv: Move },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlayable { .. } => "MOVE_NOT_PLAYABLE",
            Self::NotYourTurn { .. } => "MOVE_NOT_YOUR_TURN",
            Self::NoPiece { .. } => "MOVE_NO_PIECE",
            Self::NotOwnPiece { .. } => "MOVE_NOT_OWN_PIECE",
            Self::Occupied { .. } => "MOVE_OCCUPIED",
            Self::NotDiagonal { .. } => "MOVE_NOT_DIAGONAL",
            Self::WrongDistance { .. } => "MOVE_WRONG_DISTANCE",
            Self::BackwardMan { .. } => "MOVE_BACKWARD_MAN",
            Self::NothingToCapture { .. } => "MOVE_NOTHING_TO_CAPTURE",
            Self::CaptureRequired { .. } => "MOVE_CAPTURE_REQUIRED",
        }
    }
}
