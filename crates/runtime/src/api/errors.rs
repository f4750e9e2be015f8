//! Unified error types surfaced by the runtime API.
//!
//! User-facing rejections and internal consistency failures share one enum;
//! [`RuntimeError::severity`] tells them apart.

use thiserror::Error;

use checkers_core::{CodecError, ErrorSeverity, GameError, MoveError, Player};

pub use crate::escrow::EscrowError;
pub use crate::repository::RepositoryError;

use crate::identity::{Identity, IdentityError};
use crate::types::{Amount, GameIndex};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game by id not found: {index}")]
    NotFound { index: GameIndex },

    #[error("invalid identity {value:?}")]
    InvalidIdentity {
        value: String,
        #[source]
        source: IdentityError,
    },

    #[error("message creator is not a player: {who}")]
    NotAPlayer { who: Identity },

    #[error("player tried to play out of turn: {player}")]
    NotYourTurn { player: Player },

    #[error("wrong move: {0}")]
    WrongMove(#[from] MoveError),

    #[error("game is already finished: {index}")]
    AlreadyFinished { index: GameIndex },

    #[error("{player} player has already played: {index}")]
    AlreadyPlayed { index: GameIndex, player: Player },

    #[error("wager of {wager} cannot be pooled")]
    WagerOverflow { wager: Amount },

    #[error("game cannot be parsed: {index}")]
    MalformedRecord {
        index: GameIndex,
        #[source]
        source: CodecError,
    },

    #[error("registry corruption: {link} points to missing game {missing}")]
    RegistryCorruption { link: String, missing: GameIndex },

    #[error("system info not found")]
    MissingSystemInfo,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Escrow(#[from] EscrowError),

    #[error("runtime requires {0} to be configured before building")]
    MissingCollaborator(&'static str),
}

impl RuntimeError {
    pub fn invalid_identity(value: &str, source: IdentityError) -> Self {
        Self::InvalidIdentity {
            value: value.to_string(),
            source,
        }
    }

    pub fn registry_corruption(link: impl Into<String>, missing: &GameIndex) -> Self {
        Self::RegistryCorruption {
            link: link.into(),
            missing: missing.clone(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. }
            | Self::InvalidIdentity { .. }
            | Self::NotAPlayer { .. }
            | Self::NotYourTurn { .. }
            | Self::WrongMove(_)
            | Self::AlreadyFinished { .. }
            | Self::AlreadyPlayed { .. }
            | Self::WagerOverflow { .. } => ErrorSeverity::Validation,
            Self::Repository(_) | Self::Escrow(_) | Self::MissingCollaborator(_) => {
                ErrorSeverity::Internal
            }
            Self::MalformedRecord { .. }
            | Self::RegistryCorruption { .. }
            | Self::MissingSystemInfo => ErrorSeverity::Fatal,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        RuntimeError::severity(self)
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "RUNTIME_NOT_FOUND",
            Self::InvalidIdentity { .. } => "RUNTIME_INVALID_IDENTITY",
            Self::NotAPlayer { .. } => "RUNTIME_NOT_A_PLAYER",
            Self::NotYourTurn { .. } => "RUNTIME_NOT_YOUR_TURN",
            Self::WrongMove(_) => "RUNTIME_WRONG_MOVE",
            Self::AlreadyFinished { .. } => "RUNTIME_ALREADY_FINISHED",
            Self::AlreadyPlayed { .. } => "RUNTIME_ALREADY_PLAYED",
            Self::WagerOverflow { .. } => "RUNTIME_WAGER_OVERFLOW",
            Self::MalformedRecord { .. } => "RUNTIME_MALFORMED_RECORD",
            Self::RegistryCorruption { .. } => "RUNTIME_REGISTRY_CORRUPTION",
            Self::MissingSystemInfo => "RUNTIME_MISSING_SYSTEM_INFO",
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::Escrow(_) => "RUNTIME_ESCROW",
            Self::MissingCollaborator(_) => "RUNTIME_MISSING_COLLABORATOR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Position;

    #[test]
    fn user_errors_are_validation() {
        let err = RuntimeError::WrongMove(MoveError::NoPiece {
            position: Position::new(0, 3),
        });
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(err.to_string().starts_with("wrong move: "));
    }

    #[test]
    fn consistency_errors_are_fatal() {
        let err = RuntimeError::registry_corruption("fifo head", &GameIndex::from("4"));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "RUNTIME_REGISTRY_CORRUPTION");
    }
}
