//! Deterministic checkers rules shared by the ledger runtime and tools.
//!
//! `checkers-core` defines the canonical rules (board, pieces, legal moves,
//! forced capture, promotion, win detection) and the compact record codec.
//! It knows nothing about storage, identities, wagers or time. All state
//! mutation flows through [`engine::GameEngine`].
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use codec::{CodecError, EncodedGame};
pub use config::GameConfig;
pub use engine::{GameEngine, LegalMoves, MoveError, MoveKind, MoveOutcome};
pub use error::{ErrorSeverity, GameError};
pub use state::{Board, GameState, Move, Piece, Player, Position};
