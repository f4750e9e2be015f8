//! Public API surface of the runtime: errors plus request/response messages.

mod errors;
mod messages;

pub use errors::{EscrowError, RepositoryError, Result, RuntimeError};
pub use messages::{
    CanPlayMove, CanPlayMoveResponse, CreateGame, CreateGameResponse, PlayMove, PlayMoveResponse,
    RejectGame,
};
