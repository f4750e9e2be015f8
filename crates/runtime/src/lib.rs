//! Ledger runtime for wagered checkers games.
//!
//! This crate wires the pure rules of [`checkers_core`] to persisted game
//! records, the deadline-ordered expiry registry, wager settlement and the
//! leaderboard. Consumers embed [`Runtime`] and call one operation per ledger
//! transaction; each operation either commits every write, payout and event
//! or leaves the store untouched.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, its configuration and builder
//! - [`api`] exposes the request, response and error types
//! - [`registry`] maintains the doubly linked list of live games
//! - [`settlement`] pays winners and updates statistics and the leaderboard
//! - [`repository`], [`escrow`], [`clock`] and [`events`] are the collaborator
//!   contracts with in-memory implementations
pub mod api;
pub mod clock;
pub mod escrow;
pub mod events;
pub mod identity;
pub mod registry;
pub mod repository;
pub mod runtime;
pub mod settlement;
pub mod types;

mod handlers;

pub use api::{
    CanPlayMove, CanPlayMoveResponse, CreateGame, CreateGameResponse, PlayMove, PlayMoveResponse,
    RejectGame, Result, RuntimeError,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use escrow::{Escrow, EscrowError, InMemoryEscrow, Transfer, TransferKind};
pub use events::{Event, EventKind, EventSink, InMemoryEventLog, TracingEventSink};
pub use identity::{Identity, IdentityError};
pub use repository::{
    InMemoryStore, Leaderboard, PlayerInfo, RepositoryError, Store, StoredGame, SystemInfo,
    WinningPlayer,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use settlement::Outcome;
pub use types::{Amount, GameIndex, Timestamp};
