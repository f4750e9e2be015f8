pub mod board;
pub mod common;
pub mod piece;

// Re-export common types
pub use common::{Move, Position};

// Re-export piece and side types
pub use piece::{Piece, Player};

// Re-export the board
pub use board::Board;
