//! Compact string form of a game, as persisted in stored game records.
//!
//! # Format
//!
//! ```text
//! board: 8 rows joined by '|', row y is the y-th segment, character x is (x, y)
//!        '*' empty, 'b' black man, 'B' black king, 'r' red man, 'R' red king
//! turn:  'b' | 'r'            winner: 'b' | 'r' | '*'
//! ```
//!
//! Changing the alphabet or the dimensions breaks every stored game and must
//! be versioned explicitly.

use std::fmt;
use std::str::FromStr;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Board, GameState, Piece, Player, Position};

/// Errors raised while decoding a persisted record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodecError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },

    #[error("piece on unplayable square {position}")]
    UnplayableSquare { position: Position },

    #[error("invalid turn marker {marker:?}")]
    InvalidTurn { marker: String },

    #[error("invalid player marker {marker:?}")]
    InvalidPlayer { marker: String },
}

impl GameError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RowCount { .. } => "CODEC_ROW_COUNT",
            Self::RowWidth { .. } => "CODEC_ROW_WIDTH",
            Self::UnknownSymbol { .. } => "CODEC_UNKNOWN_SYMBOL",
            Self::UnplayableSquare { .. } => "CODEC_UNPLAYABLE_SQUARE",
            Self::InvalidTurn { .. } => "CODEC_INVALID_TURN",
            Self::InvalidPlayer { .. } => "CODEC_INVALID_PLAYER",
        }
    }
}

/// Persisted form of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedGame {
    pub board: String,
    pub turn: String,
}

pub fn encode(state: &GameState) -> EncodedGame {
    EncodedGame {
        board: state.board.to_string(),
        turn: state.turn.marker().to_string(),
    }
}

/// Rebuilds a state from its persisted parts. Nothing is produced unless both
/// parts are valid.
pub fn decode(board: &str, turn: &str) -> Result<GameState, CodecError> {
    let board = board.parse::<Board>()?;
    let turn = decode_turn(turn)?;
    Ok(GameState::from_parts(board, turn))
}

fn decode_turn(marker: &str) -> Result<Player, CodecError> {
    single_char(marker)
        .and_then(Player::from_marker)
        .ok_or_else(|| CodecError::InvalidTurn {
            marker: marker.to_string(),
        })
}

/// Marker for an optional player (winner field): `b`, `r` or `*`.
pub fn encode_player(player: Option<Player>) -> String {
    player
        .map_or(GameConfig::NO_PLAYER_MARKER, Player::marker)
        .to_string()
}

pub fn decode_player(marker: &str) -> Result<Option<Player>, CodecError> {
    match single_char(marker) {
        Some(GameConfig::NO_PLAYER_MARKER) => Ok(None),
        Some(symbol) => Player::from_marker(symbol)
            .map(Some)
            .ok_or_else(|| CodecError::InvalidPlayer {
                marker: marker.to_string(),
            }),
        None => Err(CodecError::InvalidPlayer {
            marker: marker.to_string(),
        }),
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = GameConfig::BOARD_SIZE as i32;
        for y in 0..size {
            if y > 0 {
                write!(f, "{}", GameConfig::ROW_SEPARATOR)?;
            }
            for x in 0..size {
                let symbol = self
                    .piece_at(Position::new(x, y))
                    .map_or(GameConfig::EMPTY_CELL, Piece::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = CodecError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        let size = GameConfig::BOARD_SIZE;
        let rows: Vec<&str> = encoded.split(GameConfig::ROW_SEPARATOR).collect();
        if rows.len() != size {
            return Err(CodecError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(CodecError::RowWidth {
                    row: y,
                    expected: size,
                    found: width,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                if symbol == GameConfig::EMPTY_CELL {
                    continue;
                }
                let piece = Piece::from_symbol(symbol)
                    .ok_or(CodecError::UnknownSymbol { symbol, position })?;
                if !board.set(position, Some(piece)) {
                    return Err(CodecError::UnplayableSquare { position });
                }
            }
        }
        Ok(board)
    }
}
