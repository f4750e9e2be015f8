use super::{Piece, Player, Position};
use crate::config::GameConfig;

const SQUARES: usize = GameConfig::BOARD_SIZE * GameConfig::BOARD_SIZE;

/// 8×8 grid of squares. Only playable squares ever hold a piece.
///
/// Storage is a flat row-major array; every mutation goes through
/// [`Board::set`], which refuses light squares so the invariant cannot be
/// broken from outside.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARES],
}

impl Board {
    /// Board with no pieces at all.
    pub const fn empty() -> Self {
        Self {
            squares: [None; SQUARES],
        }
    }

    /// Standard opening layout: black men on the first three rows, red men on
    /// the last three.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let size = GameConfig::BOARD_SIZE as i32;
        let rows = GameConfig::STARTING_ROWS as i32;
        for y in 0..size {
            let owner = if y < rows {
                Player::Black
            } else if y >= size - rows {
                Player::Red
            } else {
                continue;
            };
            for x in 0..size {
                let position = Position::new(x, y);
                if position.is_playable() {
                    board.squares[y as usize * GameConfig::BOARD_SIZE + x as usize] =
                        Some(Piece::man(owner));
                }
            }
        }
        board
    }

    /// Piece on `position`, `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        position.square().and_then(|index| self.squares[index])
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Places (or clears) a piece. Returns false, leaving the board untouched,
    /// when `position` is not a playable square.
    pub fn set(&mut self, position: Position, piece: Option<Piece>) -> bool {
        if !position.is_playable() {
            return false;
        }
        match position.square() {
            Some(index) => {
                self.squares[index] = piece;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the piece on `position`.
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        position
            .square()
            .and_then(|index| self.squares[index].take())
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(index, slot)| {
            slot.map(|piece| {
                let size = GameConfig::BOARD_SIZE;
                (
                    Position::new((index % size) as i32, (index / size) as i32),
                    piece,
                )
            })
        })
    }

    /// Iterates over the squares held by `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.player == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let encoded = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        encoded.parse().map_err(serde::de::Error::custom)
    }
}
