use std::fmt;

use crate::config::GameConfig;

/// Square coordinates on the board, `(0, 0)` being black's back-left corner.
///
/// Coordinates are signed so that requests carrying out-of-board values can be
/// represented and rejected instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates fall inside the 8×8 grid.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        let size = GameConfig::BOARD_SIZE as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Returns true for the dark squares, the only ones pieces ever occupy.
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && (self.x + self.y) % 2 == 1
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Row-major index into the board storage, `None` when off the board.
    pub(crate) const fn square(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.y as usize * GameConfig::BOARD_SIZE + self.x as usize)
        } else {
            None
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One engine step: a diagonal advance or a single jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Convenience constructor from raw coordinates.
    pub const fn from_coords(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Self {
        Self::new(Position::new(from_x, from_y), Position::new(to_x, to_y))
    }

    pub const fn delta(self) -> (i32, i32) {
        (self.to.x - self.from.x, self.to.y - self.from.y)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playable_squares_are_the_odd_ones() {
        assert!(Position::new(1, 0).is_playable());
        assert!(Position::new(0, 1).is_playable());
        assert!(!Position::new(0, 0).is_playable());
        assert!(!Position::new(7, 7).is_playable());
        assert!(!Position::new(-1, 0).is_playable());
        assert!(!Position::new(8, 1).is_playable());
    }

    #[test]
    fn square_index_is_row_major() {
        assert_eq!(Position::new(1, 0).square(), Some(1));
        assert_eq!(Position::new(0, 1).square(), Some(8));
        assert_eq!(Position::new(7, 7).square(), Some(63));
        assert_eq!(Position::new(8, 0).square(), None);
    }
}
