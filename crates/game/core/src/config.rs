/// Board geometry and rule constants.
///
/// Everything here is part of the persisted record format: changing a value
/// breaks previously stored games and must be versioned explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Width and height of the board.
    pub const BOARD_SIZE: usize = 8;
    /// Number of addressable (dark) squares.
    pub const PLAYABLE_SQUARES: usize = Self::BOARD_SIZE * Self::BOARD_SIZE / 2;
    /// Rows filled with men for each side at the start of a game.
    pub const STARTING_ROWS: usize = 3;
    /// Upper bound of listed legal moves for one side. Captures and steps are
    /// never listed together, so each occupied square adds at most four.
    pub const MAX_LEGAL_MOVES: usize = Self::PLAYABLE_SQUARES * 4;

    // ===== record codec alphabet =====
    pub const ROW_SEPARATOR: char = '|';
    pub const EMPTY_CELL: char = '*';
    pub const NO_PLAYER_MARKER: char = '*';
}
