use crate::config::GameConfig;

/// The two sides of a game.
///
/// "No player" (no winner yet, empty square) is expressed as `Option<Player>`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Player {
    /// Moves first, starts on rows 0..3 and advances towards higher `y`.
    Black,
    /// Starts on rows 5..8 and advances towards lower `y`.
    Red,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::Red];

    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Direction of travel along `y` for this side's men.
    pub const fn forward(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::Red => -1,
        }
    }

    /// Row on which this side's men are crowned.
    pub const fn promotion_row(self) -> i32 {
        match self {
            Player::Black => GameConfig::BOARD_SIZE as i32 - 1,
            Player::Red => 0,
        }
    }

    /// Single-character marker used for turn and winner fields.
    pub const fn marker(self) -> char {
        match self {
            Player::Black => 'b',
            Player::Red => 'r',
        }
    }

    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'b' => Some(Player::Black),
            'r' => Some(Player::Red),
            _ => None,
        }
    }
}

/// A man or a king belonging to one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub player: Player,
    pub king: bool,
}

impl Piece {
    pub const fn man(player: Player) -> Self {
        Self {
            player,
            king: false,
        }
    }

    pub const fn king(player: Player) -> Self {
        Self { player, king: true }
    }

    pub const fn crowned(self) -> Self {
        Self::king(self.player)
    }

    /// Cell symbol in the record codec: lowercase men, uppercase kings.
    pub const fn symbol(self) -> char {
        match (self.player, self.king) {
            (Player::Black, false) => 'b',
            (Player::Black, true) => 'B',
            (Player::Red, false) => 'r',
            (Player::Red, true) => 'R',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'b' => Some(Self::man(Player::Black)),
            'B' => Some(Self::king(Player::Black)),
            'r' => Some(Self::man(Player::Red)),
            'R' => Some(Self::king(Player::Red)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_names_round_trip_through_strum() {
        assert_eq!(Player::Black.to_string(), "black");
        assert_eq!("RED".parse::<Player>().unwrap(), Player::Red);
    }

    #[test]
    fn symbols_cover_the_whole_alphabet() {
        for symbol in ['b', 'B', 'r', 'R'] {
            let piece = Piece::from_symbol(symbol).unwrap();
            assert_eq!(piece.symbol(), symbol);
        }
        assert_eq!(Piece::from_symbol('*'), None);
        assert_eq!(Piece::from_symbol('x'), None);
    }
}
