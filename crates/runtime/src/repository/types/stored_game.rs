use serde::{Deserialize, Serialize};

use checkers_core::{CodecError, GameState, Player, codec};

use crate::identity::Identity;
use crate::types::{Amount, GameIndex, Timestamp};

/// Persisted form of one game, keyed by [`GameIndex`].
///
/// `board` and `turn` hold the codec form of the rules state. `before_index`
/// and `after_index` thread the game into the expiry registry; only the
/// registry module writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGame {
    pub index: GameIndex,
    pub board: String,
    pub turn: String,
    pub black: Identity,
    pub red: Identity,
    pub creator: Identity,
    pub wager: Amount,
    pub denom: String,
    pub deadline: Timestamp,
    pub move_count: u64,
    pub winner: Option<Player>,
    pub before_index: Option<GameIndex>,
    pub after_index: Option<GameIndex>,
}

impl StoredGame {
    /// Fresh, unlinked game in the opening position with black to move.
    pub fn new(
        index: GameIndex,
        creator: Identity,
        black: Identity,
        red: Identity,
        wager: Amount,
        denom: String,
        deadline: Timestamp,
    ) -> Self {
        let encoded = codec::encode(&GameState::new());
        Self {
            index,
            board: encoded.board,
            turn: encoded.turn,
            black,
            red,
            creator,
            wager,
            denom,
            deadline,
            move_count: 0,
            winner: None,
            before_index: None,
            after_index: None,
        }
    }

    /// Decodes the rules state. Never touches `self`.
    pub fn parse_game(&self) -> Result<GameState, CodecError> {
        codec::decode(&self.board, &self.turn)
    }

    pub fn store_game(&mut self, state: &GameState) {
        let encoded = codec::encode(state);
        self.board = encoded.board;
        self.turn = encoded.turn;
    }

    pub fn is_live(&self) -> bool {
        self.winner.is_none()
    }

    pub fn identity_of(&self, player: Player) -> &Identity {
        match player {
            Player::Black => &self.black,
            Player::Red => &self.red,
        }
    }

    /// Side played by `who`. When one identity plays both sides, the side
    /// expected to move is picked.
    pub fn player_of(&self, who: &Identity, turn: Player) -> Option<Player> {
        if self.identity_of(turn) == who {
            Some(turn)
        } else if self.identity_of(turn.opponent()) == who {
            Some(turn.opponent())
        } else {
            None
        }
    }

    /// True for the two players and the creator.
    pub fn involves(&self, who: &Identity) -> bool {
        &self.black == who || &self.red == who || &self.creator == who
    }

    /// Both stakes together. `None` when the sum does not fit an [`Amount`].
    pub fn pool(&self) -> Option<Amount> {
        self.wager.checked_mul(2)
    }
}
