//! Legal move generation.
//!
//! Generation is the single source of truth for "what may be played": the
//! validator asks it whether a capture exists, and win detection asks it
//! whether the opponent can move at all.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::{GameState, Move, Piece, Player, Position};

/// Moves available to one side. When any capture exists, only captures are
/// listed; each square contributes at most four entries.
pub type LegalMoves = ArrayVec<Move, { GameConfig::MAX_LEGAL_MOVES }>;

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Diagonal directions a piece may travel in: men only forward, kings both ways.
fn directions(piece: Piece) -> impl Iterator<Item = (i32, i32)> {
    DIAGONALS
        .into_iter()
        .filter(move |&(_, dy)| piece.king || dy == piece.player.forward())
}

impl GameState {
    /// Jump destinations reachable by the piece standing on `from`.
    fn jumps_from(&self, from: Position, piece: Piece) -> impl Iterator<Item = Move> + '_ {
        directions(piece).filter_map(move |(dx, dy)| {
            let over = from.offset(dx, dy);
            let to = from.offset(2 * dx, 2 * dy);
            let captures_opponent = self
                .board
                .piece_at(over)
                .is_some_and(|victim| victim.player != piece.player);
            (to.is_playable() && self.board.is_empty_at(to) && captures_opponent)
                .then_some(Move::new(from, to))
        })
    }

    fn steps_from(&self, from: Position, piece: Piece) -> impl Iterator<Item = Move> + '_ {
        directions(piece).filter_map(move |(dx, dy)| {
            let to = from.offset(dx, dy);
            (to.is_playable() && self.board.is_empty_at(to)).then_some(Move::new(from, to))
        })
    }

    /// Returns true if `player` has at least one capture anywhere on the board.
    pub fn has_capture(&self, player: Player) -> bool {
        self.board
            .pieces_of(player)
            .any(|(from, piece)| self.jumps_from(from, piece).next().is_some())
    }

    /// Returns true if `player` can play anything at all.
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.board.pieces_of(player).any(|(from, piece)| {
            self.jumps_from(from, piece).next().is_some()
                || self.steps_from(from, piece).next().is_some()
        })
    }

    /// Every move `player` could legally submit on this board, honouring the
    /// forced-capture rule. Independent of whose turn it is.
    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        let mut moves = LegalMoves::new();
        for (from, piece) in self.board.pieces_of(player) {
            moves.extend(self.jumps_from(from, piece));
        }
        if moves.is_empty() {
            for (from, piece) in self.board.pieces_of(player) {
                moves.extend(self.steps_from(from, piece));
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Board;

    fn place(board: &mut Board, x: i32, y: i32, piece: Piece) {
        assert!(board.set(Position::new(x, y), Some(piece)));
    }

    #[test]
    fn opening_offers_seven_steps_to_each_side() {
        let state = GameState::new();
        assert_eq!(state.legal_moves(Player::Black).len(), 7);
        assert_eq!(state.legal_moves(Player::Red).len(), 7);
        assert!(!state.has_capture(Player::Black));
    }

    #[test]
    fn captures_hide_steps() {
        let mut board = Board::empty();
        place(&mut board, 1, 2, Piece::man(Player::Black));
        place(&mut board, 5, 2, Piece::man(Player::Black));
        place(&mut board, 2, 3, Piece::man(Player::Red));
        let state = GameState::from_parts(board, Player::Black);

        let moves = state.legal_moves(Player::Black);
        assert_eq!(moves.as_slice(), &[Move::from_coords(1, 2, 3, 4)]);
        assert!(state.has_capture(Player::Black));
    }

    #[test]
    fn men_only_move_forward_but_kings_do_not() {
        let mut board = Board::empty();
        place(&mut board, 3, 4, Piece::man(Player::Black));
        let man = GameState::from_parts(board.clone(), Player::Black);
        assert!(
            man.legal_moves(Player::Black)
                .iter()
                .all(|mv| mv.to.y == 5)
        );

        place(&mut board, 3, 4, Piece::king(Player::Black));
        let king = GameState::from_parts(board, Player::Black);
        assert_eq!(king.legal_moves(Player::Black).len(), 4);
    }

    #[test]
    fn blocked_side_has_no_legal_move() {
        let mut board = Board::empty();
        // Red man on its crowning row cannot move forward any further.
        place(&mut board, 1, 0, Piece::man(Player::Red));
        place(&mut board, 6, 7, Piece::man(Player::Black));
        let state = GameState::from_parts(board, Player::Red);
        assert!(!state.has_legal_move(Player::Red));
        assert!(state.legal_moves(Player::Red).is_empty());
    }

    #[test]
    fn cannot_jump_off_the_board() {
        let mut board = Board::empty();
        place(&mut board, 6, 5, Piece::man(Player::Black));
        place(&mut board, 7, 6, Piece::man(Player::Red));
        let state = GameState::from_parts(board, Player::Black);
        assert!(!state.has_capture(Player::Black));
    }
}
