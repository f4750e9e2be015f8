//! Property tests over random legal playouts.

use checkers_core::{GameEngine, GameState, MoveError, Player, codec};
use proptest::prelude::*;

/// Plays up to `choices.len()` moves, each picked among the legal ones by
/// index. Returns every intermediate state, the initial one included.
fn playout(choices: &[usize]) -> (Vec<GameState>, Option<Player>) {
    let mut state = GameState::new();
    let mut states = vec![state.clone()];
    for &choice in choices {
        let mover = state.turn;
        let moves = state.legal_moves(mover);
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        let outcome = GameEngine::new(&mut state)
            .play(mover, mv)
            .expect("generated moves are legal");
        states.push(state.clone());
        if outcome.winner.is_some() {
            return (states, outcome.winner);
        }
    }
    (states, None)
}

proptest! {
    #[test]
    fn reachable_states_survive_the_codec(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let (states, _) = playout(&choices);
        for state in states {
            let encoded = codec::encode(&state);
            prop_assert_eq!(codec::decode(&encoded.board, &encoded.turn).unwrap(), state);
        }
    }

    #[test]
    fn turn_alternates_until_a_winner(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let (states, winner) = playout(&choices);
        let last = states.len() - 1;
        for (played, state) in states.iter().enumerate() {
            if winner.is_some() && played == last {
                prop_assert_eq!(Some(state.turn), winner);
            } else {
                let expected = if played % 2 == 0 { Player::Black } else { Player::Red };
                prop_assert_eq!(state.turn, expected);
            }
        }
    }

    #[test]
    fn steps_are_refused_while_a_capture_exists(choices in prop::collection::vec(any::<usize>(), 0..80)) {
        let (states, winner) = playout(&choices);
        let Some(state) = states.last() else { return Ok(()); };
        prop_assume!(winner.is_none());

        let mover = state.turn;
        if state.has_capture(mover) {
            for (from, piece) in state.board.pieces_of(mover) {
                for dx in [-1, 1] {
                    for dy in [-1, 1] {
                        if !piece.king && dy != mover.forward() {
                            continue;
                        }
                        let mv = checkers_core::Move::new(from, from.offset(dx, dy));
                        if mv.to.is_playable() && state.board.is_empty_at(mv.to) {
                            let mut probe = state.clone();
                            let err = GameEngine::new(&mut probe).play(mover, mv).unwrap_err();
                            prop_assert!(
                                matches!(err, MoveError::CaptureRequired { .. }),
                                "unexpected {:?}",
                                err
                            );
                            prop_assert_eq!(&probe, state);
                        }
                    }
                }
            }
        }
    }
}
