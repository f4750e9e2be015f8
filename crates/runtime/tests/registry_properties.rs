//! Registry invariants under random operation sequences.

mod common;

use std::collections::BTreeSet;

use chrono::Duration;
use checkers_core::Player;
use proptest::prelude::*;
use runtime::repository::StoredGameRepository;
use runtime::{GameIndex, StoredGame};

use common::*;

#[derive(Debug, Clone)]
enum Op {
    Create { black: usize, red: usize, wager: u64 },
    Play { game: usize, choice: usize },
    Reject { game: usize },
    Wait { minutes: i64 },
    Sweep,
}

const PLAYERS: [&str; 3] = [ALICE, BOB, CAROL];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..3usize, 0..3usize, 0..4u64).prop_map(|(black, red, wager)| Op::Create { black, red, wager }),
        6 => (any::<usize>(), any::<usize>()).prop_map(|(game, choice)| Op::Play { game, choice }),
        1 => any::<usize>().prop_map(|game| Op::Reject { game }),
        2 => (1..600i64).prop_map(|minutes| Op::Wait { minutes }),
        1 => Just(Op::Sweep),
    ]
}

fn stored_games(h: &Harness) -> Vec<StoredGame> {
    h.store
        .list_games()
        .unwrap()
        .iter()
        .map(|index| h.game(index))
        .collect()
}

fn apply(h: &mut Harness, op: &Op) {
    match *op {
        Op::Create { black, red, wager } => {
            h.create_between(PLAYERS[black], PLAYERS[red], wager);
        }
        Op::Play { game, choice } => {
            let live = h.runtime.live_games().unwrap();
            if live.is_empty() {
                return;
            }
            let stored = h.game(&live[game % live.len()]);
            let state = stored.parse_game().unwrap();
            let moves = state.legal_moves(state.turn);
            let mv = moves[choice % moves.len()];
            let who = stored.identity_of(state.turn).to_string();
            h.play(&who, &stored.index, (mv.from.x, mv.from.y), (mv.to.x, mv.to.y))
                .unwrap();
        }
        Op::Reject { game } => {
            let live = h.runtime.live_games().unwrap();
            if live.is_empty() {
                return;
            }
            let index = live[game % live.len()].clone();
            let moved = h.game(&index).move_count > 0;
            let result = h.reject(ALICE, &index);
            assert_eq!(result.is_err(), moved);
        }
        Op::Wait { minutes } => h.clock.advance(Duration::minutes(minutes * 10)),
        Op::Sweep => {
            h.runtime.forfeit_expired_games().unwrap();
        }
    }
}

fn check_invariants(h: &Harness) -> Result<(), TestCaseError> {
    let info = h.runtime.system_info().unwrap();
    let forward = h.runtime.live_games().unwrap();

    // Walking back from the tail gives the exact reverse.
    let mut backward = Vec::new();
    let mut cursor = info.fifo_tail_index.clone();
    while let Some(index) = cursor {
        let game = h.game(&index);
        cursor = game.before_index.clone();
        backward.push(index);
        prop_assert!(backward.len() <= forward.len());
    }
    backward.reverse();
    prop_assert_eq!(&backward, &forward);

    let chain: BTreeSet<GameIndex> = forward.iter().cloned().collect();
    prop_assert_eq!(chain.len(), forward.len());

    let games = stored_games(h);
    for game in &games {
        if game.winner.is_none() {
            prop_assert!(chain.contains(&game.index), "live game {} not linked", game.index);
        } else {
            prop_assert!(!chain.contains(&game.index));
            prop_assert_eq!(&game.before_index, &None);
            prop_assert_eq!(&game.after_index, &None);
        }
    }

    // Deadlines never decrease from head to tail.
    let deadlines: Vec<_> = forward.iter().map(|index| h.game(index).deadline).collect();
    prop_assert!(deadlines.windows(2).all(|pair| pair[0] <= pair[1]));

    // Turn parity holds for games nobody has won yet.
    for game in games.iter().filter(|game| game.winner.is_none()) {
        let state = game.parse_game().unwrap();
        let expected = if game.move_count % 2 == 0 { Player::Black } else { Player::Red };
        prop_assert_eq!(state.turn, expected);
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn registry_stays_a_simple_chain(ops in prop::collection::vec(op(), 1..80)) {
        let mut h = harness();
        for op in &ops {
            apply(&mut h, op);
            check_invariants(&h)?;
        }
    }
}
