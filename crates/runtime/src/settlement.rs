//! Settlement of finished games: payout, player statistics, leaderboard.
//!
//! Every write goes to the operation's [`StagedStore`] and the payout is
//! returned as a [`Transfer`] for the runtime to execute at commit, so a
//! settlement is either applied whole with its game or not at all.

use checkers_core::Player;

use crate::api::{Result, RuntimeError};
use crate::escrow::Transfer;
use crate::identity::Identity;
use crate::repository::{PlayerInfo, StagedStore, StoredGame, WinningPlayer};
use crate::types::Timestamp;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `winner` left the opponent without pieces or moves.
    Win { winner: Player },
    /// `loser` let the deadline pass.
    Forfeit { loser: Player },
}

impl Outcome {
    pub fn winner(self) -> Player {
        match self {
            Outcome::Win { winner } => winner,
            Outcome::Forfeit { loser } => loser.opponent(),
        }
    }

    pub fn loser(self) -> Player {
        self.winner().opponent()
    }

    pub fn is_forfeit(self) -> bool {
        matches!(self, Outcome::Forfeit { .. })
    }
}

/// Stages the settlement of `game` and returns the payout to execute, if any.
pub fn settle(
    store: &mut StagedStore<'_>,
    game: &StoredGame,
    outcome: Outcome,
    now: Timestamp,
    leaderboard_capacity: usize,
) -> Result<Option<Transfer>> {
    let winner = game.identity_of(outcome.winner()).clone();
    let loser = game.identity_of(outcome.loser()).clone();

    let payout = match game.pool() {
        Some(0) => None,
        Some(pool) => Some(Transfer::pay(winner.clone(), pool, game.denom.clone())),
        None => return Err(RuntimeError::WagerOverflow { wager: game.wager }),
    };

    let won_count = update_stats(store, &winner, |info| info.won_count += 1)?.won_count;
    update_stats(store, &loser, |info| {
        info.lost_count += 1;
        if outcome.is_forfeit() {
            info.forfeited_count += 1;
        }
    })?;

    let mut leaderboard = store.leaderboard()?.unwrap_or_default();
    leaderboard.add_candidate(
        WinningPlayer {
            player_address: winner.clone(),
            won_count,
            date_added: now,
        },
        leaderboard_capacity,
    );
    store.put_leaderboard(leaderboard);

    tracing::debug!(
        game = %game.index,
        winner = %winner,
        loser = %loser,
        forfeit = outcome.is_forfeit(),
        won_count,
        payout = ?payout.as_ref().map(|transfer| transfer.amount),
        "settled game"
    );

    Ok(payout)
}

fn update_stats(
    store: &mut StagedStore<'_>,
    player: &Identity,
    update: impl FnOnce(&mut PlayerInfo),
) -> Result<PlayerInfo> {
    let mut info = store
        .player_info(player)?
        .unwrap_or_else(|| PlayerInfo::new(player.clone()));
    update(&mut info);
    store.put_player_info(info.clone());
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryStore, LeaderboardRepository, PlayerInfoRepository};
    use crate::types::GameIndex;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn id(name: &str) -> Identity {
        Identity::parse(name).unwrap()
    }

    fn game(index: u64, black: &str, red: &str, wager: u64) -> StoredGame {
        StoredGame::new(
            GameIndex::from_id(index),
            id("carol"),
            id(black),
            id(red),
            wager,
            "stake".to_string(),
            now(),
        )
    }

    #[test]
    fn win_pays_the_pool_and_counts() {
        let store = InMemoryStore::new();
        let mut stage = StagedStore::new(&store);

        let payout = settle(
            &mut stage,
            &game(1, "alice", "bob", 7),
            Outcome::Win {
                winner: Player::Red,
            },
            now(),
            10,
        )
        .unwrap();

        assert_eq!(payout, Some(Transfer::pay(id("bob"), 14, "stake")));
        let bob = stage.player_info(&id("bob")).unwrap().unwrap();
        let alice = stage.player_info(&id("alice")).unwrap().unwrap();
        assert_eq!((bob.won_count, bob.lost_count, bob.forfeited_count), (1, 0, 0));
        assert_eq!((alice.won_count, alice.lost_count, alice.forfeited_count), (0, 1, 0));

        let leaderboard = stage.leaderboard().unwrap().unwrap();
        assert_eq!(leaderboard.winners.len(), 1);
        assert_eq!(leaderboard.winners[0].player_address, id("bob"));
        assert_eq!(leaderboard.winners[0].date_added, now());
    }

    #[test]
    fn forfeit_counts_against_the_loser() {
        let store = InMemoryStore::new();
        let mut stage = StagedStore::new(&store);

        let outcome = Outcome::Forfeit {
            loser: Player::Black,
        };
        assert_eq!(outcome.winner(), Player::Red);
        settle(&mut stage, &game(1, "alice", "bob", 0), outcome, now(), 10).unwrap();

        let alice = stage.player_info(&id("alice")).unwrap().unwrap();
        assert_eq!((alice.won_count, alice.lost_count, alice.forfeited_count), (0, 1, 1));
        assert_eq!(stage.player_info(&id("bob")).unwrap().unwrap().won_count, 1);
    }

    #[test]
    fn zero_wager_pays_nothing() {
        let store = InMemoryStore::new();
        let mut stage = StagedStore::new(&store);
        let payout = settle(
            &mut stage,
            &game(1, "alice", "bob", 0),
            Outcome::Win {
                winner: Player::Black,
            },
            now(),
            10,
        )
        .unwrap();
        assert_eq!(payout, None);
    }

    #[test]
    fn repeated_wins_refresh_one_leaderboard_entry() {
        let store = InMemoryStore::new();
        let mut stage = StagedStore::new(&store);
        let win = Outcome::Win {
            winner: Player::Black,
        };

        settle(&mut stage, &game(1, "alice", "bob", 0), win, now(), 10).unwrap();
        let later = now() + Duration::hours(1);
        settle(&mut stage, &game(2, "alice", "carol", 0), win, later, 10).unwrap();

        let leaderboard = stage.leaderboard().unwrap().unwrap();
        assert_eq!(leaderboard.winners.len(), 1);
        assert_eq!(leaderboard.winners[0].won_count, 2);
        assert_eq!(leaderboard.winners[0].date_added, later);
    }

    #[test]
    fn nothing_reaches_the_store_before_commit() {
        let store = InMemoryStore::new();
        {
            let mut stage = StagedStore::new(&store);
            settle(
                &mut stage,
                &game(1, "alice", "bob", 3),
                Outcome::Win {
                    winner: Player::Black,
                },
                now(),
                10,
            )
            .unwrap();
        }
        assert!(store.load_player_info(&id("alice")).unwrap().is_none());
        assert!(store.load_leaderboard().unwrap().is_none());
    }

    #[test]
    fn self_play_counts_both_sides() {
        let store = InMemoryStore::new();
        let mut stage = StagedStore::new(&store);
        settle(
            &mut stage,
            &game(1, "alice", "alice", 0),
            Outcome::Win {
                winner: Player::Black,
            },
            now(),
            10,
        )
        .unwrap();
        let alice = stage.player_info(&id("alice")).unwrap().unwrap();
        assert_eq!((alice.won_count, alice.lost_count), (1, 1));
    }
}
