use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::types::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningPlayer {
    pub player_address: Identity,
    pub won_count: u64,
    /// Time of this player's latest leaderboard update.
    pub date_added: Timestamp,
}

impl WinningPlayer {
    /// Ranking order: more wins first, then the earlier update.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .won_count
            .cmp(&self.won_count)
            .then(self.date_added.cmp(&other.date_added))
    }
}

/// Singleton ranking of winners, bounded by the runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub winners: Vec<WinningPlayer>,
}

impl Leaderboard {
    /// Inserts or replaces the candidate's entry, re-ranks and drops whatever
    /// falls past `capacity`.
    pub fn add_candidate(&mut self, candidate: WinningPlayer, capacity: usize) {
        self.winners
            .retain(|entry| entry.player_address != candidate.player_address);
        self.winners.push(candidate);
        // Stable, so equal ranks keep their previous relative order.
        self.winners.sort_by(WinningPlayer::rank);
        self.winners.truncate(capacity);
    }

    pub fn entry(&self, player: &Identity) -> Option<&WinningPlayer> {
        self.winners
            .iter()
            .find(|entry| &entry.player_address == player)
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }
}
