use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Lifetime statistics of one identity, created on its first finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub index: Identity,
    pub won_count: u64,
    pub lost_count: u64,
    pub forfeited_count: u64,
}

impl PlayerInfo {
    pub fn new(index: Identity) -> Self {
        Self {
            index,
            won_count: 0,
            lost_count: 0,
            forfeited_count: 0,
        }
    }
}
