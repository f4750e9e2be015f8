use serde::{Deserialize, Serialize};

use crate::types::GameIndex;

/// Singleton counter record: next game id plus the expiry registry endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub next_id: u64,
    pub fifo_head_index: Option<GameIndex>,
    pub fifo_tail_index: Option<GameIndex>,
}

impl SystemInfo {
    pub const FIRST_ID: u64 = 1;

    /// Mints the index of the next game and advances the counter.
    pub fn mint_index(&mut self) -> GameIndex {
        let index = GameIndex::from_id(self.next_id);
        self.next_id += 1;
        index
    }

    pub fn registry_is_empty(&self) -> bool {
        self.fifo_head_index.is_none() && self.fifo_tail_index.is_none()
    }
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            next_id: Self::FIRST_ID,
            fifo_head_index: None,
            fifo_tail_index: None,
        }
    }
}
