//! Expiry registry: live games in deadline order.
//!
//! The registry is a doubly linked list threaded through storage. Each
//! [`StoredGame`] carries the index of its neighbours and [`SystemInfo`]
//! carries the head and tail. Games are always appended at the tail with a
//! deadline of `now + turn duration`, so walking from the head yields the
//! games closest to expiry first.
//!
//! The game being linked and the system info are held by the caller, who
//! stages them once the whole operation succeeded. Neighbours are loaded from
//! and written back to the [`StagedStore`]. A link to a missing game aborts
//! with [`RuntimeError::RegistryCorruption`] before anything is modified.

use std::collections::BTreeSet;

use crate::api::{Result, RuntimeError};
use crate::repository::{StagedStore, StoredGame, SystemInfo};
use crate::types::GameIndex;

fn load_neighbour(
    store: &StagedStore<'_>,
    index: &GameIndex,
    link: impl FnOnce() -> String,
) -> Result<StoredGame> {
    store
        .game(index)?
        .ok_or_else(|| RuntimeError::registry_corruption(link(), index))
}

/// Links `game` after the current tail.
pub fn append(
    store: &mut StagedStore<'_>,
    info: &mut SystemInfo,
    game: &mut StoredGame,
) -> Result<()> {
    match info.fifo_tail_index.clone() {
        None => {
            game.before_index = None;
            info.fifo_head_index = Some(game.index.clone());
        }
        Some(tail_index) => {
            let mut tail = load_neighbour(store, &tail_index, || "fifo tail".to_string())?;
            tail.after_index = Some(game.index.clone());
            store.put_game(tail);
            game.before_index = Some(tail_index);
        }
    }
    game.after_index = None;
    info.fifo_tail_index = Some(game.index.clone());
    Ok(())
}

/// Removes `game` from wherever it sits. A game that is not linked is left
/// untouched, so calling this twice is harmless.
pub fn unlink(
    store: &mut StagedStore<'_>,
    info: &mut SystemInfo,
    game: &mut StoredGame,
) -> Result<()> {
    let before = match &game.before_index {
        Some(index) => Some(load_neighbour(store, index, || {
            format!("game {} before", game.index)
        })?),
        None => None,
    };
    let after = match &game.after_index {
        Some(index) => Some(load_neighbour(store, index, || {
            format!("game {} after", game.index)
        })?),
        None => None,
    };

    if let Some(mut before) = before {
        before.after_index = game.after_index.clone();
        store.put_game(before);
    }
    if let Some(mut after) = after {
        after.before_index = game.before_index.clone();
        store.put_game(after);
    }
    if info.fifo_head_index.as_ref() == Some(&game.index) {
        info.fifo_head_index = game.after_index.clone();
    }
    if info.fifo_tail_index.as_ref() == Some(&game.index) {
        info.fifo_tail_index = game.before_index.clone();
    }

    game.before_index = None;
    game.after_index = None;
    Ok(())
}

/// Moves `game` to the tail, behind every other live game.
pub fn move_to_tail(
    store: &mut StagedStore<'_>,
    info: &mut SystemInfo,
    game: &mut StoredGame,
) -> Result<()> {
    unlink(store, info, game)?;
    append(store, info, game)
}

/// Indices from head to tail.
pub fn walk(store: &StagedStore<'_>, info: &SystemInfo) -> Result<Vec<GameIndex>> {
    follow(store, info.fifo_head_index.clone(), "fifo head", |game| {
        game.after_index.clone()
    })
}

/// Indices from tail to head.
pub fn walk_back(store: &StagedStore<'_>, info: &SystemInfo) -> Result<Vec<GameIndex>> {
    follow(store, info.fifo_tail_index.clone(), "fifo tail", |game| {
        game.before_index.clone()
    })
}

fn follow(
    store: &StagedStore<'_>,
    start: Option<GameIndex>,
    origin: &str,
    next: impl Fn(&StoredGame) -> Option<GameIndex>,
) -> Result<Vec<GameIndex>> {
    let mut seen = BTreeSet::new();
    let mut chain = Vec::new();
    let mut link = origin.to_string();
    let mut cursor = start;

    while let Some(index) = cursor {
        if !seen.insert(index.clone()) {
            return Err(RuntimeError::registry_corruption(
                format!("{link} (cycle)"),
                &index,
            ));
        }
        let game = load_neighbour(store, &index, || link.clone())?;
        link = format!("game {index} link");
        cursor = next(&game);
        chain.push(index);
    }

    Ok(chain)
}
