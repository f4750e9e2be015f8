#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use runtime::repository::StoredGameRepository;
use runtime::{
    CreateGame, Event, EventKind, GameIndex, Identity, InMemoryEscrow, InMemoryEventLog,
    InMemoryStore, ManualClock, PlayMove, PlayMoveResponse, RejectGame, Result, Runtime,
    RuntimeConfig, StoredGame, Timestamp,
};

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const CAROL: &str = "carol";

/// Runtime wired to in-memory collaborators the test can inspect.
pub struct Harness {
    pub runtime: Runtime,
    pub store: Arc<InMemoryStore>,
    pub escrow: Arc<InMemoryEscrow>,
    pub clock: Arc<ManualClock>,
    pub events: Arc<InMemoryEventLog>,
}

pub fn start() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn id(name: &str) -> Identity {
    Identity::parse(name).unwrap()
}

pub fn harness() -> Harness {
    harness_with(RuntimeConfig::default())
}

pub fn harness_with(config: RuntimeConfig) -> Harness {
    let store = Arc::new(InMemoryStore::new());
    let escrow = Arc::new(InMemoryEscrow::new());
    let clock = Arc::new(ManualClock::new(start()));
    let events = Arc::new(InMemoryEventLog::new());
    let runtime = Runtime::builder()
        .config(config)
        .store(store.clone())
        .escrow(escrow.clone())
        .clock(clock.clone())
        .events(events.clone())
        .build()
        .expect("runtime builds");
    Harness {
        runtime,
        store,
        escrow,
        clock,
        events,
    }
}

impl Harness {
    /// Alice creates a game with Bob as black and Carol as red.
    pub fn create(&mut self, wager: u64) -> GameIndex {
        self.create_between(BOB, CAROL, wager)
    }

    pub fn create_between(&mut self, black: &str, red: &str, wager: u64) -> GameIndex {
        self.runtime
            .create_game(CreateGame {
                creator: ALICE.to_string(),
                black: black.to_string(),
                red: red.to_string(),
                wager,
                denom: String::new(),
            })
            .expect("game is created")
            .game_index
    }

    pub fn play(
        &mut self,
        who: &str,
        index: &GameIndex,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<PlayMoveResponse> {
        self.runtime.play_move(PlayMove {
            creator: who.to_string(),
            game_index: index.clone(),
            from_x: from.0,
            from_y: from.1,
            to_x: to.0,
            to_y: to.1,
        })
    }

    pub fn reject(&mut self, who: &str, index: &GameIndex) -> Result<()> {
        self.runtime.reject_game(RejectGame {
            creator: who.to_string(),
            game_index: index.clone(),
        })
    }

    pub fn game(&self, index: &GameIndex) -> StoredGame {
        self.runtime
            .stored_game(index)
            .unwrap()
            .expect("game is stored")
    }

    /// Overwrites the board and turn of a stored game.
    pub fn set_board(&self, index: &GameIndex, board: &str, turn: &str) {
        let mut game = self.game(index);
        game.board = board.to_string();
        game.turn = turn.to_string();
        self.store.save_game(&game).unwrap();
    }

    pub fn events_of(&self, kind: EventKind) -> Vec<Event> {
        self.events
            .get_all()
            .into_iter()
            .filter(|event| event.kind == kind)
            .collect()
    }
}

/// Black man on (2, 3) can jump the last red man on (3, 4).
pub const ONE_JUMP_TO_WIN: &str =
    "********|********|********|**b*****|***r****|********|********|********";
