//! Handler for game creation.

use crate::api::{CreateGame, CreateGameResponse, Result, RuntimeError};
use crate::events::{Event, EventKind, keys};
use crate::registry;
use crate::repository::StoredGame;
use crate::runtime::Runtime;

use super::parse_identity;

impl Runtime {
    /// Creates a game between `black` and `red`, appended at the registry
    /// tail with a fresh deadline. Black moves first.
    pub fn create_game(&mut self, request: CreateGame) -> Result<CreateGameResponse> {
        let result = self.try_create_game(request);
        self.report("create_game", result)
    }

    fn try_create_game(&self, request: CreateGame) -> Result<CreateGameResponse> {
        let creator = parse_identity(&request.creator)?;
        let black = parse_identity(&request.black)?;
        let red = parse_identity(&request.red)?;
        if request.wager.checked_mul(2).is_none() {
            return Err(RuntimeError::WagerOverflow {
                wager: request.wager,
            });
        }
        let denom = if request.denom.is_empty() {
            self.config.default_denom.clone()
        } else {
            request.denom
        };

        let mut operation = self.begin();
        let mut info = operation.system_info()?;
        let index = info.mint_index();
        let deadline = operation.now + self.config.turn_duration;

        let mut game = StoredGame::new(
            index.clone(),
            creator,
            black,
            red,
            request.wager,
            denom,
            deadline,
        );
        registry::append(&mut operation.stage, &mut info, &mut game)?;

        operation.emit(
            Event::new(EventKind::NewGameCreated)
                .with(keys::CREATOR, &game.creator)
                .with(keys::GAME_INDEX, &game.index)
                .with(keys::BLACK, &game.black)
                .with(keys::RED, &game.red)
                .with(keys::WAGER, game.wager)
                .with(keys::DENOM, &game.denom),
        );
        operation.stage.put_game(game.clone());
        operation.stage.put_system_info(info);
        self.commit(operation)?;

        tracing::info!(
            game = %game.index,
            creator = %game.creator,
            black = %game.black,
            red = %game.red,
            wager = game.wager,
            denom = %game.denom,
            deadline = %game.deadline,
            "game created"
        );

        Ok(CreateGameResponse { game_index: index })
    }
}
