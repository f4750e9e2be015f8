//! Handler for submitted moves, including wins and their settlement.

use checkers_core::GameEngine;

use crate::api::{PlayMove, PlayMoveResponse, Result, RuntimeError};
use crate::events::{Event, EventKind, keys};
use crate::registry;
use crate::runtime::Runtime;
use crate::settlement::{self, Outcome};

use super::{load_game, parse_identity, parse_state};

impl Runtime {
    /// Plays one move for the requesting player.
    ///
    /// A live move refreshes the deadline and moves the game to the registry
    /// tail. A winning move unlinks the game and settles it.
    pub fn play_move(&mut self, request: PlayMove) -> Result<PlayMoveResponse> {
        let result = self.try_play_move(request);
        self.report("play_move", result)
    }

    fn try_play_move(&self, request: PlayMove) -> Result<PlayMoveResponse> {
        let creator = parse_identity(&request.creator)?;

        let mut operation = self.begin();
        let mut game = load_game(&operation.stage, &request.game_index)?;
        if !game.is_live() {
            return Err(RuntimeError::AlreadyFinished { index: game.index });
        }

        let mut state = parse_state(&game)?;
        let player = game
            .player_of(&creator, state.turn)
            .ok_or_else(|| RuntimeError::NotAPlayer {
                who: creator.clone(),
            })?;
        if !state.turn_is(player) {
            return Err(RuntimeError::NotYourTurn { player });
        }

        let mv = request.mv();
        let outcome = GameEngine::new(&mut state).play(player, mv)?;

        let mut info = operation.system_info()?;
        game.store_game(&state);
        game.move_count += 1;
        game.deadline = operation.now + self.config.turn_duration;

        match outcome.winner {
            None => registry::move_to_tail(&mut operation.stage, &mut info, &mut game)?,
            Some(winner) => {
                registry::unlink(&mut operation.stage, &mut info, &mut game)?;
                game.winner = Some(winner);
                let payout = settlement::settle(
                    &mut operation.stage,
                    &game,
                    Outcome::Win { winner },
                    operation.now,
                    self.config.leaderboard_capacity,
                )?;
                operation.transfer(payout);
            }
        }

        let response = PlayMoveResponse::new(outcome.captured, outcome.winner);
        let mut event = Event::new(EventKind::MovePlayed)
            .with(keys::CREATOR, &creator)
            .with(keys::GAME_INDEX, &game.index)
            .with(keys::CAPTURED_X, response.captured_x)
            .with(keys::CAPTURED_Y, response.captured_y)
            .with(keys::WINNER, &response.winner);
        if outcome.winner.is_some() {
            event = event.with(keys::BOARD, &game.board);
        }
        operation.emit(event);

        operation.stage.put_game(game.clone());
        operation.stage.put_system_info(info);
        self.commit(operation)?;

        tracing::info!(
            game = %game.index,
            player = %player,
            mv = %mv,
            captured = ?outcome.captured,
            promoted = outcome.promoted,
            move_count = game.move_count,
            "move played"
        );
        if let Some(winner) = outcome.winner {
            tracing::info!(
                game = %game.index,
                winner = %winner,
                board = %game.board,
                "game won"
            );
        }

        Ok(response)
    }
}
