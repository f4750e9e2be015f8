//! Handler for the expiry sweep that forfeits games past their deadline.

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventKind, keys};
use crate::registry;
use crate::runtime::Runtime;
use crate::settlement::{self, Outcome};
use crate::types::GameIndex;

use super::parse_state;

impl Runtime {
    /// Forfeits every live game whose deadline has passed.
    ///
    /// Scans from the registry head and stops at the first game still within
    /// its deadline. The side expected to move loses. Returns the forfeited
    /// indices in registry order.
    pub fn forfeit_expired_games(&mut self) -> Result<Vec<GameIndex>> {
        let result = self.try_forfeit_expired_games();
        self.report("forfeit_expired_games", result)
    }

    fn try_forfeit_expired_games(&self) -> Result<Vec<GameIndex>> {
        let mut operation = self.begin();
        let mut info = operation.system_info()?;
        let mut forfeited = Vec::new();

        while let Some(head_index) = info.fifo_head_index.clone() {
            let mut game = operation
                .stage
                .game(&head_index)?
                .ok_or_else(|| RuntimeError::registry_corruption("fifo head", &head_index))?;
            if game.deadline >= operation.now {
                break;
            }

            registry::unlink(&mut operation.stage, &mut info, &mut game)?;
            if !game.is_live() {
                tracing::warn!(game = %game.index, "finished game found in registry, unlinked");
                operation.stage.put_game(game);
                continue;
            }

            let loser = parse_state(&game)?.turn;
            let winner = loser.opponent();
            game.winner = Some(winner);
            let payout = settlement::settle(
                &mut operation.stage,
                &game,
                Outcome::Forfeit { loser },
                operation.now,
                self.config.leaderboard_capacity,
            )?;
            operation.transfer(payout);

            operation.emit(
                Event::new(EventKind::GameForfeited)
                    .with(keys::GAME_INDEX, &game.index)
                    .with(keys::WINNER, winner.marker())
                    .with(keys::BOARD, &game.board),
            );
            tracing::debug!(
                game = %game.index,
                winner = %winner,
                deadline = %game.deadline,
                now = %operation.now,
                "game expired"
            );
            operation.stage.put_game(game);
            forfeited.push(head_index);
        }

        if operation.stage.pending_writes() == 0 {
            return Ok(forfeited);
        }

        operation.stage.put_system_info(info);
        self.commit(operation)?;

        if !forfeited.is_empty() {
            tracing::info!(count = forfeited.len(), games = ?forfeited, "forfeited expired games");
        }
        Ok(forfeited)
    }
}
