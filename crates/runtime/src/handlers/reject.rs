//! Handler for rejecting a game before its first move.

use checkers_core::Player;

use crate::api::{RejectGame, Result, RuntimeError};
use crate::escrow::Transfer;
use crate::events::{Event, EventKind, keys};
use crate::registry;
use crate::runtime::Runtime;

use super::{load_game, parse_identity};

impl Runtime {
    /// Cancels a game nobody has moved in yet, refunds the pool to the
    /// creator and deletes the record.
    pub fn reject_game(&mut self, request: RejectGame) -> Result<()> {
        let result = self.try_reject_game(request);
        self.report("reject_game", result)
    }

    fn try_reject_game(&self, request: RejectGame) -> Result<()> {
        let requester = parse_identity(&request.creator)?;

        let mut operation = self.begin();
        let mut game = load_game(&operation.stage, &request.game_index)?;
        if !game.is_live() {
            return Err(RuntimeError::AlreadyFinished { index: game.index });
        }
        if !game.involves(&requester) {
            return Err(RuntimeError::NotAPlayer { who: requester });
        }
        if game.move_count > 0 {
            // Black always moves first.
            return Err(RuntimeError::AlreadyPlayed {
                index: game.index,
                player: Player::Black,
            });
        }

        let pool = game.pool().ok_or(RuntimeError::WagerOverflow { wager: game.wager })?;
        if pool > 0 {
            operation.transfer(Some(Transfer::refund(
                game.creator.clone(),
                pool,
                game.denom.clone(),
            )));
        }

        let mut info = operation.system_info()?;
        registry::unlink(&mut operation.stage, &mut info, &mut game)?;
        operation.stage.remove_game(&game.index);
        operation.stage.put_system_info(info);
        operation.emit(
            Event::new(EventKind::GameRejected)
                .with(keys::CREATOR, &requester)
                .with(keys::GAME_INDEX, &game.index),
        );
        self.commit(operation)?;

        tracing::info!(
            game = %game.index,
            requester = %requester,
            refund = pool,
            "game rejected"
        );
        Ok(())
    }
}
