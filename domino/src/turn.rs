use tracing::debug;

use crate::{
    resolve_side, Command, Decision, Game, GameStatus, Hand, IllegalMove, Participant, PipPressure,
    Stock, Strategy, TurnAction, TurnOutcome,
};

fn draw_or_pass(stock: &mut Stock, hand: &mut Hand) -> TurnAction {
    match stock.draw() {
        Some(tile) => {
            hand.push(tile);
            TurnAction::Drew { tile }
        }
        None => TurnAction::Passed,
    }
}

impl Game {
    /// Applies the player's command.
    ///
    /// A tile must fit the end the command names. Drawing is always allowed,
    /// even when a tile would fit.
    pub fn play_player_turn(&mut self, command: Command) -> Result<TurnOutcome, IllegalMove> {
        if self.status != GameStatus::AwaitingPlayerMove {
            return Err(IllegalMove::NotPlayersTurn {
                status: self.status,
            });
        }
        let action = match command {
            Command::Play { index, side } => {
                let tile = self.player.get(index).ok_or(IllegalMove::IndexOutOfRange {
                    index,
                    hand_size: self.player.len(),
                })?;
                let placement = resolve_side(tile, self.chain.open_ends(), side)
                    .ok_or(IllegalMove::IllegalAttachment { tile, side })?;
                self.player.remove(index);
                placement.apply(&mut self.chain, tile);
                TurnAction::Played { tile, placement }
            }
            Command::DrawOrPass => draw_or_pass(&mut self.stock, &mut self.player),
        };
        Ok(self.finish_turn(Participant::Player, action))
    }

    /// Lets the computer play its turn with the [`PipPressure`] heuristic.
    pub fn play_opponent_turn(&mut self) -> Result<TurnOutcome, IllegalMove> {
        self.play_opponent_turn_with(&PipPressure)
    }

    /// Lets the computer play its turn with the given strategy.
    ///
    /// A decision that does not match the hand or the chain is rejected like
    /// an illegal player command.
    pub fn play_opponent_turn_with<S: Strategy + ?Sized>(
        &mut self,
        strategy: &S,
    ) -> Result<TurnOutcome, IllegalMove> {
        if self.status != GameStatus::AwaitingOpponentMove {
            return Err(IllegalMove::NotOpponentsTurn {
                status: self.status,
            });
        }
        let action = match strategy.decide(&self.opponent, &self.chain) {
            Decision::Play { index, placement } => {
                let tile = self.opponent.get(index).ok_or(IllegalMove::IndexOutOfRange {
                    index,
                    hand_size: self.opponent.len(),
                })?;
                if resolve_side(tile, self.chain.open_ends(), placement.side) != Some(placement) {
                    return Err(IllegalMove::IllegalAttachment {
                        tile,
                        side: placement.side,
                    });
                }
                self.opponent.remove(index);
                placement.apply(&mut self.chain, tile);
                TurnAction::Played { tile, placement }
            }
            Decision::DrawOrPass => draw_or_pass(&mut self.stock, &mut self.opponent),
        };
        Ok(self.finish_turn(Participant::Opponent, action))
    }

    fn finish_turn(&mut self, participant: Participant, action: TurnAction) -> TurnOutcome {
        if action == TurnAction::Passed {
            self.consecutive_passes += 1;
        } else {
            self.consecutive_passes = 0;
        }
        self.status = self.terminal_status().unwrap_or(match participant {
            Participant::Player => GameStatus::AwaitingOpponentMove,
            Participant::Opponent => GameStatus::AwaitingPlayerMove,
        });
        debug!(?participant, ?action, status = ?self.status, "Turn played");
        TurnOutcome {
            action,
            status: self.status,
        }
    }
}
