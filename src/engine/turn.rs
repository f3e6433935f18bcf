//! The turn engine: drives one player's turn to completion.
//!
//! ## State machine
//!
//! ```text
//! Rolling -> Searching -> Applying -> Rolling -> ...
//!                      \-> Busted            \-> Shut
//! ```
//!
//! Each cycle rolls the dice, searches the up tiles for combos matching the
//! total, and asks the strategy to pick one. No combo means a bust, ending
//! the turn with the remaining sum as the score. Applying a combo that
//! empties the rack shuts the box, ending the turn with score 0. Either way
//! the engine reaches `Done` and the finished turn is immutable.
//!
//! A bust is the expected way for most turns to end; there are no retries.

use tracing::debug;

use crate::board::TileRack;
use crate::dice::DiceSource;
use crate::events::{EventContext, EventSink, GameEvent};
use crate::strategy::Strategy;

use super::{MoveRecord, TurnRecord};
use crate::core::PlayerId;

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Asking the dice source for a roll.
    Rolling,
    /// Searching combos and consulting the strategy.
    Searching,
    /// Removing the chosen combo from the rack.
    Applying,
    /// No valid move existed; the turn is over.
    Busted,
    /// The rack emptied; the turn is over with score 0.
    Shut,
    /// Terminal. The turn record is final.
    Done,
}

/// Drives a single player's turn against a rack, a dice source, and a
/// strategy, emitting events as it goes.
pub struct TurnEngine<'a> {
    player: PlayerId,
    strategy: &'a dyn Strategy,
    rack: &'a mut TileRack,
    dice: &'a mut dyn DiceSource,
    sink: &'a mut dyn EventSink,
    sim_id: u64,
    game_id: u64,
    turn_idx: u8,
    phase: TurnPhase,
}

impl<'a> TurnEngine<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player: PlayerId,
        strategy: &'a dyn Strategy,
        rack: &'a mut TileRack,
        dice: &'a mut dyn DiceSource,
        sink: &'a mut dyn EventSink,
        sim_id: u64,
        game_id: u64,
        turn_idx: u8,
    ) -> Self {
        Self {
            player,
            strategy,
            rack,
            dice,
            sink,
            sim_id,
            game_id,
            turn_idx,
            phase: TurnPhase::Rolling,
        }
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    fn context(&self, move_idx: u32) -> EventContext {
        EventContext::new(self.sim_id, self.game_id)
            .with_player(self.player)
            .with_turn(self.turn_idx)
            .with_move(move_idx)
    }

    /// Run the turn to completion and return its record.
    ///
    /// An empty rack at turn start is a valid instant shut with score 0.
    pub fn play(mut self) -> TurnRecord {
        let mut moves: Vec<MoveRecord> = Vec::new();
        let mut move_idx: u32 = 0;

        let shut = loop {
            if self.rack.is_shut() {
                self.phase = TurnPhase::Shut;
                break true;
            }

            self.phase = TurnPhase::Rolling;
            let roll = self.dice.roll(self.rack);
            let tiles_up = self.rack.remaining();
            self.sink.record(GameEvent::DiceRoll {
                context: self.context(move_idx),
                roll: roll.clone(),
                tiles_up: tiles_up.to_vec(),
            });

            self.phase = TurnPhase::Searching;
            let total = roll.total();
            match self.strategy.select(total, &tiles_up) {
                None => {
                    self.phase = TurnPhase::Busted;
                    debug!(player = %self.player, total, "no valid move, turn over");
                    self.sink.record(GameEvent::NoValidMoves {
                        context: self.context(move_idx),
                        strategy: self.strategy.name().to_string(),
                        roll_total: total,
                        tiles_up: tiles_up.to_vec(),
                    });
                    moves.push(MoveRecord { roll, combo: None });
                    break false;
                }
                Some(combo) => {
                    self.phase = TurnPhase::Applying;
                    debug_assert_eq!(combo.sum(), total, "strategy returned a bad combo");

                    // Panics if the combo holds a down tile: a bug in the
                    // strategy/search interaction, not a game state.
                    self.rack.flip(combo.tiles());

                    let tiles_after = self.rack.remaining();
                    debug!(player = %self.player, %combo, total, "tiles flipped");
                    self.sink.record(GameEvent::TilesFlipped {
                        context: self.context(move_idx),
                        strategy: self.strategy.name().to_string(),
                        roll_total: total,
                        combo: combo.clone(),
                        tiles_before: tiles_up.to_vec(),
                        tiles_after: tiles_after.to_vec(),
                    });
                    moves.push(MoveRecord {
                        roll,
                        combo: Some(combo),
                    });
                    move_idx += 1;

                    if self.rack.is_shut() {
                        self.phase = TurnPhase::Shut;
                        break true;
                    }
                }
            }
        };

        let score = self.rack.score();
        self.phase = TurnPhase::Done;
        self.sink.record(GameEvent::TurnEnd {
            context: EventContext::new(self.sim_id, self.game_id)
                .with_player(self.player)
                .with_turn(self.turn_idx),
            final_tiles: self.rack.remaining().to_vec(),
            score,
            shut,
        });
        debug!(player = %self.player, score, shut, "turn over");

        TurnRecord {
            player: self.player,
            moves,
            score,
            shut,
        }
    }
}
