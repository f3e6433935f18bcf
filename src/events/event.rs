//! Game event types.
//!
//! Events record the observable occurrences of a game - rolls, flips,
//! busts, turn and game boundaries - with enough context to reconstruct
//! the full trace: simulation id, game id, turn and move indices, and
//! before/after tile state where tiles change.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::combos::Combo;
use crate::core::PlayerId;
use crate::dice::Roll;
use crate::engine::GameOutcome;

/// Discriminant of a [`GameEvent`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    GameStart,
    DiceRoll,
    TilesFlipped,
    NoValidMoves,
    TurnEnd,
    GameEnd,
}

/// Context fields shared by every event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    /// Seconds since the UNIX epoch at emission time.
    pub timestamp: f64,

    pub sim_id: u64,
    pub game_id: u64,

    /// The player the event concerns. `None` for game-scoped events.
    pub player: Option<PlayerId>,

    /// Turn index within the game.
    pub turn_idx: Option<u8>,

    /// Move attempt index within the turn.
    pub move_idx: Option<u32>,
}

impl EventContext {
    /// Create a game-scoped context stamped with the current time.
    #[must_use]
    pub fn new(sim_id: u64, game_id: u64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self {
            timestamp,
            sim_id,
            game_id,
            player: None,
            turn_idx: None,
            move_idx: None,
        }
    }

    /// Attach a player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }

    /// Attach a turn index (builder pattern).
    #[must_use]
    pub fn with_turn(mut self, turn_idx: u8) -> Self {
        self.turn_idx = Some(turn_idx);
        self
    }

    /// Attach a move index (builder pattern).
    #[must_use]
    pub fn with_move(mut self, move_idx: u32) -> Self {
        self.move_idx = Some(move_idx);
        self
    }
}

/// One observable occurrence in a game.
///
/// Serializes with an `event_type` tag (`game_start`, `dice_roll`, ...)
/// so flat exports stay self-describing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A game began: roster, board size, and the dice count the opening
    /// board actually calls for.
    GameStart {
        context: EventContext,
        players: Vec<String>,
        tile_count: u8,
        num_dice: u8,
    },

    /// Dice were rolled against the given board.
    DiceRoll {
        context: EventContext,
        roll: Roll,
        tiles_up: Vec<u8>,
    },

    /// A strategy chose a combo and the tiles came down.
    TilesFlipped {
        context: EventContext,
        strategy: String,
        roll_total: u32,
        combo: Combo,
        tiles_before: Vec<u8>,
        tiles_after: Vec<u8>,
    },

    /// No subset of the up tiles matched the roll total: a bust, ending
    /// the turn. Expected and normal, not an error.
    NoValidMoves {
        context: EventContext,
        strategy: String,
        roll_total: u32,
        tiles_up: Vec<u8>,
    },

    /// A turn finished, by bust or shut.
    TurnEnd {
        context: EventContext,
        final_tiles: Vec<u8>,
        score: u32,
        shut: bool,
    },

    /// A game finished.
    GameEnd {
        context: EventContext,
        outcome: GameOutcome,
        scores: Vec<u32>,
    },
}

impl GameEvent {
    /// This event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameStart { .. } => EventKind::GameStart,
            GameEvent::DiceRoll { .. } => EventKind::DiceRoll,
            GameEvent::TilesFlipped { .. } => EventKind::TilesFlipped,
            GameEvent::NoValidMoves { .. } => EventKind::NoValidMoves,
            GameEvent::TurnEnd { .. } => EventKind::TurnEnd,
            GameEvent::GameEnd { .. } => EventKind::GameEnd,
        }
    }

    /// The shared context of this event.
    #[must_use]
    pub fn context(&self) -> &EventContext {
        match self {
            GameEvent::GameStart { context, .. }
            | GameEvent::DiceRoll { context, .. }
            | GameEvent::TilesFlipped { context, .. }
            | GameEvent::NoValidMoves { context, .. }
            | GameEvent::TurnEnd { context, .. }
            | GameEvent::GameEnd { context, .. } => context,
        }
    }
}
