//! Immutable records of finished turns and games.

use serde::{Deserialize, Serialize};

use crate::combos::Combo;
use crate::core::PlayerId;
use crate::dice::Roll;

/// One move attempt inside a turn: the roll and what was flipped for it.
/// `combo: None` means the roll was a bust.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub roll: Roll,
    pub combo: Option<Combo>,
}

impl MoveRecord {
    /// True if this attempt ended the turn with no valid move.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.combo.is_none()
    }
}

/// A finished turn. Created at turn start, finalized at turn end,
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,

    /// Every move attempt in order, the last one a bust unless the box shut.
    pub moves: Vec<MoveRecord>,

    /// Sum of remaining tiles at turn end. Lower is better; 0 means shut.
    pub score: u32,

    /// True iff the rack emptied during this turn.
    pub shut: bool,
}

/// Result of a completed game.
///
/// A tie is an explicit outcome: with equal scores there is no winner to
/// pick, and the stats layer wants to count ties separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single player with the strictly lowest score.
    Winner(PlayerId),
    /// Lowest score shared by two or more players.
    Tie,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner(p) => Some(*p),
            GameOutcome::Tie => None,
        }
    }
}

/// A finished game: one turn record per player plus the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub sim_id: u64,
    pub game_id: u64,

    /// Turn records in play order (index = player index).
    pub turns: Vec<TurnRecord>,

    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Final scores in player order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.turns.iter().map(|t| t.score).collect()
    }

    /// A player's final score.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> u32 {
        self.turns[player.index()].score
    }

    /// True if any player shut the box.
    #[must_use]
    pub fn shut_achieved(&self) -> bool {
        self.turns.iter().any(|t| t.shut)
    }
}
