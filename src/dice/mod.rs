//! Dice rolling.
//!
//! ## Key Types
//!
//! - `Roll`: an ephemeral one- or two-die result
//! - `DiceSource`: trait seam between the turn engine and its entropy
//! - `DiceRoller`: rng-backed source following the one-die rule
//! - `ScriptedDice`: replays a fixed roll sequence, for tests and traces
//!
//! ## The one-die rule
//!
//! A player may roll a single die only once the high tiles (7, 8, 9) are all
//! down. The rule is evaluated fresh on every roll because tile state changes
//! between rolls within a turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TileRack;
use crate::core::GameRng;

/// Tiles that force a two-die roll while any of them is up.
pub const HIGH_TILES: [u8; 3] = [7, 8, 9];

/// Number of dice the rack currently calls for: 1 if all high tiles are
/// down, 2 otherwise.
#[must_use]
pub fn dice_needed(rack: &TileRack) -> u8 {
    if HIGH_TILES.iter().any(|&t| rack.contains(t)) {
        2
    } else {
        1
    }
}

/// One roll of the dice. Recreated for every move, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    values: SmallVec<[u8; 2]>,
}

impl Roll {
    /// Create a roll from die values.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: SmallVec<[u8; 2]> = values.into_iter().collect();
        debug_assert!(
            (1..=2).contains(&values.len()),
            "a roll holds one or two dice"
        );
        Self { values }
    }

    /// The individual die values, in the order rolled.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of dice rolled.
    #[must_use]
    pub fn die_count(&self) -> u8 {
        self.values.len() as u8
    }

    /// Sum of the die values.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Source of dice rolls for a turn.
///
/// The engine asks the source for a roll given the current rack, so
/// implementations can apply the one-die rule (or ignore it, as the
/// scripted source does when replaying a fixed trace).
pub trait DiceSource {
    fn roll(&mut self, rack: &TileRack) -> Roll;
}

/// Rng-backed dice, owned by one game instance.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    faces: u8,
    rng: GameRng,
}

impl DiceRoller {
    /// Create a roller with the given die faces and game rng.
    #[must_use]
    pub fn new(faces: u8, rng: GameRng) -> Self {
        Self { faces, rng }
    }

    /// Faces per die.
    #[must_use]
    pub fn faces(&self) -> u8 {
        self.faces
    }
}

impl DiceSource for DiceRoller {
    fn roll(&mut self, rack: &TileRack) -> Roll {
        let count = dice_needed(rack);
        Roll::new((0..count).map(|_| self.rng.roll_die(self.faces)))
    }
}

/// Replays a predetermined sequence of rolls.
///
/// Ignores the rack entirely: the scripted values are taken as ground truth,
/// which lets tests drive the turn engine through exact scenarios.
///
/// Panics when the script runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<Roll>,
    next: usize,
}

impl ScriptedDice {
    /// Create a scripted source from roll value sequences.
    ///
    /// ```
    /// use shutbox::dice::ScriptedDice;
    ///
    /// let dice = ScriptedDice::new(vec![vec![3, 4], vec![6]]);
    /// assert_eq!(dice.remaining_rolls(), 2);
    /// ```
    #[must_use]
    pub fn new(rolls: Vec<Vec<u8>>) -> Self {
        Self {
            rolls: rolls.into_iter().map(Roll::new).collect(),
            next: 0,
        }
    }

    /// Rolls left in the script.
    #[must_use]
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len() - self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, _rack: &TileRack) -> Roll {
        let roll = self
            .rolls
            .get(self.next)
            .expect("scripted dice exhausted")
            .clone();
        self.next += 1;
        roll
    }
}
