//! # shutbox
//!
//! A Shut the Box simulation engine for batch strategy evaluation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every game owns a seeded RNG; there is no global
//!    random state, so seeded runs reproduce exactly and batches can be
//!    distributed without coordination.
//!
//! 2. **Exhaustive search, strategic choice**: the combo finder enumerates
//!    every valid move for a roll; strategies own only the tie-break
//!    ordering. This keeps strategies pure functions that are trivial to
//!    compare.
//!
//! 3. **Typed trace**: everything observable is a tagged event variant
//!    flowing through one append-only sink, so a game can be audited or
//!    replayed from its log.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `board`: the tile rack
//! - `dice`: rolls, the one-die rule, rng-backed and scripted sources
//! - `combos`: exhaustive subset search
//! - `strategy`: selection policies and the name registry
//! - `events`: typed events and sinks
//! - `engine`: turn state machine and game sequencing
//! - `sim`: batch runner and summary statistics

pub mod board;
pub mod combos;
pub mod core;
pub mod dice;
pub mod engine;
pub mod events;
pub mod sim;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, GameSpec, PlayerId, PlayerSpec, SimError};

pub use crate::board::{RackState, TileRack};

pub use crate::combos::{find_all, Combo};

pub use crate::dice::{dice_needed, DiceRoller, DiceSource, Roll, ScriptedDice};

pub use crate::strategy::{GreedyMax, MinTiles, Strategy, StrategyRegistry};

pub use crate::events::{EventContext, EventKind, EventLog, EventSink, GameEvent, NullSink};

pub use crate::engine::{
    run_game, GameEngine, GameOutcome, GameRecord, MoveRecord, TurnEngine, TurnPhase, TurnRecord,
};

pub use crate::sim::{BatchConfig, GameSummary, Simulation, SummaryStats};
