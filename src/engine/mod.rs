//! Turn and game engines.
//!
//! ## Key Types
//!
//! - `TurnEngine`/`TurnPhase`: one player's turn as an explicit state machine
//! - `GameEngine`/`run_game`: a full game, turn by turn, outcome settled
//! - `TurnRecord`/`GameRecord`/`GameOutcome`: immutable results
//!
//! Control flow: `GameEngine` -> `TurnEngine` (per player) -> dice ->
//! combo search -> strategy -> rack mutation -> event emission, looping
//! until bust or shut.

pub mod game;
pub mod records;
pub mod turn;

pub use game::{run_game, GameEngine};
pub use records::{GameOutcome, GameRecord, MoveRecord, TurnRecord};
pub use turn::{TurnEngine, TurnPhase};
