//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks shared by the board,
//! dice, and engine layers. Game structure (tile count, die faces, player
//! roster) is configured via `GameSpec` rather than hardcoded.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameSpec, PlayerSpec, DEFAULT_DIE_FACES, DEFAULT_TILE_COUNT, MAX_TILE_COUNT};
pub use error::SimError;
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
