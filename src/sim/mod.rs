//! Batch simulation: many independent games, summarized.
//!
//! Each game in a batch owns its rack, records, and RNG; game `i` is seeded
//! with `base_seed + i`, so a batch is fully reproducible from one number
//! and games could be distributed across threads without shared state.
//! The batch runner discards per-move event traces (use
//! [`run_game`](crate::engine::run_game) with an [`EventLog`](crate::events::EventLog)
//! to capture one) and keeps a compact [`GameSummary`] per game for the
//! stats layer.

pub mod runner;
pub mod stats;

pub use runner::{BatchConfig, GameSummary, Simulation};
pub use stats::SummaryStats;
