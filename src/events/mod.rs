//! Event system: the observable trace of a game.
//!
//! ## Key Types
//!
//! - [`GameEvent`]: tagged-variant event, one variant per occurrence kind
//! - [`EventContext`]: ids and indices shared by every event
//! - [`EventSink`]: the single append-only interface the engines emit into
//! - [`EventLog`]: in-memory sink that keeps the full trace
//! - [`NullSink`]: sink that discards events (batch runs that only need
//!   summaries)
//!
//! ## Design Philosophy
//!
//! Each event kind carries its own strongly-typed field set rather than an
//! ad hoc key-value bag, so a trace can be replayed or audited without
//! guessing at schemas. Events are strictly additive: once recorded they are
//! never mutated or removed, except by an explicit whole-log
//! [`EventLog::clear`].
//!
//! There is deliberately no generic "move attempted" or "invalid move"
//! kind: every attempt resolves to [`TilesFlipped`](GameEvent::TilesFlipped)
//! or [`NoValidMoves`](GameEvent::NoValidMoves) before it is recorded, and
//! a strategy can only return combos the search produced, so an invalid
//! move is a panic (a bug), not an event.

pub mod event;
pub mod log;

pub use event::{EventContext, EventKind, GameEvent};
pub use log::{EventLog, EventSink, NullSink};
