//! Board state: the tile rack.
//!
//! ## Key Types
//!
//! - `TileRack`: the set of tiles still up, backed by a bitmask
//! - `RackState`: serializable snapshot for logging and reconstruction

pub mod rack;

pub use rack::{RackState, TileRack};
