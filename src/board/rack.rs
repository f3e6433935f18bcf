//! The tile rack: which tiles are still up.
//!
//! A rack starts with tiles `1..=N` up (default N=9) and only ever loses
//! tiles, except through an explicit [`TileRack::reset`]. It is owned by one
//! game at a time and mutated only by the turn engine applying a validated
//! combo. Flipping a tile that is not up is an internal-consistency bug and
//! panics.
//!
//! Backed by a bitmask, so N is capped at 16 (`MAX_TILE_COUNT`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::MAX_TILE_COUNT;

/// The set of numbered tiles still up in one game.
///
/// ## Example
///
/// ```
/// use shutbox::board::TileRack;
///
/// let mut rack = TileRack::new(9);
/// assert_eq!(rack.score(), 45);
///
/// rack.flip(&[2, 3]);
/// assert_eq!(rack.score(), 40);
/// assert!(!rack.contains(3));
/// assert!(!rack.is_shut());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileRack {
    /// Bit `i` set means tile `i + 1` is up.
    bits: u16,
    tile_count: u8,
}

impl TileRack {
    /// Create a rack with tiles `1..=tile_count` all up.
    ///
    /// Panics if `tile_count` is 0 or above `MAX_TILE_COUNT`; `GameSpec`
    /// validation rejects such values before a rack is ever built.
    #[must_use]
    pub fn new(tile_count: u8) -> Self {
        assert!(
            (1..=MAX_TILE_COUNT).contains(&tile_count),
            "tile count must be 1..={MAX_TILE_COUNT}, got {tile_count}"
        );
        Self {
            bits: Self::full_mask(tile_count),
            tile_count,
        }
    }

    fn full_mask(tile_count: u8) -> u16 {
        if tile_count == 16 {
            u16::MAX
        } else {
            (1u16 << tile_count) - 1
        }
    }

    /// The configured number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> u8 {
        self.tile_count
    }

    /// The up tiles, sorted ascending. Read-only; never changes state.
    #[must_use]
    pub fn remaining(&self) -> SmallVec<[u8; 9]> {
        (1..=self.tile_count).filter(|&t| self.contains(t)).collect()
    }

    /// True if the given tile is up.
    #[must_use]
    pub fn contains(&self, tile: u8) -> bool {
        if tile == 0 || tile > self.tile_count {
            return false;
        }
        self.bits & (1 << (tile - 1)) != 0
    }

    /// Flip (remove) every tile in `tiles`.
    ///
    /// Every tile must currently be up: the turn engine validates combos
    /// against the rack before applying them, so a miss here is a bug in the
    /// strategy/search interaction and panics.
    pub fn flip(&mut self, tiles: &[u8]) {
        for &tile in tiles {
            assert!(
                self.contains(tile),
                "tile {tile} is not up (internal consistency bug)"
            );
            self.bits &= !(1 << (tile - 1));
        }
    }

    /// Sum of the up tiles: the owning player's current score (lower is
    /// better; 0 means the box is shut).
    #[must_use]
    pub fn score(&self) -> u32 {
        (1..=self.tile_count)
            .filter(|&t| self.contains(t))
            .map(u32::from)
            .sum()
    }

    /// True if every tile is down (a shut box).
    #[must_use]
    pub fn is_shut(&self) -> bool {
        self.bits == 0
    }

    /// Number of tiles still up.
    #[must_use]
    pub fn up_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Restore all tiles to up.
    pub fn reset(&mut self) {
        self.bits = Self::full_mask(self.tile_count);
    }

    /// Snapshot the rack for serialization.
    #[must_use]
    pub fn state(&self) -> RackState {
        RackState {
            tile_count: self.tile_count,
            tiles_up: self.remaining().to_vec(),
        }
    }

    /// Reconstruct a rack from a snapshot.
    ///
    /// Panics if the snapshot lists a tile outside `[1, tile_count]`.
    #[must_use]
    pub fn from_state(state: &RackState) -> Self {
        let mut rack = Self::new(state.tile_count);
        rack.bits = 0;
        for &tile in &state.tiles_up {
            assert!(
                tile >= 1 && tile <= state.tile_count,
                "snapshot tile {tile} outside 1..={}",
                state.tile_count
            );
            rack.bits |= 1 << (tile - 1);
        }
        rack
    }
}

/// Serializable rack snapshot: the sorted list of up tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackState {
    pub tile_count: u8,
    pub tiles_up: Vec<u8>,
}
