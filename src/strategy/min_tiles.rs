//! Minimize-tile-count strategy.

use crate::combos::{self, Combo};

use super::Strategy;

/// Flip as few tiles as possible.
///
/// Among all valid combos, prefers the fewest tiles, then the smallest sum,
/// then the smallest minimum tile.
///
/// As with [`GreedyMax`](super::GreedyMax), every valid combo sums to the
/// roll total, so the sum key is inert; the ordering is preserved as
/// documented.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinTiles;

impl Strategy for MinTiles {
    fn name(&self) -> &'static str {
        "min_tiles"
    }

    fn select(&self, roll_total: u32, tiles_up: &[u8]) -> Option<Combo> {
        combos::find_all(tiles_up, roll_total)
            .into_iter()
            .min_by_key(|c| (c.len(), c.sum(), c.min_tile()))
    }
}
