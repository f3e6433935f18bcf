//! Maximize-largest-tile strategy.

use std::cmp::Reverse;

use crate::combos::{self, Combo};

use super::Strategy;

/// Flip the biggest tiles first.
///
/// If the single largest up tile equals the roll total it is taken outright,
/// with no search. Otherwise, among all valid combos, prefers the largest
/// maximum tile, then the largest sum, then the fewest tiles.
///
/// All valid combos sum to the roll total, so the middle key never actually
/// discriminates; it is kept to preserve the documented ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMax;

impl Strategy for GreedyMax {
    fn name(&self) -> &'static str {
        "greedy_max"
    }

    fn select(&self, roll_total: u32, tiles_up: &[u8]) -> Option<Combo> {
        let largest = *tiles_up.iter().max()?;
        if u32::from(largest) == roll_total {
            return Some(Combo::new([largest]));
        }

        combos::find_all(tiles_up, roll_total)
            .into_iter()
            .min_by_key(|c| (Reverse(c.max_tile()), Reverse(c.sum()), c.len()))
    }
}
