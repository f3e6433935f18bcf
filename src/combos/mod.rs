//! Exhaustive combination search over up tiles.
//!
//! Given the set of up tiles and a roll total, [`find_all`] enumerates every
//! non-empty subset of the tiles and keeps those summing to the total. The
//! search is intentionally unpruned: a rack holds at most 16 tiles (9 in the
//! standard game, 511 subsets), so exhaustiveness is cheap and it is the
//! contract - ordering and tie-breaking belong entirely to the strategies.
//!
//! An empty result means the roll is a bust.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A set of distinct tiles chosen to match a roll total.
///
/// Tiles are stored sorted ascending and never mutated after construction;
/// strategies select or discard whole combos.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combo {
    tiles: SmallVec<[u8; 9]>,
}

impl Combo {
    /// Create a combo from tile values. Sorts them; values must be distinct.
    #[must_use]
    pub fn new(tiles: impl IntoIterator<Item = u8>) -> Self {
        let mut tiles: SmallVec<[u8; 9]> = tiles.into_iter().collect();
        tiles.sort_unstable();
        debug_assert!(
            tiles.windows(2).all(|w| w[0] < w[1]),
            "combo tiles must be distinct"
        );
        Self { tiles }
    }

    /// The tiles in this combo, sorted ascending.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Sum of the tiles.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.tiles.iter().map(|&t| u32::from(t)).sum()
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True if the combo holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Largest tile in the combo.
    ///
    /// Panics on an empty combo; [`find_all`] never produces one.
    #[must_use]
    pub fn max_tile(&self) -> u8 {
        *self.tiles.last().expect("combo is not empty")
    }

    /// Smallest tile in the combo.
    ///
    /// Panics on an empty combo; [`find_all`] never produces one.
    #[must_use]
    pub fn min_tile(&self) -> u8 {
        *self.tiles.first().expect("combo is not empty")
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, t) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{t}")?;
        }
        write!(f, "}}")
    }
}

/// Find every subset of `tiles_up` whose sum equals `target`.
///
/// Enumerates all `2^n - 1` non-empty subsets via a bitmask counter and
/// filters by sum. The order of the returned combos is unspecified.
#[must_use]
pub fn find_all(tiles_up: &[u8], target: u32) -> Vec<Combo> {
    debug_assert!(tiles_up.len() <= 16, "rack holds at most 16 tiles");

    let n = tiles_up.len();
    let mut result = Vec::new();

    for mask in 1u32..(1u32 << n) {
        let mut sum = 0u32;
        for (i, &tile) in tiles_up.iter().enumerate() {
            if mask & (1 << i) != 0 {
                sum += u32::from(tile);
            }
        }
        if sum == target {
            result.push(Combo::new(
                tiles_up
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, &tile)| tile),
            ));
        }
    }

    result
}
