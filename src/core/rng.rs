//! Per-game random number generation.
//!
//! Every game owns one `GameRng`, seeded by the batch runner; nothing in
//! the crate touches process-global random state. Two games built from the
//! same seed therefore produce the same dice forever, regardless of what
//! ran before them or in what order a batch executes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG owned by a single game.
///
/// ChaCha8 keeps rolls fast while staying a proper stream cipher, and its
/// word-position counter lets the whole generator state round-trip through
/// a [`GameRngState`] without replaying the stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Build a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one die, uniform in `[1, faces]`.
    pub fn roll_die(&mut self, faces: u8) -> u8 {
        debug_assert!(faces > 0, "die must have at least one face");
        self.inner.gen_range(1..=faces)
    }

    /// Snapshot the generator.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Rebuild a generator mid-stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Snapshot of a [`GameRng`]: seed plus stream position.
///
/// Capturing the position instead of the raw cipher state keeps the
/// snapshot two integers, no matter how far the stream has advanced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 128-bit stream position.
    pub word_pos: u128,
}
