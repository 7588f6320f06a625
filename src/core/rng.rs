//! Seeded shuffling for deals.
//!
//! A `DeckRng` is a root stream that never shuffles anything itself. Each
//! deal forks a child stream and shuffles with that, so one seed fixes the
//! whole sequence of decks a session will see.
//!
//! ```
//! use pairs_dash::core::DeckRng;
//!
//! let mut root = DeckRng::new(42);
//! let mut deal = root.fork();
//!
//! let mut cards = vec![1, 1, 2, 2, 3, 3];
//! deal.shuffle(&mut cards);
//! cards.sort();
//! assert_eq!(cards, vec![1, 1, 2, 2, 3, 3]);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment spreading child seeds across the `u64` space.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream backing the deck generator.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl DeckRng {
    /// Root stream for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream for the next deal.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
