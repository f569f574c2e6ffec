//! Deterministic random number generation for board and pouch setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Forkable**: One independent stream per player board
//! - **Context streams**: The pouch and the boards never share a sequence
//!
//! ## Usage
//!
//! ```
//! use bingo_engine::core::BoardRng;
//!
//! let mut rng = BoardRng::new(42);
//!
//! // Each player board gets its own fork
//! let alice = rng.fork();
//! let bob = rng.fork();
//! assert_ne!(alice.seed(), bob.seed());
//!
//! // Forks are deterministic - same fork counter = same seed
//! let mut rng2 = BoardRng::new(42);
//! assert_eq!(rng2.fork().seed(), alice.seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Deterministic RNG used to lay out boards and shuffle the pouch.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a named purpose.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Draw one number uniformly from an inclusive range.
    pub fn gen_number(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Draw `amount` distinct numbers from an inclusive range, in draw order.
    ///
    /// Returns fewer than `amount` values only if the range is smaller.
    pub fn sample_distinct(&mut self, range: RangeInclusive<u8>, amount: usize) -> Vec<u8> {
        let start = *range.start();
        let len = range.len();
        rand::seq::index::sample(&mut self.inner, len, amount.min(len))
            .into_iter()
            .map(|offset| start + offset as u8)
            .collect()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
