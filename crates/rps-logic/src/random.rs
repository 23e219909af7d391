//! Seeded pseudo-random number generator
//!
//! One handle per simulation, threaded explicitly through move selection
//! and pairing. Same seed = same sequence of rounds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded random number generator
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: SmallRng,
}

impl SeededRng {
    /// Create a reproducible RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.inner.random_range(0..max)
    }

    /// Generate an index in range [0, len)
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.random_range(0..len)
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_index(items.len());
        items.get(i)
    }
}
