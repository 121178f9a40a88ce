//! Deterministic randomness for simulated ballots.
//!
//! Same seed, same ballots. Each round of a simulation draws from its own
//! fork, so adding a voter changes that round's ballots but not the
//! sequence of round streams.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream for ballot decisions.
#[derive(Clone, Debug)]
pub struct BallotRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BallotRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent stream.
    ///
    /// The n-th fork of a given seed always gets the same sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// True with the given probability.
    ///
    /// Values outside `[0, 1]` are clamped. NaN counts as 0.
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Pick one element of a slice.
    #[must_use]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        items.choose(&mut self.inner)
    }
}
