//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a simulated electorate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of voters. Voter ids are `voter1..=voterN`.
    pub voters: usize,

    /// Random seed. Same seed produces the same tournament.
    pub seed: u64,

    /// Maximum pairings opened before giving up.
    /// Ties re-queue both entries, so a tournament is not guaranteed to end.
    pub max_rounds: u32,

    /// Probability that a voter sits out a round.
    pub abstain_probability: f64,

    /// Probability that a voter casts a second ballot in the same round,
    /// replacing their first.
    pub change_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            voters: 5,
            seed: 42,
            max_rounds: 1_000,
            abstain_probability: 0.0,
            change_probability: 0.0,
        }
    }
}

impl SimConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of voters.
    pub fn with_voters(mut self, voters: usize) -> Self {
        self.voters = voters;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the round limit.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set the abstain probability.
    pub fn with_abstain_probability(mut self, p: f64) -> Self {
        self.abstain_probability = p;
        self
    }

    /// Set the vote-change probability.
    pub fn with_change_probability(mut self, p: f64) -> Self {
        self.change_probability = p;
        self
    }
}
