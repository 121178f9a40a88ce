//! Seeded simulation of an electorate voting through a tournament.
//!
//! Used by the `vote-sim` binary, the integration tests and the benches.
//!
//! ```
//! use pairwise_vote::core::entries;
//! use pairwise_vote::sim::{Electorate, SimConfig};
//!
//! let mut electorate = Electorate::new(SimConfig::default().with_voters(7).with_seed(1));
//! let outcome = electorate.run(entries(["A", "B", "C", "D"])).unwrap();
//!
//! assert!(outcome.final_state.is_decided());
//! ```

pub mod config;
pub mod electorate;
pub mod rng;

pub use config::SimConfig;
pub use electorate::{Electorate, SimError, SimOutcome};
pub use rng::BallotRng;
