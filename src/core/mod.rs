//! Core value types: entries, voters, vote rounds, tournament state, errors.
//!
//! Everything in this module is an immutable value. The engine in `rules`
//! turns one snapshot into the next without touching the old one.

pub mod entry;
pub mod error;
pub mod round;
pub mod snapshot;
pub mod state;

pub use entry::{entries, Entry, VoterId};
pub use error::{EngineError, InvariantViolation};
pub use round::{VoteRound, Winners};
pub use snapshot::SnapshotError;
pub use state::{Phase, TournamentState};
