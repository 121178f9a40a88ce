//! # pairwise-vote
//!
//! The state-transition core of a single-elimination pairwise voting
//! tournament.
//!
//! ## How a tournament runs
//!
//! 1. Seed a list of entries.
//! 2. Advance: the first two waiting entries are paired for a vote.
//! 3. Voters cast ballots. A voter may change their ballot; only the latest
//!    one counts.
//! 4. Advance again: the entry with more votes goes to the back of the
//!    queue. On a tie both go back. The next two waiting entries are paired.
//! 5. When a single entry is left it is declared the winner.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every engine operation takes a snapshot and returns a new
//!    one. Nothing is mutated in place, and there is no global state.
//!
//! 2. **Persistent Data Structures**: snapshots use `im-rs`, so cloning is
//!    O(1) and keeping old snapshots (undo, observers) is cheap.
//!
//! 3. **Phase as a Sum Type**: a tournament is `Pending`, `Voting` or
//!    `Decided`. An open vote and a winner can never coexist.
//!
//! ## Modules
//!
//! - `core`: Entries, voters, vote rounds, state snapshots, errors
//! - `rules`: The engine operations (seed, advance, vote, restart)
//! - `dispatch`: Command enum, reducer, and stateful dispatcher
//! - `sim`: Seeded simulated electorate

pub mod core;
pub mod dispatch;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    EngineError, Entry, InvariantViolation, Phase, SnapshotError, TournamentState, VoteRound,
    VoterId, Winners,
};

pub use crate::rules::{advance, advance_from, cast_vote, restart, seed_entries};

pub use crate::dispatch::{reduce, Action, ActionRecord, DispatchConfig, Dispatcher};

pub use crate::sim::{BallotRng, Electorate, SimConfig, SimError, SimOutcome};
