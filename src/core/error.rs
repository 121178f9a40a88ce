//! Engine error types.
//!
//! Every error here is a precondition failure caused by applying an
//! operation out of order. Nothing is retried; callers decide what the user
//! sees.

use super::entry::Entry;

/// Precondition failures raised by the tournament engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cannot restart: no entries have been seeded")]
    NotSeeded,

    #[error("cannot advance: candidate pool is empty")]
    EmptyCandidatePool,

    #[error("cannot advance: tournament already decided ({winner})")]
    AlreadyDecided { winner: Entry },

    #[error("cannot vote: no pairing is open")]
    NoActiveVote,
}

/// A broken state invariant, reported by `check_invariants`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("tally holds {entry}, which is not in the pair")]
    TallyOutsidePair { entry: Entry },

    #[error("a recorded vote points at {entry}, which is not in the pair")]
    VoteOutsidePair { entry: Entry },

    #[error("{entry} has {votes} recorded votes but a tally of {tally}")]
    TallyBelowVotes { entry: Entry, votes: usize, tally: u32 },

    #[error("round number must be positive")]
    ZeroRound,

    #[error("decided tournament still has {0} waiting entries")]
    EntriesAfterDecision(usize),
}
