//! Tournament state snapshots.
//!
//! ## TournamentState
//!
//! The root value handed to and returned from every engine operation:
//! - Waiting entries (head of the queue is paired first)
//! - The seed list, kept for restarts
//! - The current phase
//!
//! ## Phase
//!
//! A tournament is either pending (nothing paired yet), voting on a pair,
//! or decided. Holding the open vote and the winner in one enum means a
//! state can never carry both.
//!
//! Uses `im` persistent data structures, so cloning a snapshot is O(1) and
//! earlier snapshots are never affected by later operations.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::error::InvariantViolation;
use super::round::VoteRound;

/// Where the tournament currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No vote open and no winner (unseeded, or seeded but not yet advanced).
    #[default]
    Pending,
    /// A pairing is open for votes.
    Voting(VoteRound),
    /// A single overall winner has been declared.
    Decided(Entry),
}

impl Phase {
    /// Check if no vote is open and no winner exists.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }
}

/// Immutable snapshot of a tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentState {
    /// Entries waiting to be paired.
    pub entries: Vector<Entry>,

    /// Seed list from the last `seed_entries`. `None` until seeded.
    pub initial_entries: Option<Vector<Entry>>,

    /// Current phase.
    pub phase: Phase,
}

impl TournamentState {
    /// Create an empty, unseeded state.
    ///
    /// The dispatcher owns this value; there is no process-wide default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open vote, if any.
    #[must_use]
    pub fn vote(&self) -> Option<&VoteRound> {
        match &self.phase {
            Phase::Voting(vote) => Some(vote),
            _ => None,
        }
    }

    /// The declared winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Entry> {
        match &self.phase {
            Phase::Decided(winner) => Some(winner),
            _ => None,
        }
    }

    /// Current round number (0 when no vote is open).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.vote().map_or(0, |vote| vote.round)
    }

    /// Check if `seed_entries` has been applied.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.initial_entries.is_some()
    }

    /// Check if a winner has been declared.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        matches!(self.phase, Phase::Decided(_))
    }

    /// Entries still in contention: the open pair followed by the queue.
    ///
    /// A decided tournament reports just its winner.
    #[must_use]
    pub fn remaining(&self) -> Vector<Entry> {
        match &self.phase {
            Phase::Pending => self.entries.clone(),
            Phase::Voting(vote) => {
                let mut remaining: Vector<Entry> = vote.pair.iter().cloned().collect();
                remaining.append(self.entries.clone());
                remaining
            }
            Phase::Decided(winner) => im::vector![winner.clone()],
        }
    }

    /// Check the snapshot's structural invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        match &self.phase {
            Phase::Pending => Ok(()),
            Phase::Voting(vote) => vote.check_invariants(),
            Phase::Decided(_) if !self.entries.is_empty() => {
                Err(InvariantViolation::EntriesAfterDecision(self.entries.len()))
            }
            Phase::Decided(_) => Ok(()),
        }
    }
}
