//! The tournament state engine.
//!
//! Pure functions from one `TournamentState` snapshot to the next. None of
//! them mutate their input.
//!
//! ```
//! use pairwise_vote::core::{entries, Entry, TournamentState, VoterId};
//! use pairwise_vote::rules::{advance, cast_vote, seed_entries};
//!
//! let state = seed_entries(&TournamentState::new(), entries(["A", "B"]));
//! let state = advance(&state).unwrap();
//! let state = cast_vote(&state, &Entry::new("B"), &VoterId::new("v1")).unwrap();
//! let state = advance(&state).unwrap();
//!
//! assert_eq!(state.winner(), Some(&Entry::new("B")));
//! ```

use im::Vector;

use crate::core::{EngineError, Entry, Phase, TournamentState, VoteRound, VoterId};

/// Seed a tournament with its entries.
///
/// Sets both the waiting queue and the restart list, and discards any vote
/// or winner left over from a previous tournament.
#[must_use]
pub fn seed_entries(
    state: &TournamentState,
    entries: impl IntoIterator<Item = Entry>,
) -> TournamentState {
    if !state.phase.is_pending() {
        tracing::debug!(
            round = state.round(),
            decided = state.is_decided(),
            "reseeding discards previous phase"
        );
    }

    let entries: Vector<Entry> = entries.into_iter().collect();
    tracing::debug!(count = entries.len(), "entries seeded");

    TournamentState {
        entries: entries.clone(),
        initial_entries: Some(entries),
        phase: Phase::Pending,
    }
}

/// Resolve the open vote (if any) and open the next pairing.
///
/// Continues from the current round number, or 0 when no vote is open.
pub fn advance(state: &TournamentState) -> Result<TournamentState, EngineError> {
    advance_from(state, state.round())
}

/// Resolve the open vote (if any) and open pairing number `round + 1`.
///
/// Winners of the open vote join the back of the queue. If only one entry
/// remains it is declared the winner; otherwise the first two entries in the
/// queue are paired.
pub fn advance_from(state: &TournamentState, round: u32) -> Result<TournamentState, EngineError> {
    let mut pool = state.entries.clone();
    match &state.phase {
        Phase::Pending => {}
        Phase::Voting(vote) => pool.extend(vote.winners()),
        Phase::Decided(winner) if pool.is_empty() => {
            return Err(EngineError::AlreadyDecided { winner: winner.clone() });
        }
        Phase::Decided(_) => {}
    }

    let next = match pool.len() {
        0 => return Err(EngineError::EmptyCandidatePool),
        1 => {
            let winner = pool.pop_front().ok_or(EngineError::EmptyCandidatePool)?;
            tracing::debug!(%winner, "tournament decided");
            TournamentState {
                entries: Vector::new(),
                initial_entries: state.initial_entries.clone(),
                phase: Phase::Decided(winner),
            }
        }
        _ => {
            let rest = pool.split_off(2);
            let (Some(first), Some(second)) = (pool.pop_front(), pool.pop_front()) else {
                return Err(EngineError::EmptyCandidatePool);
            };
            let round = round.saturating_add(1);
            tracing::debug!(round, %first, %second, waiting = rest.len(), "pairing opened");
            TournamentState {
                entries: rest,
                initial_entries: state.initial_entries.clone(),
                phase: Phase::Voting(VoteRound::new(round, [first, second])),
            }
        }
    };

    debug_assert_eq!(next.check_invariants(), Ok(()));
    Ok(next)
}

/// Record a ballot against the open vote.
///
/// A ballot for an entry outside the pair retracts the voter's previous
/// ballot without replacing it.
pub fn cast_vote(
    state: &TournamentState,
    entry: &Entry,
    voter: &VoterId,
) -> Result<TournamentState, EngineError> {
    let vote = state.vote().ok_or(EngineError::NoActiveVote)?;

    let next = TournamentState {
        phase: Phase::Voting(vote.cast_vote(entry, voter)),
        ..state.clone()
    };

    debug_assert_eq!(next.check_invariants(), Ok(()));
    Ok(next)
}

/// Start the tournament over from its seed list.
///
/// The round counter carries over from the open vote, so round numbers keep
/// climbing across restarts.
pub fn restart(state: &TournamentState) -> Result<TournamentState, EngineError> {
    let initial = state.initial_entries.clone().ok_or(EngineError::NotSeeded)?;
    let round = state.round();
    tracing::debug!(round, entries = initial.len(), "tournament restarted");

    let reset = TournamentState {
        entries: initial.clone(),
        initial_entries: Some(initial),
        phase: Phase::Pending,
    };
    advance_from(&reset, round)
}
