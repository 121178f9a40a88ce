//! Stateful owner of the latest tournament snapshot.
//!
//! The engine is pure; something still has to hold the current state and
//! apply commands one at a time. `Dispatcher` does that, and because every
//! snapshot is a persistent value it can keep earlier ones around for undo
//! at little cost.
//!
//! ## Usage
//!
//! ```
//! use pairwise_vote::core::{entries, Entry, TournamentState, VoterId};
//! use pairwise_vote::dispatch::{Action, DispatchConfig, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::new(DispatchConfig::default(), TournamentState::new());
//!
//! dispatcher.dispatch(Action::SetEntries { entries: entries(["A", "B"]) }).unwrap();
//! dispatcher.dispatch(Action::Next).unwrap();
//! let ballot = Action::Vote { entry: Entry::new("B"), client_id: VoterId::new("v1") };
//! dispatcher.dispatch(ballot).unwrap();
//! let state = dispatcher.dispatch(Action::Next).unwrap();
//!
//! assert_eq!(state.winner(), Some(&Entry::new("B")));
//! assert_eq!(dispatcher.log().len(), 4);
//! ```

use im::Vector;

use super::action::{reduce, Action, ActionRecord};
use super::config::DispatchConfig;
use crate::core::{EngineError, TournamentState};

/// Applies actions to the current snapshot.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    config: DispatchConfig,

    /// Latest snapshot.
    state: TournamentState,

    /// Earlier snapshots, oldest first.
    history: Vector<TournamentState>,

    /// Applied actions, oldest first.
    log: Vector<ActionRecord>,

    /// Sequence number for the next applied action.
    next_sequence: u64,
}

impl Dispatcher {
    /// Create a dispatcher around an explicit initial state.
    #[must_use]
    pub fn new(config: DispatchConfig, initial: TournamentState) -> Self {
        Self {
            config,
            state: initial,
            history: Vector::new(),
            log: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Get the current snapshot.
    #[must_use]
    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    /// Earlier snapshots available to `undo`, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TournamentState> {
        &self.history
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Apply an action to the current snapshot.
    ///
    /// On error the dispatcher is left exactly as it was and the error is
    /// returned to the caller.
    pub fn dispatch(&mut self, action: Action) -> Result<&TournamentState, EngineError> {
        let next = match reduce(&self.state, &action) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(action = action.kind(), error = %err, "action rejected");
                return Err(err);
            }
        };

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        tracing::trace!(sequence, action = action.kind(), round = next.round(), "action applied");

        let previous = std::mem::replace(&mut self.state, next);
        self.push_history(previous);
        if self.config.record_actions {
            self.log.push_back(ActionRecord::new(sequence, action));
        }

        Ok(&self.state)
    }

    /// Restore the snapshot from before the last applied action.
    ///
    /// Returns false when there is nothing to undo. The action log is an
    /// audit trail and keeps the undone action.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.state = previous;
                tracing::debug!(remaining = self.history.len(), "undo");
                true
            }
            None => false,
        }
    }

    /// Replace the current snapshot, clearing undo history.
    pub fn reset(&mut self, state: TournamentState) {
        self.state = state;
        self.history.clear();
    }

    fn push_history(&mut self, snapshot: TournamentState) {
        self.history.push_back(snapshot);
        let limit = self.config.history_limit;
        if limit > 0 && self.history.len() > limit {
            self.history.pop_front();
        }
    }
}
