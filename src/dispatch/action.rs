//! Commands accepted by the dispatcher and the pure reducer that applies them.
//!
//! Actions use an internally tagged JSON layout:
//!
//! ```
//! use pairwise_vote::dispatch::Action;
//! use pairwise_vote::core::{Entry, VoterId};
//!
//! let action: Action = serde_json::from_str(
//!     r#"{"type": "VOTE", "entry": "Sunshine", "clientId": "voter1"}"#,
//! ).unwrap();
//!
//! assert_eq!(action, Action::Vote {
//!     entry: Entry::new("Sunshine"),
//!     client_id: VoterId::new("voter1"),
//! });
//!
//! // Unrecognised commands decode to `Unknown` and leave state alone.
//! let action: Action = serde_json::from_str(r#"{"type": "PING"}"#).unwrap();
//! assert_eq!(action, Action::Unknown);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Entry, TournamentState, VoterId};
use crate::rules;

/// A command for the tournament engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Start over from the seed list.
    Restart,

    /// Seed a new tournament.
    SetEntries { entries: Vec<Entry> },

    /// Resolve the open vote and pair the next two entries.
    Next,

    /// Cast (or change) a ballot.
    Vote {
        entry: Entry,
        #[serde(rename = "clientId")]
        client_id: VoterId,
    },

    /// Any command this engine does not recognise.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Restart => "RESTART",
            Action::SetEntries { .. } => "SET_ENTRIES",
            Action::Next => "NEXT",
            Action::Vote { .. } => "VOTE",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// An applied action with its position in the dispatcher's log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number, starting at 0 for the first applied action.
    pub sequence: u64,

    /// The action applied.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u64, action: Action) -> Self {
        Self { sequence, action }
    }
}

/// Apply one action to a snapshot, producing the next snapshot.
///
/// Maps each command onto exactly one engine call. `Unknown` returns the
/// state unchanged.
pub fn reduce(state: &TournamentState, action: &Action) -> Result<TournamentState, EngineError> {
    match action {
        Action::Restart => rules::restart(state),
        Action::SetEntries { entries } => Ok(rules::seed_entries(state, entries.iter().cloned())),
        Action::Next => rules::advance(state),
        Action::Vote { entry, client_id } => rules::cast_vote(state, entry, client_id),
        Action::Unknown => Ok(state.clone()),
    }
}
