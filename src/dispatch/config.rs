//! Dispatcher configuration parameters.

use serde::{Deserialize, Serialize};

/// Dispatcher configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Prior snapshots kept for `undo` (0 = unlimited).
    /// Snapshots share structure, so each one costs little.
    pub history_limit: usize,

    /// Keep a log of every applied action.
    pub record_actions: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            history_limit: 64,
            record_actions: true,
        }
    }
}

impl DispatchConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the undo history limit.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Enable or disable the action log.
    pub fn with_action_log(mut self, enabled: bool) -> Self {
        self.record_actions = enabled;
        self
    }
}
