//! Snapshot encoding for hosts that store or ship tournament state.
//!
//! Two formats: compact binary (`bincode`) and JSON (`serde_json`). Decoded
//! snapshots are checked against the state invariants before they are
//! handed back.

use super::error::InvariantViolation;
use super::state::TournamentState;

/// Failure to encode or decode a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("json snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decoded snapshot is inconsistent: {0}")]
    Invalid(#[from] InvariantViolation),
}

impl TournamentState {
    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_invariants()?;
        Ok(state)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let state: Self = serde_json::from_str(json)?;
        state.check_invariants()?;
        Ok(state)
    }
}
