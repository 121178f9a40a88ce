//! Entry and voter identification.
//!
//! Both identifiers are opaque strings. The engine only compares them for
//! equality; the derived ordering exists so that tallies and vote maps have
//! a deterministic layout when serialized.
//!
//! ## Usage
//!
//! ```
//! use pairwise_vote::core::{Entry, VoterId};
//!
//! let film = Entry::new("Trainspotting");
//! let voter = VoterId::from("voter1");
//!
//! assert_eq!(film.as_str(), "Trainspotting");
//! assert_eq!(film, Entry::from("Trainspotting"));
//! assert_eq!(voter.to_string(), "voter1");
//! ```

use serde::{Deserialize, Serialize};

/// A candidate competing in the tournament.
///
/// Serializes as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the entry name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Entry {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Stable identifier for a participant casting votes (e.g. a client id).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    /// Create a new voter ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VoterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VoterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Build a list of entries from anything string-like.
///
/// ```
/// use pairwise_vote::core::{entries, Entry};
///
/// let list = entries(["A", "B"]);
/// assert_eq!(list, vec![Entry::new("A"), Entry::new("B")]);
/// ```
pub fn entries<I, S>(names: I) -> Vec<Entry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Entry::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_equality() {
        assert_eq!(Entry::new("Sunshine"), Entry::from("Sunshine"));
        assert_ne!(Entry::new("Sunshine"), Entry::new("Millions"));
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(Entry::new("127 Hours").to_string(), "127 Hours");
    }

    #[test]
    fn test_entry_serializes_as_string() {
        let json = serde_json::to_string(&Entry::new("Sunshine")).unwrap();
        assert_eq!(json, "\"Sunshine\"");

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Entry::new("Sunshine"));
    }

    #[test]
    fn test_voter_serializes_as_string() {
        let json = serde_json::to_string(&VoterId::new("voter1")).unwrap();
        assert_eq!(json, "\"voter1\"");
    }

    #[test]
    fn test_entries_helper_preserves_order() {
        let list = entries(["C", "A", "B"]);
        let names: Vec<_> = list.iter().map(Entry::as_str).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
