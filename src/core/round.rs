//! A single head-to-head vote between two entries.
//!
//! `VoteRound` is an immutable value. Every operation returns a new round and
//! leaves the receiver untouched; the `im` maps share structure with the
//! previous round so this stays cheap.
//!
//! ## Voting
//!
//! ```
//! use pairwise_vote::core::{Entry, VoteRound, VoterId};
//!
//! let round = VoteRound::new(1, [Entry::new("A"), Entry::new("B")]);
//! let round = round
//!     .cast_vote(&Entry::new("A"), &VoterId::new("v1"))
//!     .cast_vote(&Entry::new("B"), &VoterId::new("v2"))
//!     .cast_vote(&Entry::new("B"), &VoterId::new("v3"));
//!
//! assert_eq!(round.tally_for(&Entry::new("A")), 1);
//! assert_eq!(round.tally_for(&Entry::new("B")), 2);
//! assert_eq!(round.winners().as_slice(), &[Entry::new("B")]);
//! ```

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::entry::{Entry, VoterId};
use super::error::InvariantViolation;

/// Entries forwarded out of a resolved pairing: one winner, or both on a tie.
pub type Winners = SmallVec<[Entry; 2]>;

/// An open pairing and its votes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRound {
    /// Round number (starts at 1, keeps climbing across restarts).
    pub round: u32,

    /// The two entries under vote. Order decides tie output order only.
    pub pair: [Entry; 2],

    /// Current vote count per entry. Missing entries count as zero.
    pub tally: OrdMap<Entry, u32>,

    /// The entry each voter currently supports.
    pub votes: OrdMap<VoterId, Entry>,
}

impl VoteRound {
    /// Open a round with no votes.
    #[must_use]
    pub fn new(round: u32, pair: [Entry; 2]) -> Self {
        Self {
            round,
            pair,
            tally: OrdMap::new(),
            votes: OrdMap::new(),
        }
    }

    /// Replace the tally wholesale.
    ///
    /// Useful for restoring a round whose individual ballots are not known.
    #[must_use]
    pub fn with_tally(mut self, tally: impl IntoIterator<Item = (Entry, u32)>) -> Self {
        self.tally = tally.into_iter().filter(|(_, count)| *count > 0).collect();
        self
    }

    // === Queries ===

    /// Check if an entry is one of the pair.
    #[must_use]
    pub fn contains(&self, entry: &Entry) -> bool {
        self.pair.contains(entry)
    }

    /// Get the tally for an entry (zero if absent).
    #[must_use]
    pub fn tally_for(&self, entry: &Entry) -> u32 {
        self.tally.get(entry).copied().unwrap_or(0)
    }

    /// Sum of all tallies.
    #[must_use]
    pub fn total_votes(&self) -> u32 {
        self.tally.values().sum()
    }

    /// The entry a voter currently supports, if any.
    #[must_use]
    pub fn vote_of(&self, voter: &VoterId) -> Option<&Entry> {
        self.votes.get(voter)
    }

    /// The entry currently ahead, or `None` while the pair is tied.
    #[must_use]
    pub fn leader(&self) -> Option<&Entry> {
        let [a, b] = &self.pair;
        match self.tally_for(a).cmp(&self.tally_for(b)) {
            std::cmp::Ordering::Greater => Some(a),
            std::cmp::Ordering::Less => Some(b),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Resolve the pairing.
    ///
    /// A strictly higher tally wins alone. Equal tallies (including 0-0)
    /// forward both entries in pair order; ties are never broken.
    #[must_use]
    pub fn winners(&self) -> Winners {
        match self.leader() {
            Some(leader) => smallvec![leader.clone()],
            None => SmallVec::from_iter(self.pair.iter().cloned()),
        }
    }

    // === Voting ===

    /// Remove a voter's current vote, if any.
    #[must_use]
    pub fn retract_vote(&self, voter: &VoterId) -> Self {
        let Some(previous) = self.votes.get(voter) else {
            return self.clone();
        };

        let mut next = self.clone();
        match next.tally_for(previous) {
            0 | 1 => {
                next.tally.remove(previous);
            }
            count => {
                next.tally.insert(previous.clone(), count - 1);
            }
        }
        next.votes.remove(voter);
        next
    }

    /// Record a vote, replacing the voter's previous one.
    ///
    /// The previous vote is always retracted first. If `entry` is not in the
    /// pair nothing replaces it, so the voter forfeits their standing.
    #[must_use]
    pub fn cast_vote(&self, entry: &Entry, voter: &VoterId) -> Self {
        let mut next = self.retract_vote(voter);

        if !next.contains(entry) {
            tracing::debug!(
                round = self.round,
                %voter,
                %entry,
                "vote for entry outside pair forfeited"
            );
            return next;
        }

        let count = next.tally_for(entry) + 1;
        next.tally.insert(entry.clone(), count);
        next.votes.insert(voter.clone(), entry.clone());
        tracing::trace!(round = self.round, %voter, %entry, count, "vote recorded");
        next
    }

    // === Invariants ===

    /// Check the round's structural invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.round == 0 {
            return Err(InvariantViolation::ZeroRound);
        }

        if let Some(entry) = self.tally.keys().find(|entry| !self.contains(entry)) {
            return Err(InvariantViolation::TallyOutsidePair { entry: entry.clone() });
        }

        if let Some(entry) = self.votes.values().find(|entry| !self.contains(entry)) {
            return Err(InvariantViolation::VoteOutsidePair { entry: entry.clone() });
        }

        for entry in &self.pair {
            let votes = self.votes.values().filter(|v| *v == entry).count();
            let tally = self.tally_for(entry);
            if votes > tally as usize {
                return Err(InvariantViolation::TallyBelowVotes {
                    entry: entry.clone(),
                    votes,
                    tally,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> [Entry; 2] {
        [Entry::new("Trainspotting"), Entry::new("28 Days Later")]
    }

    fn voter(id: &str) -> VoterId {
        VoterId::new(id)
    }

    #[test]
    fn test_first_vote_creates_tally() {
        let round = VoteRound::new(1, pair());
        let next = round.cast_vote(&Entry::new("Trainspotting"), &voter("voter1"));

        assert_eq!(next.tally_for(&Entry::new("Trainspotting")), 1);
        assert_eq!(next.vote_of(&voter("voter1")), Some(&Entry::new("Trainspotting")));
        // Input untouched
        assert!(round.tally.is_empty());
        assert!(round.votes.is_empty());
    }

    #[test]
    fn test_vote_adds_to_existing_tally() {
        let round = VoteRound::new(1, pair()).with_tally([
            (Entry::new("Trainspotting"), 3),
            (Entry::new("28 Days Later"), 7),
        ]);
        let next = round.cast_vote(&Entry::new("28 Days Later"), &voter("voter1"));

        assert_eq!(next.tally_for(&Entry::new("Trainspotting")), 3);
        assert_eq!(next.tally_for(&Entry::new("28 Days Later")), 8);
    }

    #[test]
    fn test_changing_vote_moves_it() {
        let round = VoteRound::new(1, pair())
            .with_tally([(Entry::new("Trainspotting"), 3), (Entry::new("28 Days Later"), 6)])
            .cast_vote(&Entry::new("28 Days Later"), &voter("voter1"));
        let next = round.cast_vote(&Entry::new("Trainspotting"), &voter("voter1"));

        assert_eq!(next.tally_for(&Entry::new("Trainspotting")), 4);
        assert_eq!(next.tally_for(&Entry::new("28 Days Later")), 6);
        assert_eq!(next.votes.len(), 1);
    }

    #[test]
    fn test_repeat_vote_is_stable() {
        let entry = Entry::new("Trainspotting");
        let round = VoteRound::new(1, pair())
            .cast_vote(&entry, &voter("voter1"))
            .cast_vote(&entry, &voter("voter1"));

        assert_eq!(round.tally_for(&entry), 1);
        assert_eq!(round.total_votes(), 1);
    }

    #[test]
    fn test_vote_outside_pair_forfeits_previous() {
        let round =
            VoteRound::new(1, pair()).cast_vote(&Entry::new("Trainspotting"), &voter("voter1"));
        let next = round.cast_vote(&Entry::new("Sunshine"), &voter("voter1"));

        assert_eq!(next.tally_for(&Entry::new("Trainspotting")), 0);
        assert_eq!(next.tally_for(&Entry::new("Sunshine")), 0);
        assert_eq!(next.vote_of(&voter("voter1")), None);
        assert!(next.tally.is_empty());
    }

    #[test]
    fn test_retract_without_vote_is_noop() {
        let round = VoteRound::new(1, pair());
        assert_eq!(round.retract_vote(&voter("nobody")), round);
    }

    #[test]
    fn test_winners_strict_majority() {
        let round = VoteRound::new(1, pair()).with_tally([
            (Entry::new("Trainspotting"), 4),
            (Entry::new("28 Days Later"), 3),
        ]);
        assert_eq!(round.winners().as_slice(), &[Entry::new("Trainspotting")]);

        let round = round.with_tally([(Entry::new("28 Days Later"), 1)]);
        assert_eq!(round.winners().as_slice(), &[Entry::new("28 Days Later")]);
    }

    #[test]
    fn test_winners_tie_forwards_both_in_pair_order() {
        let round = VoteRound::new(1, pair()).with_tally([
            (Entry::new("Trainspotting"), 3),
            (Entry::new("28 Days Later"), 3),
        ]);
        assert_eq!(round.winners().as_slice(), &pair());

        // No votes at all is a 0-0 tie
        assert_eq!(VoteRound::new(1, pair()).winners().as_slice(), &pair());
    }

    #[test]
    fn test_invariants_hold_after_voting() {
        let round = VoteRound::new(2, pair())
            .cast_vote(&Entry::new("Trainspotting"), &voter("a"))
            .cast_vote(&Entry::new("28 Days Later"), &voter("b"))
            .cast_vote(&Entry::new("Sunshine"), &voter("a"));

        assert_eq!(round.check_invariants(), Ok(()));
    }

    #[test]
    fn test_invariants_reject_foreign_tally() {
        let round = VoteRound::new(1, pair()).with_tally([(Entry::new("Sunshine"), 1)]);
        assert_eq!(
            round.check_invariants(),
            Err(InvariantViolation::TallyOutsidePair { entry: Entry::new("Sunshine") })
        );
    }

    #[test]
    fn test_invariants_reject_zero_round() {
        assert_eq!(
            VoteRound::new(0, pair()).check_invariants(),
            Err(InvariantViolation::ZeroRound)
        );
    }

    #[test]
    fn test_invariants_reject_tally_below_votes() {
        let entry = Entry::new("Trainspotting");
        let round = VoteRound::new(1, pair())
            .cast_vote(&entry, &voter("a"))
            .cast_vote(&entry, &voter("b"))
            .with_tally([(entry.clone(), 1)]);

        assert_eq!(
            round.check_invariants(),
            Err(InvariantViolation::TallyBelowVotes { entry, votes: 2, tally: 1 })
        );
    }

    #[test]
    fn test_serialization() {
        let round =
            VoteRound::new(3, pair()).cast_vote(&Entry::new("Trainspotting"), &voter("voter1"));
        let json = serde_json::to_string(&round).unwrap();
        let back: VoteRound = serde_json::from_str(&json).unwrap();

        assert_eq!(round, back);
    }
}
