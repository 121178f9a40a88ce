//! Simulated voters driving a tournament to completion.
//!
//! Every command goes through a `Dispatcher`, exactly as a real host would
//! send them, so a simulation exercises the full command path.

use crate::core::{EngineError, Entry, TournamentState, VoterId};
use crate::dispatch::{Action, DispatchConfig, Dispatcher};

use super::config::SimConfig;
use super::rng::BallotRng;

/// Why a simulation stopped without a winner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("no winner after {limit} rounds")]
    RoundLimit { limit: u32 },
}

/// Result of a finished simulation.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    /// The overall winner.
    pub winner: Entry,

    /// Pairings opened before the winner emerged.
    pub rounds: u32,

    /// Ballots cast, including changed ones.
    pub ballots_cast: u64,

    /// The decided snapshot.
    pub final_state: TournamentState,
}

/// A fixed set of voters casting random ballots.
#[derive(Clone, Debug)]
pub struct Electorate {
    config: SimConfig,
    voters: Vec<VoterId>,
    rng: BallotRng,
}

impl Electorate {
    /// Create an electorate from a config.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let voters = (1..=config.voters)
            .map(|i| VoterId::new(format!("voter{i}")))
            .collect();
        let rng = BallotRng::new(config.seed);
        Self { config, voters, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The simulated voters.
    #[must_use]
    pub fn voters(&self) -> &[VoterId] {
        &self.voters
    }

    /// Seed a tournament with `entries` and vote until it is decided.
    pub fn run(
        &mut self,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<SimOutcome, SimError> {
        let config = DispatchConfig::new().with_history_limit(1).with_action_log(false);
        let mut dispatcher = Dispatcher::new(config, TournamentState::new());

        dispatcher.dispatch(Action::SetEntries { entries: entries.into_iter().collect() })?;

        let mut rounds = 0u32;
        let mut ballots_cast = 0u64;
        loop {
            let state = dispatcher.dispatch(Action::Next)?;
            if let Some(winner) = state.winner() {
                tracing::info!(%winner, rounds, ballots_cast, "simulation finished");
                return Ok(SimOutcome {
                    winner: winner.clone(),
                    rounds,
                    ballots_cast,
                    final_state: state.clone(),
                });
            }

            if rounds >= self.config.max_rounds {
                return Err(SimError::RoundLimit { limit: self.config.max_rounds });
            }
            rounds += 1;

            let pair = state
                .vote()
                .map(|vote| vote.pair.clone())
                .ok_or(EngineError::NoActiveVote)?;
            ballots_cast += self.vote_round(&mut dispatcher, &pair)?;
        }
    }

    /// Have every voter vote on the open pair. Returns ballots cast.
    fn vote_round(
        &mut self,
        dispatcher: &mut Dispatcher,
        pair: &[Entry; 2],
    ) -> Result<u64, SimError> {
        let mut rng = self.rng.fork();
        let mut ballots = 0;

        for voter in &self.voters {
            if rng.chance(self.config.abstain_probability) {
                continue;
            }

            let mut choices = 1;
            if rng.chance(self.config.change_probability) {
                choices += 1;
            }

            for _ in 0..choices {
                let Some(entry) = rng.pick(pair) else { break };
                dispatcher.dispatch(Action::Vote {
                    entry: entry.clone(),
                    client_id: voter.clone(),
                })?;
                ballots += 1;
            }
        }

        Ok(ballots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entries;

    #[test]
    fn test_voter_ids() {
        let electorate = Electorate::new(SimConfig::default().with_voters(3));
        let ids: Vec<_> = electorate.voters().iter().map(VoterId::as_str).collect();
        assert_eq!(ids, ["voter1", "voter2", "voter3"]);
    }

    #[test]
    fn test_single_entry_wins_without_voting() {
        let mut electorate = Electorate::new(SimConfig::default());
        let outcome = electorate.run(entries(["Only"])).unwrap();

        assert_eq!(outcome.winner, Entry::new("Only"));
        assert_eq!(outcome.rounds, 0);
        assert_eq!(outcome.ballots_cast, 0);
    }

    #[test]
    fn test_no_entries_is_an_engine_error() {
        let mut electorate = Electorate::new(SimConfig::default());
        assert_eq!(
            electorate.run(Vec::new()).unwrap_err(),
            SimError::Engine(EngineError::EmptyCandidatePool)
        );
    }

    #[test]
    fn test_silent_electorate_hits_round_limit() {
        // Nobody votes, so every pairing ties and nothing is eliminated.
        let config = SimConfig::default().with_voters(0).with_max_rounds(10);
        let mut electorate = Electorate::new(config);

        assert_eq!(
            electorate.run(entries(["A", "B"])).unwrap_err(),
            SimError::RoundLimit { limit: 10 }
        );
    }
}
