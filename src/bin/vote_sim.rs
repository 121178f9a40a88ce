//! vote-sim: run a simulated electorate through a tournament.
//!
//! ```text
//! vote-sim --voters 9 --seed 7 Trainspotting "28 Days Later" Sunshine
//! RUST_LOG=pairwise_vote=debug vote-sim --json A B C D
//! ```

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pairwise_vote::core::Entry;
use pairwise_vote::sim::{Electorate, SimConfig};

#[derive(Parser)]
#[command(name = "vote-sim")]
#[command(about = "Simulate a pairwise voting tournament")]
struct Cli {
    /// Number of voters
    #[arg(long, default_value = "5")]
    voters: usize,

    /// Random seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Give up after this many pairings
    #[arg(long, default_value = "1000")]
    max_rounds: u32,

    /// Probability that a voter sits out a round
    #[arg(long, default_value = "0.0")]
    abstain: f64,

    /// Probability that a voter changes their ballot within a round
    #[arg(long, default_value = "0.0")]
    change: f64,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Entries, in seeding order
    #[arg(required = true)]
    entries: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SimConfig::new()
        .with_voters(cli.voters)
        .with_seed(cli.seed)
        .with_max_rounds(cli.max_rounds)
        .with_abstain_probability(cli.abstain)
        .with_change_probability(cli.change);

    let mut electorate = Electorate::new(config);
    let outcome = electorate
        .run(cli.entries.into_iter().map(Entry::from))
        .context("simulation did not produce a winner")?;

    if cli.json {
        println!("{}", outcome.final_state.to_json()?);
    } else {
        println!(
            "{} wins after {} rounds ({} ballots)",
            outcome.winner, outcome.rounds, outcome.ballots_cast
        );
    }

    Ok(())
}
