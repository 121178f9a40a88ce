//! The tournament state engine.
//!
//! Five operations drive a tournament:
//! - `seed_entries`: start a tournament with its entries
//! - `advance` / `advance_from`: resolve the open vote and pair the next two
//! - `cast_vote`: record a ballot against the open vote
//! - `restart`: start over from the seed list, keeping the round counter
//!
//! Vote-only operations live on `VoteRound` itself (`cast_vote`,
//! `retract_vote`, `winners`).

pub mod engine;

pub use engine::{advance, advance_from, cast_vote, restart, seed_entries};
