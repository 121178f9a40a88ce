//! Command dispatch around the pure engine.
//!
//! - `Action`: the four tournament commands plus a catch-all
//! - `reduce`: applies one action to a snapshot
//! - `Dispatcher`: holds the latest snapshot, undo history and action log

pub mod action;
pub mod config;
pub mod dispatcher;

pub use action::{reduce, Action, ActionRecord};
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
