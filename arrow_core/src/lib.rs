//! Game engine for the arrow-sequence reaction game.
//!
//! `logic` holds the rules (sequences, scoring, the countdown and the
//! session state machine), `engine` the seams a host plugs into (randomness,
//! wall clock, tunables) and `store` the high-score persistence contract.

pub mod engine;
pub mod logic;
pub mod store;
