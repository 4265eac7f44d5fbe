//! Caller-side helpers around the card engine.
//!
//! - `NumberCaller`: draws balls and keeps the called-set
//! - `PlayerSheet`: a card plus its marks, enforcing "mark only what was called"
//!
//! These are the only parts of the crate that log.

pub mod caller;
pub mod sheet;

pub use caller::NumberCaller;
pub use sheet::{CardStatus, PlayerSheet};
