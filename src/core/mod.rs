//! Core support types: RNG, number sets and errors.
//!
//! Nothing here knows about cards or timing; the card engine, timing model
//! and game helpers all build on these.

pub mod error;
pub mod number_set;
pub mod rng;

pub use error::{MyngoError, Result};
pub use number_set::{is_ball, NumberSet, BALL_COUNT, MAX_NUMBER, MIN_NUMBER};
pub use rng::{GameRng, GameRngState};
