//! # myngo
//!
//! Card generation, win detection and call pacing for webinar bingo.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Classification and timing are side-effect-free functions
//!    of their inputs. Identical inputs always give identical answers, so the
//!    host view and every player view agree.
//!
//! 2. **Injected Randomness**: Dealing and calling take a `&mut GameRng`.
//!    Seed it to replay a game.
//!
//! 3. **Fail Closed**: A malformed card never wins; it never panics.
//!
//! ## Modules
//!
//! - `core`: RNG, number sets, errors
//! - `card`: Columns, cards, grid, lines and win classification
//! - `timing`: Call-interval formulas, config and per-room plans
//! - `game`: Number caller and player sheets (the only logging code)

pub mod card;
pub mod core;
pub mod game;
pub mod timing;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MyngoError, NumberSet, Result};

pub use crate::card::{
    classify_card, classify_near_win, generate_card, near_win_lines, verify_claim, winning_lines,
    Ball, Card, Cell, Column, Grid, Line, LineKind, NearWin, WinResult,
};

pub use crate::timing::{
    calls_needed_for_winner, recommended_call_interval, seconds_between_calls, CallPlan,
    RoomSettings, TimingConfig,
};

pub use crate::game::{CardStatus, NumberCaller, PlayerSheet};
