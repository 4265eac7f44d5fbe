//! Card engine: dealing cards and detecting completed lines.
//!
//! ## Key Types
//!
//! - `Column`: the M-Y-N-G-O columns and their number ranges
//! - `Ball`: a called number with its letter (`M-7`)
//! - `Card`: a dealt card, stored column by column
//! - `Grid`: the 5x5 view with a free centre square
//! - `Line`: a row, column or diagonal
//! - `WinResult`: outcome of [`classify_card`]
//!
//! ## Usage
//!
//! ```
//! use myngo::card::{classify_card, classify_near_win, generate_card};
//! use myngo::core::{GameRng, NumberSet};
//!
//! let mut rng = GameRng::new(42);
//! let card = generate_card(&mut rng);
//!
//! let marked = NumberSet::new();
//! assert!(!classify_card(&card, &marked).has_win());
//! assert!(!classify_near_win(&card, &marked));
//! ```

pub mod classify;
pub mod column;
pub mod grid;
pub mod lines;

pub use classify::{
    classify_card, classify_near_win, near_win_lines, verify_claim, winning_lines, NearWin,
    WinResult,
};
pub use column::{Ball, Column, FREE_INDEX, GRID_SIZE};
pub use grid::{generate_card, Card, Cell, Grid};
pub use lines::{Line, LineKind, LINE_COUNT};
