//! Win and near-win classification.
//!
//! Every function here is a pure read of a card and a set of marked numbers.
//! A line is complete when each of its squares is the free square or a
//! marked number. Malformed cards fail closed: they never win and are never
//! one away.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Card, Grid};
use super::lines::Line;
use crate::core::number_set::NumberSet;

/// Outcome of checking a card for a completed line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "result", content = "line", rename_all = "snake_case")]
pub enum WinResult {
    /// No line is complete.
    #[default]
    NoWin,
    /// The first completed line in check order.
    Win(Line),
}

impl WinResult {
    /// Whether the player has won.
    #[must_use]
    pub fn has_win(&self) -> bool {
        matches!(self, WinResult::Win(_))
    }

    /// The winning line, for highlighting.
    #[must_use]
    pub fn line(&self) -> Option<Line> {
        match self {
            WinResult::Win(line) => Some(*line),
            WinResult::NoWin => None,
        }
    }
}

/// A line that is one square away from complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NearWin {
    /// The almost-complete line.
    pub line: Line,
    /// The one number still needed.
    pub missing: u8,
}

/// Check a card for a completed line.
///
/// Lines are checked rows 0-4, then columns 0-4, then the main and anti
/// diagonals; the first complete one is returned.
///
/// ```
/// use myngo::card::{classify_card, Card, Line, WinResult};
/// use myngo::core::NumberSet;
///
/// let card = Card::from_columns(vec![
///     vec![1, 2, 3, 4, 5],
///     vec![16, 17, 18, 19, 20],
///     vec![31, 32, 33, 34],
///     vec![46, 47, 48, 49, 50],
///     vec![61, 62, 63, 64, 65],
/// ])
/// .unwrap();
///
/// // Middle row: the free square fills the N slot
/// let marked: NumberSet = [3, 18, 48, 63].into_iter().collect();
/// assert_eq!(classify_card(&card, &marked), WinResult::Win(Line::row(2)));
/// ```
#[must_use]
pub fn classify_card(card: &Card, marked: &NumberSet) -> WinResult {
    let Some(grid) = card.grid() else {
        return WinResult::NoWin;
    };

    Line::ALL
        .into_iter()
        .find(|&line| is_complete(&grid, line, marked))
        .map_or(WinResult::NoWin, WinResult::Win)
}

/// Check whether any line is exactly one square from complete.
///
/// Independent of [`classify_card`]: a completed line has no missing
/// squares, so it never counts as near.
#[must_use]
pub fn classify_near_win(card: &Card, marked: &NumberSet) -> bool {
    let Some(grid) = card.grid() else {
        return false;
    };

    Line::ALL
        .into_iter()
        .any(|line| grid.unsatisfied(line, marked).count() == 1)
}

/// Every completed line, in check order.
#[must_use]
pub fn winning_lines(card: &Card, marked: &NumberSet) -> SmallVec<[Line; 4]> {
    let Some(grid) = card.grid() else {
        return SmallVec::new();
    };

    Line::ALL
        .into_iter()
        .filter(|&line| is_complete(&grid, line, marked))
        .collect()
}

/// Every line one square from complete, with the number it needs.
#[must_use]
pub fn near_win_lines(card: &Card, marked: &NumberSet) -> SmallVec<[NearWin; 4]> {
    let Some(grid) = card.grid() else {
        return SmallVec::new();
    };

    Line::ALL
        .into_iter()
        .filter_map(|line| {
            let mut open = grid.unsatisfied(line, marked);
            match (open.next(), open.next()) {
                (Some(cell), None) => cell.number().map(|missing| NearWin { line, missing }),
                _ => None,
            }
        })
        .collect()
}

/// Check a win claim against the numbers actually called.
///
/// Marks that were never called are ignored, so a player cannot win by
/// marking ahead of the caller.
#[must_use]
pub fn verify_claim(card: &Card, marked: &NumberSet, called: &NumberSet) -> WinResult {
    classify_card(card, &marked.intersection(called))
}

fn is_complete(grid: &Grid, line: Line, marked: &NumberSet) -> bool {
    grid.line(line).iter().all(|cell| cell.is_satisfied(marked))
}
