//! Winning lines: five rows, five columns, two diagonals.

use serde::{Deserialize, Serialize};

use super::column::GRID_SIZE;

/// Shape of a winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LineKind::Row => "row",
            LineKind::Column => "column",
            LineKind::Diagonal => "diagonal",
        };
        f.write_str(name)
    }
}

/// A single line of the grid.
///
/// `index` is 0-4 for rows and columns. For diagonals, 0 is the main
/// diagonal (top-left to bottom-right) and 1 the anti-diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub index: u8,
}

/// Number of lines on a card.
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;

impl Line {
    /// Every line in check order: rows 0-4, columns 0-4, main diagonal,
    /// anti-diagonal. When several lines complete at once, the first in
    /// this order is the one reported.
    pub const ALL: [Line; LINE_COUNT] = [
        Line::row(0),
        Line::row(1),
        Line::row(2),
        Line::row(3),
        Line::row(4),
        Line::column(0),
        Line::column(1),
        Line::column(2),
        Line::column(3),
        Line::column(4),
        Line::MAIN_DIAGONAL,
        Line::ANTI_DIAGONAL,
    ];

    /// Top-left to bottom-right.
    pub const MAIN_DIAGONAL: Line = Line { kind: LineKind::Diagonal, index: 0 };

    /// Top-right to bottom-left.
    pub const ANTI_DIAGONAL: Line = Line { kind: LineKind::Diagonal, index: 1 };

    /// Row `index` (0 is the top row).
    #[must_use]
    pub const fn row(index: u8) -> Line {
        Line { kind: LineKind::Row, index }
    }

    /// Column `index` (0 is the M column).
    #[must_use]
    pub const fn column(index: u8) -> Line {
        Line { kind: LineKind::Column, index }
    }

    /// Grid positions `(row, column)` covered by this line.
    ///
    /// Out-of-range indices wrap into the grid rather than panicking.
    #[must_use]
    pub fn positions(self) -> [(usize, usize); GRID_SIZE] {
        let i = usize::from(self.index) % GRID_SIZE;
        std::array::from_fn(|k| match self.kind {
            LineKind::Row => (i, k),
            LineKind::Column => (k, i),
            LineKind::Diagonal if self.index == 0 => (k, k),
            LineKind::Diagonal => (k, GRID_SIZE - 1 - k),
        })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}
