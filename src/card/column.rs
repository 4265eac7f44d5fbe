//! The five lettered columns and their number ranges.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::error::MyngoError;
use crate::core::number_set::is_ball;

/// Cards are 5x5.
pub const GRID_SIZE: usize = 5;

/// Numbers per column range.
pub const NUMBERS_PER_COLUMN: u8 = 15;

/// Index of the free cell's row and column.
pub const FREE_INDEX: usize = 2;

/// A card column, lettered M-Y-N-G-O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    M,
    Y,
    N,
    G,
    O,
}

impl Column {
    /// All columns in card order.
    pub const ALL: [Column; GRID_SIZE] = [Column::M, Column::Y, Column::N, Column::G, Column::O];

    /// Column at a 0-based position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Column> {
        if index < GRID_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// 0-based position on the card.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Column::M => 'M',
            Column::Y => 'Y',
            Column::N => 'N',
            Column::G => 'G',
            Column::O => 'O',
        }
    }

    /// Lowest number in this column.
    #[must_use]
    pub const fn first_number(self) -> u8 {
        self.index() as u8 * NUMBERS_PER_COLUMN + 1
    }

    /// Highest number in this column.
    #[must_use]
    pub const fn last_number(self) -> u8 {
        (self.index() as u8 + 1) * NUMBERS_PER_COLUMN
    }

    /// Inclusive number range of this column.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u8> {
        self.first_number()..=self.last_number()
    }

    /// Numbers printed in this column. N gives up its middle cell to the free space.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self {
            Column::N => GRID_SIZE - 1,
            _ => GRID_SIZE,
        }
    }

    /// Column a ball belongs to, or `None` outside `1..=75`.
    ///
    /// ```
    /// use myngo::card::Column;
    ///
    /// assert_eq!(Column::for_number(1), Some(Column::M));
    /// assert_eq!(Column::for_number(45), Some(Column::N));
    /// assert_eq!(Column::for_number(76), None);
    /// ```
    #[must_use]
    pub const fn for_number(number: u8) -> Option<Column> {
        if !is_ball(number) {
            return None;
        }
        Self::from_index(((number - 1) / NUMBERS_PER_COLUMN) as usize)
    }
}

// Each column must be able to fill its cells from its own range.
const _: () = {
    let mut i = 0;
    while i < GRID_SIZE {
        assert!(Column::ALL[i].cell_count() <= NUMBERS_PER_COLUMN as usize);
        i += 1;
    }
};

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A called number with its column letter, displayed as `M-7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Ball(u8);

impl Ball {
    /// Wrap a number, or `None` outside `1..=75`.
    #[must_use]
    pub const fn new(number: u8) -> Option<Ball> {
        if is_ball(number) {
            Some(Ball(number))
        } else {
            None
        }
    }

    /// The ball's number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The ball's column.
    #[must_use]
    pub fn column(self) -> Column {
        // Ball is only constructed for 1..=75
        Column::ALL[usize::from((self.0 - 1) / NUMBERS_PER_COLUMN)]
    }
}

impl TryFrom<u8> for Ball {
    type Error = MyngoError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Ball::new(number).ok_or(MyngoError::NumberOutOfRange(number))
    }
}

impl From<Ball> for u8 {
    fn from(ball: Ball) -> u8 {
        ball.0
    }
}

impl std::fmt::Display for Ball {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.column().letter(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_disjoint_and_cover_all_balls() {
        assert_eq!(Column::M.range(), 1..=15);
        assert_eq!(Column::Y.range(), 16..=30);
        assert_eq!(Column::N.range(), 31..=45);
        assert_eq!(Column::G.range(), 46..=60);
        assert_eq!(Column::O.range(), 61..=75);

        for window in Column::ALL.windows(2) {
            assert_eq!(window[0].last_number() + 1, window[1].first_number());
        }
    }

    #[test]
    fn test_cell_counts() {
        let total: usize = Column::ALL.iter().map(|c| c.cell_count()).sum();
        assert_eq!(total, 24);
        assert_eq!(Column::N.cell_count(), 4);
    }

    #[test]
    fn test_for_number_boundaries() {
        assert_eq!(Column::for_number(0), None);
        assert_eq!(Column::for_number(15), Some(Column::M));
        assert_eq!(Column::for_number(16), Some(Column::Y));
        assert_eq!(Column::for_number(60), Some(Column::G));
        assert_eq!(Column::for_number(61), Some(Column::O));
        assert_eq!(Column::for_number(75), Some(Column::O));
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
            assert_eq!(Column::from_index(i), Some(*column));
        }
        assert_eq!(Column::from_index(5), None);
    }

    #[test]
    fn test_ball_display() {
        assert_eq!(Ball::new(7).map(|b| b.to_string()), Some("M-7".to_string()));
        assert_eq!(Ball::new(38).map(|b| b.to_string()), Some("N-38".to_string()));
        assert_eq!(Ball::new(75).map(|b| b.column()), Some(Column::O));
        assert!(Ball::new(0).is_none());
        assert!(Ball::new(76).is_none());
    }

    #[test]
    fn test_ball_serde_rejects_out_of_range() {
        let ball: Ball = serde_json::from_str("22").unwrap();
        assert_eq!(ball.column(), Column::Y);
        assert_eq!(serde_json::to_string(&ball).unwrap(), "22");

        assert!(serde_json::from_str::<Ball>("0").is_err());
        assert!(serde_json::from_str::<Ball>("80").is_err());
    }
}
