//! Player cards and their 5x5 grid view.
//!
//! A `Card` stores its numbers column by column, the way they are dealt.
//! Win detection works on the `Grid` view instead, where the centre square
//! is a `Cell::Free` sentinel and every other square is a `Cell::Number`.

use serde::{Deserialize, Serialize};

use super::column::{Column, FREE_INDEX, GRID_SIZE};
use super::lines::Line;
use crate::core::error::{MyngoError, Result};
use crate::core::number_set::{is_ball, NumberSet};
use crate::core::rng::GameRng;

/// One square of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A printed number.
    Number(u8),
    /// The centre square, always satisfied.
    Free,
}

impl Cell {
    /// Whether this square counts toward a line given the marked numbers.
    #[inline]
    #[must_use]
    pub fn is_satisfied(self, marked: &NumberSet) -> bool {
        match self {
            Cell::Free => true,
            Cell::Number(n) => marked.contains(n),
        }
    }

    /// The printed number, if any.
    #[must_use]
    pub fn number(self) -> Option<u8> {
        match self {
            Cell::Number(n) => Some(n),
            Cell::Free => None,
        }
    }
}

/// 5x5 view of a card, indexed `[row][column]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Square at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is 5 or more.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// The five squares of a line, in order.
    #[must_use]
    pub fn line(&self, line: Line) -> [Cell; GRID_SIZE] {
        line.positions().map(|(row, column)| self.cells[row][column])
    }

    /// Squares of a line not yet satisfied by `marked`.
    pub fn unsatisfied<'a>(
        &'a self,
        line: Line,
        marked: &'a NumberSet,
    ) -> impl Iterator<Item = Cell> + 'a {
        self.line(line)
            .into_iter()
            .filter(move |cell| !cell.is_satisfied(marked))
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }
}

/// A player's card: 24 numbers in five columns plus the free centre.
///
/// Cards dealt by [`generate_card`] or built with [`Card::from_columns`] are
/// always well formed. A card deserialized from elsewhere is accepted as is;
/// if its shape is wrong, [`Card::grid`] returns `None` and the classifiers
/// treat it as never winning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    columns: Vec<Vec<u8>>,
}

impl Card {
    /// Build a card from its columns, validating shape and ranges.
    ///
    /// Columns are sorted ascending for display.
    ///
    /// ```
    /// use myngo::card::Card;
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
    /// assert!(card.contains(33));
    /// assert!(!card.contains(35));
    /// ```
    pub fn from_columns(mut columns: Vec<Vec<u8>>) -> Result<Self> {
        validate_columns(&columns)?;
        for numbers in &mut columns {
            numbers.sort_unstable();
        }
        Ok(Self { columns })
    }

    /// Numbers printed in a column (empty if the card is malformed).
    #[must_use]
    pub fn column(&self, column: Column) -> &[u8] {
        self.columns
            .get(column.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every printed number, column by column.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.columns.iter().flatten().copied()
    }

    /// Printed numbers as a set.
    #[must_use]
    pub fn number_set(&self) -> NumberSet {
        self.numbers().collect()
    }

    /// Check whether a number is printed on this card.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// Check that the card would pass [`Card::from_columns`]: five columns
    /// of the right lengths, each number in its column's range, no repeats.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        validate_columns(&self.columns).is_ok()
    }

    /// The 5x5 view, or `None` if the card is malformed.
    ///
    /// Row `i` of column `j` is the `i`-th stored number of that column; in
    /// column N the rows below the free square shift down by one.
    #[must_use]
    pub fn grid(&self) -> Option<Grid> {
        if !self.is_well_formed() {
            return None;
        }

        let mut cells = [[Cell::Free; GRID_SIZE]; GRID_SIZE];
        for (col, numbers) in self.columns.iter().enumerate() {
            let mut stored = numbers.iter().copied();
            for (row, cells_row) in cells.iter_mut().enumerate() {
                if row == FREE_INDEX && col == FREE_INDEX {
                    continue;
                }
                cells_row[col] = stored.next().map_or(Cell::Free, Cell::Number);
            }
        }

        Some(Grid { cells })
    }
}

fn validate_columns(columns: &[Vec<u8>]) -> Result<()> {
    if columns.len() != GRID_SIZE {
        return Err(MyngoError::MalformedCard(format!(
            "expected {} columns, got {}",
            GRID_SIZE,
            columns.len()
        )));
    }

    let mut seen = NumberSet::new();
    for (column, numbers) in Column::ALL.into_iter().zip(columns) {
        if numbers.len() != column.cell_count() {
            return Err(MyngoError::MalformedCard(format!(
                "column {} expects {} numbers, got {}",
                column,
                column.cell_count(),
                numbers.len()
            )));
        }

        for &number in numbers {
            if !is_ball(number) {
                return Err(MyngoError::NumberOutOfRange(number));
            }
            if !column.range().contains(&number) {
                return Err(MyngoError::WrongColumn {
                    number,
                    column: column.letter(),
                });
            }
            if !seen.insert(number) {
                return Err(MyngoError::DuplicateNumber(number));
            }
        }
    }

    Ok(())
}

/// Deal a fresh card.
///
/// Each column draws without replacement from its own range and is sorted
/// ascending, so numbers never repeat across the card.
#[must_use]
pub fn generate_card(rng: &mut GameRng) -> Card {
    let columns = Column::ALL
        .iter()
        .map(|column| rng.sample_distinct(column.range(), column.cell_count()))
        .collect();

    Card { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> Vec<Vec<u8>> {
        vec![
            vec![5, 1, 2, 3, 4],
            vec![16, 17, 18, 19, 20],
            vec![31, 32, 33, 34],
            vec![46, 47, 48, 49, 50],
            vec![61, 62, 63, 64, 65],
        ]
    }

    #[test]
    fn test_from_columns_sorts() {
        let card = Card::from_columns(sample_columns()).unwrap();
        assert_eq!(card.column(Column::M), &[1, 2, 3, 4, 5]);
        assert_eq!(card.numbers().count(), 24);
    }

    #[test]
    fn test_from_columns_rejects_shape() {
        let mut columns = sample_columns();
        columns.pop();
        assert!(matches!(
            Card::from_columns(columns),
            Err(MyngoError::MalformedCard(_))
        ));

        let mut columns = sample_columns();
        columns[2].push(35);
        assert!(matches!(
            Card::from_columns(columns),
            Err(MyngoError::MalformedCard(_))
        ));
    }

    #[test]
    fn test_from_columns_rejects_numbers() {
        let mut columns = sample_columns();
        columns[0][0] = 0;
        assert_eq!(Card::from_columns(columns), Err(MyngoError::NumberOutOfRange(0)));

        let mut columns = sample_columns();
        columns[1][0] = 2;
        assert_eq!(
            Card::from_columns(columns),
            Err(MyngoError::WrongColumn { number: 2, column: 'Y' })
        );

        let mut columns = sample_columns();
        columns[4][1] = 61;
        assert_eq!(Card::from_columns(columns), Err(MyngoError::DuplicateNumber(61)));
    }

    #[test]
    fn test_grid_layout() {
        let card = Card::from_columns(sample_columns()).unwrap();
        let grid = card.grid().unwrap();

        assert_eq!(grid.cell(0, 0), Cell::Number(1));
        assert_eq!(grid.cell(4, 4), Cell::Number(65));
        assert_eq!(grid.cell(2, 2), Cell::Free);
        // N column skips the centre
        assert_eq!(grid.cell(1, 2), Cell::Number(32));
        assert_eq!(grid.cell(3, 2), Cell::Number(33));
        assert_eq!(grid.cell(4, 2), Cell::Number(34));
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn test_malformed_card_has_no_grid() {
        let card: Card = serde_json::from_str("[[1,2,3],[16]]").unwrap();
        assert!(!card.is_well_formed());
        assert!(card.grid().is_none());
        assert!(card.column(Column::O).is_empty());
    }

    #[test]
    fn test_misplaced_number_fails_closed() {
        // 20 belongs in Y but is stored in M
        let card: Card = serde_json::from_str(
            "[[1,2,3,4,20],[16,17,18,19,21],[31,32,33,34],[46,47,48,49,50],[61,62,63,64,65]]",
        )
        .unwrap();

        assert!(!card.is_well_formed());
        assert!(card.grid().is_none());
        // Lookup agrees with the stored numbers
        assert!(card.contains(20));
        assert_eq!(card.number_set().len(), 24);
    }

    #[test]
    fn test_repeated_number_fails_closed() {
        let card: Card = serde_json::from_str(
            "[[1,2,3,4,5],[16,17,18,19,19],[31,32,33,34],[46,47,48,49,50],[61,62,63,64,65]]",
        )
        .unwrap();

        assert!(!card.is_well_formed());
        assert!(card.grid().is_none());
    }

    #[test]
    fn test_contains() {
        let card = Card::from_columns(sample_columns()).unwrap();
        assert!(card.contains(1));
        assert!(card.contains(65));
        assert!(!card.contains(66));
        assert!(!card.contains(0));
        assert_eq!(card.number_set().len(), 24);
    }

    #[test]
    fn test_generate_card_is_valid() {
        let mut rng = GameRng::new(99);
        let card = generate_card(&mut rng);

        let rebuilt = Card::from_columns(
            Column::ALL.iter().map(|c| card.column(*c).to_vec()).collect(),
        );
        assert_eq!(rebuilt, Ok(card));
    }

    #[test]
    fn test_generate_card_is_seeded() {
        let a = generate_card(&mut GameRng::new(5));
        let b = generate_card(&mut GameRng::new(5));
        let c = generate_card(&mut GameRng::new(6));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_serde_shape() {
        let card = Card::from_columns(sample_columns()).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.starts_with("[[1,2,3,4,5],"));

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
