use crate::error::Error;
use crate::slot::{self, Slot};

/// The character representing a block, i.e. a shaded cell.
pub const BLOCK: char = '#';

/// The placeholder character for an open cell. Letters are accepted as
/// placeholders too; the grid content of an open cell carries no constraint.
pub const EMPTY: char = '.';

/// A crossword grid, normalized: tab and space separators stripped, one
/// string per row, all rows of equal width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<String>,
}

impl Grid {
    /// Attempts to parse a [Grid] from its textual form. Each non-empty line
    /// is one row; tabs and spaces within a line are separators and are
    /// removed; the trailing newline is discarded. Returns an error
    /// describing the validation failure for an empty grid, uneven row
    /// widths or an unexpected character.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let rows: Vec<String> = input
            .lines()
            .map(|line| line.replace(['\t', ' ', '\r'], ""))
            .filter(|row| !row.is_empty())
            .collect();
        let rows = Grid::validate(rows)?;
        Ok(Grid { rows })
    }

    /// Validates the given normalized rows, returning them unchanged when
    /// they form a well-formed grid.
    fn validate(rows: Vec<String>) -> Result<Vec<String>, Error> {
        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let expected = rows[0].len();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::InconsistentRowWidth {
                    row: row_index,
                    width: row.len(),
                    expected,
                });
            }
            for value in row.chars() {
                if value != BLOCK && value != EMPTY && !value.is_ascii_alphabetic() {
                    return Err(Error::InvalidCharacter {
                        row: row_index,
                        value,
                    });
                }
            }
        }
        Ok(rows)
    }

    /// Returns the character at the given cell.
    pub fn cell_at(&self, row: usize, column: usize) -> char {
        // Rows are validated ASCII, byte indexing is character indexing.
        self.rows[row].as_bytes()[column] as char
    }

    /// Returns the number of rows of the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns of the grid.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the slots of this grid: across slots in row-major order, then
    /// down slots in column-major order, ids dense in that order.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = self.across_slots();
        let mut down_slots = self.down_slots(slots.len());
        slots.append(&mut down_slots);
        slots
    }

    /// Computes the across slots: maximal runs of open cells in each row.
    /// After a run ends on a block, the next candidate anchor is the cell
    /// right after that block. Runs shorter than [slot::MIN_LEN] are
    /// discarded.
    fn across_slots(&self) -> Vec<Slot> {
        let mut slots = vec![];
        let column_count = self.column_count();
        for row in 0..self.row_count() {
            let mut start = 0;
            for column in 0..column_count {
                if self.cell_at(row, column) == BLOCK {
                    if column - start >= slot::MIN_LEN {
                        slots.push(Slot::across(slots.len(), row, start, column - start));
                    }
                    start = column + 1;
                }
            }
            if column_count - start >= slot::MIN_LEN {
                slots.push(Slot::across(slots.len(), row, start, column_count - start));
            }
        }
        slots
    }

    /// Computes the down slots. Symmetric to [Self::across_slots].
    fn down_slots(&self, first_id: usize) -> Vec<Slot> {
        let mut slots = vec![];
        let row_count = self.row_count();
        for column in 0..self.column_count() {
            let mut start = 0;
            for row in 0..row_count {
                if self.cell_at(row, column) == BLOCK {
                    if row - start >= slot::MIN_LEN {
                        slots.push(Slot::down(
                            first_id + slots.len(),
                            start,
                            column,
                            row - start,
                        ));
                    }
                    start = row + 1;
                }
            }
            if row_count - start >= slot::MIN_LEN {
                slots.push(Slot::down(
                    first_id + slots.len(),
                    start,
                    column,
                    row_count - start,
                ));
            }
        }
        slots
    }
}
