use crate::pos::Pos;

/// The minimal length of a slot. A single open cell is not a word.
pub const MIN_LEN: usize = 2;

/// The direction a slot extends in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Across,
    Down,
}

/// One word slot of the grid: a maximal run of open cells in a row or column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// The index of this slot in the grid's list of slots.
    pub id: usize,
    /// The position of the first cell of the run.
    pub anchor: Pos,
    /// The number of cells in the run.
    pub length: usize,
    pub orientation: Orientation,
}

impl Slot {
    /// Creates a new across slot anchored at the given cell.
    pub fn across(id: usize, row: usize, column: usize, length: usize) -> Self {
        Slot {
            id,
            anchor: Pos::new(row, column),
            length,
            orientation: Orientation::Across,
        }
    }

    /// Creates a new down slot anchored at the given cell.
    pub fn down(id: usize, row: usize, column: usize, length: usize) -> Self {
        Slot {
            id,
            anchor: Pos::new(row, column),
            length,
            orientation: Orientation::Down,
        }
    }

    /// Returns the positions of the cells of this slot, from the anchor on.
    pub fn positions(&self) -> Vec<Pos> {
        (0..self.length)
            .map(|offset| match self.orientation {
                Orientation::Across => Pos::new(self.anchor.row, self.anchor.column + offset),
                Orientation::Down => Pos::new(self.anchor.row + offset, self.anchor.column),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slot_positions_across() {
        let slot = Slot::across(42, 1, 0, 3);
        let actual_positions = slot.positions();
        let expected_positions = vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)];
        assert_eq!(expected_positions, actual_positions);
    }

    #[test]
    fn slot_positions_down() {
        let slot = Slot::down(42, 0, 1, 3);
        let actual_positions = slot.positions();
        let expected_positions = vec![Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)];
        assert_eq!(expected_positions, actual_positions);
    }
}
