use bretzel_solver::Crossing;

use crate::slot::{Orientation, Slot};

/// All crossings of a grid.
///
/// An across and a down slot cross when they share a cell; the crossing is
/// recorded as the pair of letter offsets at which the two words must agree.
/// Two slots of the same orientation never cross, maximal runs are disjoint
/// by construction.
///
/// The structure is kept in two shapes built in a single pass: a dense
/// slot x slot matrix for pair lookup, and per-slot adjacency lists for
/// iteration during the search.
pub struct Crossings {
    slot_count: usize,
    /// Row-major slot x slot matrix of offset pairs.
    matrix: Vec<Option<(usize, usize)>>,
    /// Per-slot crossing lists, in crossed-slot id order.
    lists: Vec<Vec<Crossing>>,
}

impl Crossings {
    /// Computes the crossings between the given slots, in O(N²) slot pairs.
    pub fn build(slots: &[Slot]) -> Self {
        let slot_count = slots.len();
        let mut matrix = vec![None; slot_count * slot_count];
        let mut lists = vec![Vec::new(); slot_count];
        let across: Vec<&Slot> = slots
            .iter()
            .filter(|slot| slot.orientation == Orientation::Across)
            .collect();
        let down: Vec<&Slot> = slots
            .iter()
            .filter(|slot| slot.orientation == Orientation::Down)
            .collect();
        for a in &across {
            for d in &down {
                // They share a cell iff the down column falls within the
                // across run and the across row falls within the down run.
                let column_hits = d.anchor.column >= a.anchor.column
                    && d.anchor.column < a.anchor.column + a.length;
                let row_hits =
                    a.anchor.row >= d.anchor.row && a.anchor.row < d.anchor.row + d.length;
                if !column_hits || !row_hits {
                    continue;
                }
                let across_offset = d.anchor.column - a.anchor.column;
                let down_offset = a.anchor.row - d.anchor.row;
                matrix[a.id * slot_count + d.id] = Some((across_offset, down_offset));
                matrix[d.id * slot_count + a.id] = Some((down_offset, across_offset));
                lists[a.id].push(Crossing {
                    other: d.id,
                    offset: across_offset,
                    other_offset: down_offset,
                });
                lists[d.id].push(Crossing {
                    other: a.id,
                    offset: down_offset,
                    other_offset: across_offset,
                });
            }
        }
        let crossings = Crossings {
            slot_count,
            matrix,
            lists,
        };
        crossings.debug_check();
        crossings
    }

    /// Returns the offsets at which slots `a` and `b` agree, if they cross.
    pub fn between(&self, a: usize, b: usize) -> Option<(usize, usize)> {
        self.matrix[a * self.slot_count + b]
    }

    /// Returns the crossings of the given slot.
    pub fn of(&self, slot: usize) -> &[Crossing] {
        &self.lists[slot]
    }

    /// Returns the number of crossings of the given slot.
    pub fn degree(&self, slot: usize) -> usize {
        self.lists[slot].len()
    }

    /// Returns the total number of crossings of the grid.
    pub fn count(&self) -> usize {
        (0..self.slot_count).map(|slot| self.degree(slot)).sum::<usize>() / 2
    }

    /// Surrenders the per-slot crossing lists.
    pub fn into_lists(self) -> Vec<Vec<Crossing>> {
        self.lists
    }

    /// Structural invariants: empty diagonal, symmetry under index swap with
    /// offset swap, matrix and lists in agreement. Defects only, unreachable
    /// from valid slot lists.
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            for a in 0..self.slot_count {
                debug_assert!(self.between(a, a).is_none());
                for b in 0..self.slot_count {
                    let mirrored = self.between(b, a).map(|(i, j)| (j, i));
                    debug_assert_eq!(self.between(a, b), mirrored);
                }
                for crossing in self.of(a) {
                    debug_assert_eq!(
                        Some((crossing.offset, crossing.other_offset)),
                        self.between(a, crossing.other),
                    );
                }
            }
        }
    }
}
