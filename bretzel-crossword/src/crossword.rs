use bretzel_solver::{Problem, Solver};

use crate::board;
use crate::crossings::Crossings;
use crate::error::Error;
use crate::grid::Grid;
use crate::slot::Slot;
use crate::wordlist::WordList;

/// # A crossword, defined as a constraint satisfaction problem
///
/// ## Variables
///
/// One variable per slot, i.e. per maximal run of at least two open cells in
/// a row or column of the grid.
///
/// ## Domains
///
/// The domain of a slot is the list of the words of the slot's exact length,
/// in word list order.
///
/// ## Constraints
///
/// One binary constraint per crossing: where an across and a down slot share
/// a cell, the two chosen words must carry the same letter at that cell.
///
/// The compilation work happens in [Crossword::from]; the search itself is
/// delegated to the [Solver] given to [Crossword::solve_with].
pub struct Crossword<'words> {
    grid: Grid,
    slots: Vec<Slot>,
    problem: Problem<'words>,
}

impl<'words> Crossword<'words> {
    /// Creates a new crossword from the given grid and word list.
    ///
    /// Fails on a malformed grid or word list, and when some slot has no
    /// candidate word of its length at all; the latter makes the instance
    /// trivially unsolvable and is reported before any search runs.
    pub fn from(input_grid: &str, words: &'words [String]) -> Result<Self, Error> {
        let grid = Grid::parse(input_grid)?;
        let slots = grid.slots();
        let word_list = WordList::new(words)?;

        let mut domains = Vec::with_capacity(slots.len());
        for slot in &slots {
            let candidates = word_list.of_length(slot.length);
            if candidates.is_empty() {
                return Err(Error::NoCandidates {
                    slot: slot.id,
                    length: slot.length,
                });
            }
            domains.push(candidates.to_vec());
        }

        let crossings = Crossings::build(&slots);
        log::debug!(
            "compiled {} slots and {} crossings from a {}x{} grid",
            slots.len(),
            crossings.count(),
            grid.row_count(),
            grid.column_count(),
        );

        let lengths = slots.iter().map(|slot| slot.length).collect();
        let problem = Problem::new(word_list.words(), lengths, domains, crossings.into_lists());
        Ok(Crossword {
            grid,
            slots,
            problem,
        })
    }

    /// Solves this crossword with the given solver and renders the first
    /// solution found as the filled grid, rows separated by newlines.
    /// Returns [None] when the solver exhausts the search space.
    pub fn solve_with(&self, solver: &dyn Solver) -> Option<String> {
        solver.solve(&self.problem).map(|assignment| {
            let chosen: Vec<&str> = assignment
                .iter()
                .map(|&word| self.problem.word(word))
                .collect();
            board::fill(
                self.grid.row_count(),
                self.grid.column_count(),
                &self.slots,
                &chosen,
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Yields no solution, whatever the problem.
    struct StubUnsolvable {}
    impl Solver for StubUnsolvable {
        fn solve(&self, _problem: &Problem<'_>) -> Option<Vec<usize>> {
            None
        }
    }

    /// Assigns the first candidate of every slot, constraints be damned.
    struct StubFirstCandidate {}
    impl Solver for StubFirstCandidate {
        fn solve(&self, problem: &Problem<'_>) -> Option<Vec<usize>> {
            (0..problem.slot_count())
                .map(|slot| problem.domain(slot).first().copied())
                .collect()
        }
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|&word| word.to_string()).collect()
    }

    #[test]
    fn crossword_from_ok() {
        let words = owned(&["abc", "def", "aa", "bb", "cc"]);
        let crossword = Crossword::from("...\n...", &words);
        assert!(crossword.is_ok(), "Creation failed");
    }

    #[test]
    fn crossword_from_malformed_grid() {
        let words = owned(&["abc"]);
        let crossword = Crossword::from("...\n....", &words);
        assert_eq!(
            Some(Error::InconsistentRowWidth {
                row: 1,
                width: 4,
                expected: 3,
            }),
            crossword.err(),
        );
    }

    #[test]
    fn crossword_from_no_candidates() {
        let words = owned(&["to", "it"]);
        let crossword = Crossword::from("...", &words);
        assert_eq!(
            Some(Error::NoCandidates { slot: 0, length: 3 }),
            crossword.err(),
        );
    }

    #[test]
    fn crossword_solve_with_unsolvable() {
        let words = owned(&["abc", "def", "aa", "bb", "cc"]);
        let crossword = Crossword::from("...\n...", &words).unwrap();
        assert_eq!(None, crossword.solve_with(&StubUnsolvable {}));
    }

    #[test]
    fn crossword_solve_with_renders_the_board() {
        let words = owned(&["cat", "dog"]);
        let crossword = Crossword::from("...", &words).unwrap();
        let solution = crossword.solve_with(&StubFirstCandidate {});
        assert_eq!(Some("cat".to_string()), solution);
    }
}
