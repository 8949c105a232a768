//! This library defines the interface of a crossword filling solver. It is
//! meant to be consumed by `bretzel-crossword`, which compiles a grid and a
//! word list into a [Problem] and hands it to an implementation of [Solver].

/// A crossing between two slots, seen from one of them: the single cell the
/// two slots share, expressed as letter offsets inside each word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    /// The id of the crossed slot.
    pub other: usize,
    /// The offset of the shared cell within this slot's word.
    pub offset: usize,
    /// The offset of the shared cell within the crossed slot's word.
    pub other_offset: usize,
}

/// A crossword compiled into constraint-satisfaction form.
///
/// Each slot of the grid is a variable; its domain is the list of candidate
/// words of the slot's exact length, given as indices into the word table, in
/// word list order. Each crossing is a binary constraint: the two crossing
/// words must carry the same letter at the shared cell. The problem is
/// immutable; solvers own whatever working state they need.
pub struct Problem<'words> {
    /// The word table. Domains index into it.
    words: &'words [String],
    /// Per-slot word length.
    lengths: Vec<usize>,
    /// Per-slot candidate word indices, in search order.
    domains: Vec<Vec<usize>>,
    /// Per-slot crossings, in crossed-slot id order.
    crossings: Vec<Vec<Crossing>>,
}

impl<'words> Problem<'words> {
    /// Creates a new problem. All per-slot vectors must be indexed by slot id.
    pub fn new(
        words: &'words [String],
        lengths: Vec<usize>,
        domains: Vec<Vec<usize>>,
        crossings: Vec<Vec<Crossing>>,
    ) -> Self {
        debug_assert_eq!(lengths.len(), domains.len());
        debug_assert_eq!(lengths.len(), crossings.len());
        Problem {
            words,
            lengths,
            domains,
            crossings,
        }
    }

    /// Returns the number of slots.
    pub fn slot_count(&self) -> usize {
        self.lengths.len()
    }

    /// Returns the word at the given index of the word table.
    pub fn word(&self, index: usize) -> &'words str {
        &self.words[index]
    }

    /// Returns the word length required by the given slot.
    pub fn length_of(&self, slot: usize) -> usize {
        self.lengths[slot]
    }

    /// Returns the initial domain of the given slot.
    pub fn domain(&self, slot: usize) -> &[usize] {
        &self.domains[slot]
    }

    /// Returns the crossings of the given slot.
    pub fn crossings_of(&self, slot: usize) -> &[Crossing] {
        &self.crossings[slot]
    }

    /// Returns the number of crossings of the given slot.
    pub fn degree(&self, slot: usize) -> usize {
        self.crossings[slot].len()
    }
}

/// Definition of a crossword filling solver.
///
/// A solver receives the compiled [Problem] and returns the first assignment
/// it finds satisfying every crossing - the chosen word-table index for each
/// slot id - or [None] when no assignment exists.
pub trait Solver {
    /// Solves the given problem.
    fn solve(&self, problem: &Problem<'_>) -> Option<Vec<usize>>;
}

#[cfg(test)]
mod test {
    use super::*;

    fn words() -> Vec<String> {
        ["bar", "cat", "to"].iter().map(|&w| w.to_string()).collect()
    }

    /// One length-3 slot crossing one length-2 slot: the last letter of the
    /// first word is the first letter of the second.
    fn problem(words: &[String]) -> Problem<'_> {
        Problem::new(
            words,
            vec![3, 2],
            vec![vec![0, 1], vec![2]],
            vec![
                vec![Crossing {
                    other: 1,
                    offset: 2,
                    other_offset: 0,
                }],
                vec![Crossing {
                    other: 0,
                    offset: 0,
                    other_offset: 2,
                }],
            ],
        )
    }

    #[test]
    fn problem_slot_count() {
        let words = words();
        assert_eq!(2, problem(&words).slot_count());
    }

    #[test]
    fn problem_word() {
        let words = words();
        let problem = problem(&words);
        assert_eq!("bar", problem.word(0));
        assert_eq!("to", problem.word(2));
    }

    #[test]
    fn problem_length_of() {
        let words = words();
        let problem = problem(&words);
        assert_eq!(3, problem.length_of(0));
        assert_eq!(2, problem.length_of(1));
    }

    #[test]
    fn problem_domain() {
        let words = words();
        let problem = problem(&words);
        assert_eq!(&[0, 1], problem.domain(0));
        assert_eq!(&[2], problem.domain(1));
    }

    #[test]
    fn problem_crossings_of() {
        let words = words();
        let problem = problem(&words);
        let expected = Crossing {
            other: 1,
            offset: 2,
            other_offset: 0,
        };
        assert_eq!(&[expected], problem.crossings_of(0));
        assert_eq!(1, problem.degree(0));
        assert_eq!(1, problem.degree(1));
    }
}
