use thiserror::Error;

/// The failures a crossword can be rejected with before any search starts.
///
/// Search exhaustion is not an error: an unsolvable but well-formed crossword
/// simply yields no solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grid contains no row at all.
    #[error("the grid is empty")]
    EmptyGrid,
    /// A row does not have the same width as the first one, once separators
    /// are stripped.
    #[error("inconsistent number of columns: row #{row} has {width} columns but row #0 has {expected}")]
    InconsistentRowWidth {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A cell is neither a block, an empty-cell placeholder nor a letter.
    #[error("invalid character {value:?} at row #{row}")]
    InvalidCharacter { row: usize, value: char },
    /// The word list contains no usable word.
    #[error("the word list is empty")]
    EmptyWordList,
    /// A slot has no candidate word of its length. Detected while building
    /// the initial domains, before any search.
    #[error("no candidate word of length {length} for slot #{slot}")]
    NoCandidates { slot: usize, length: usize },
}
