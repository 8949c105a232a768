// API
pub mod crossword;
pub mod error;

// Implementation
mod board;
mod crossings;
mod grid;
mod pos;
mod slot;
mod wordlist;
