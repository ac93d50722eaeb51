/// Polyomino board tilings
pub mod board;
/// Word squares from a word list
pub mod crossword;
/// The N queens problem
pub mod queens;
