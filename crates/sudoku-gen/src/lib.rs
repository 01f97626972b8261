pub mod board;
pub mod difficulty;
pub mod hint;
pub mod puzzle;
pub mod validation;

#[cfg(test)]
mod test_grids;

pub use board::{Board, Cell, SolutionBoard, count_givens};
pub use difficulty::Difficulty;
pub use hint::{Hint, find_hint};
pub use puzzle::{GenerateError, GeneratedPuzzle, generate_puzzle, generate_solution};
