use serde::{Deserialize, Serialize};

/// A single cell of a playable board. The generator only ever produces
/// `Given` and `Empty`; `UserInput` exists for the consumer's editable copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Given(u8),
    UserInput(u8),
    Empty,
}

impl Cell {
    pub fn value(&self) -> Option<u8> {
        match self {
            Cell::Given(v) | Cell::UserInput(v) => Some(*v),
            Cell::Empty => None,
        }
    }

    pub fn is_given(&self) -> bool {
        matches!(self, Cell::Given(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Playable 9x9 board with clue/empty distinction.
pub type Board = [[Cell; 9]; 9];

/// Fully solved 9x9 grid, digits 1-9, no empties.
pub type SolutionBoard = [[u8; 9]; 9];

/// Number of clue (`Given`) cells on a board.
pub fn count_givens(board: &Board) -> usize {
    board
        .iter()
        .flatten()
        .filter(|cell| cell.is_given())
        .count()
}
