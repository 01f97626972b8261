use std::fmt;

use log::{debug, warn};
use rand::RngExt;
use rand::rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, SolutionBoard};
use crate::difficulty::Difficulty;

/// Whole-grid fill retries before giving up. Randomized backtracking from an
/// empty grid essentially always succeeds on the first attempt.
const MAX_FILL_ATTEMPTS: usize = 5;

/// Carving draws cells at random and may re-draw already-empty or rejected
/// cells, so it gets a few attempts per cell.
const CARVE_ATTEMPT_BUDGET: usize = 81 * 3;

/// Grid generation exhausted its retry budget without a valid fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    FillFailed,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::FillFailed => {
                write!(f, "grid fill failed after {MAX_FILL_ATTEMPTS} attempts")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Result of one generation call: the playable puzzle and its solution.
///
/// `clues` is the number of `Given` cells actually kept; it can exceed
/// `target_clues` when the carver ran out of attempts before reaching the
/// requested removal count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub puzzle: Board,
    pub solution: SolutionBoard,
    pub clues: usize,
    pub target_clues: usize,
}

impl GeneratedPuzzle {
    /// Whether the carver fell short of the requested removal count.
    pub fn is_partial(&self) -> bool {
        self.clues > self.target_clues
    }
}

/// Check if placing `val` at (row, col) is valid on a raw u8 grid
fn is_valid_placement(grid: &[[u8; 9]; 9], row: usize, col: usize, val: u8) -> bool {
    for c in 0..9 {
        if grid[row][c] == val {
            return false;
        }
    }
    for r in 0..9 {
        if grid[r][col] == val {
            return false;
        }
    }
    let box_r = (row / 3) * 3;
    let box_c = (col / 3) * 3;
    for r in box_r..box_r + 3 {
        for c in box_c..box_c + 3 {
            if grid[r][c] == val {
                return false;
            }
        }
    }
    true
}

/// Seed the three diagonal 3x3 boxes with independent shuffled permutations.
/// Diagonal boxes share no row or column, so they can never conflict.
fn fill_diagonal_boxes(grid: &mut [[u8; 9]; 9]) {
    let mut rng = rng();
    for band in 0..3 {
        let mut nums: Vec<u8> = (1..=9).collect();
        nums.shuffle(&mut rng);
        let start = band * 3;
        for (i, &n) in nums.iter().enumerate() {
            grid[start + i / 3][start + i % 3] = n;
        }
    }
}

/// Fill every remaining empty cell by backtracking in row-major order,
/// trying candidate values in shuffled order. Returns false when the cell
/// at the cursor admits no value, which undoes one placement up the stack.
fn fill_remaining(grid: &mut [[u8; 9]; 9], row: usize, col: usize) -> bool {
    let (row, col) = if col == 9 { (row + 1, 0) } else { (row, col) };
    if row == 9 {
        return true;
    }
    if grid[row][col] != 0 {
        return fill_remaining(grid, row, col + 1);
    }

    let mut rng = rng();
    let mut vals: Vec<u8> = (1..=9).collect();
    vals.shuffle(&mut rng);
    for val in vals {
        if is_valid_placement(grid, row, col, val) {
            grid[row][col] = val;
            if fill_remaining(grid, row, col + 1) {
                return true;
            }
            grid[row][col] = 0;
        }
    }
    false
}

/// Generate a complete valid solution grid, retrying the whole fill a
/// bounded number of times before reporting failure.
pub fn generate_solution() -> Result<SolutionBoard, GenerateError> {
    for attempt in 1..=MAX_FILL_ATTEMPTS {
        debug!("grid fill attempt {attempt}");
        let mut grid = [[0u8; 9]; 9];
        fill_diagonal_boxes(&mut grid);
        if fill_remaining(&mut grid, 0, 0) {
            return Ok(grid);
        }
    }
    Err(GenerateError::FillFailed)
}

/// Remove up to `cells_to_remove` cells from a copy of the solution.
///
/// A removal is kept only if the emptied cell still has exactly one legal
/// value given its row, column, and box. That is a cheap local proxy, not a
/// uniqueness check: the finished puzzle can still admit multiple global
/// solutions. Returns the carved grid and how many cells were removed.
fn carve(solution: &SolutionBoard, cells_to_remove: usize) -> ([[u8; 9]; 9], usize) {
    let mut rng = rng();
    let mut grid = *solution;
    let mut remaining = cells_to_remove;
    let mut attempts = 0;

    while remaining > 0 && attempts < CARVE_ATTEMPT_BUDGET {
        attempts += 1;
        let idx = rng.random_range(0..81);
        let (row, col) = (idx / 9, idx % 9);
        if grid[row][col] == 0 {
            continue;
        }

        let backup = grid[row][col];
        grid[row][col] = 0;

        let legal = (1..=9)
            .filter(|&v| is_valid_placement(&grid, row, col, v))
            .count();
        if legal > 1 {
            grid[row][col] = backup;
        } else {
            remaining -= 1;
        }
    }

    // Keep the top-left corner occupied: restore its own digit and drop the
    // first other clue instead. Givens must keep matching the solution.
    if grid[0][0] == 0 {
        'scan: for r in 0..9 {
            for c in 0..9 {
                if grid[r][c] != 0 {
                    grid[0][0] = solution[0][0];
                    grid[r][c] = 0;
                    break 'scan;
                }
            }
        }
    }

    (grid, cells_to_remove - remaining)
}

/// Generate a puzzle and its solution for the given difficulty.
///
/// The difficulty selects how many clues to keep; the carver removes the
/// rest on a best-effort basis. A shortfall is reported through
/// [`GeneratedPuzzle::is_partial`], not as an error.
pub fn generate_puzzle(difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
    let solution = generate_solution()?;

    let target_clues = difficulty.clues();
    let (grid, removed) = carve(&solution, 81 - target_clues);
    let clues = 81 - removed;
    if clues > target_clues {
        warn!(
            "carve stopped early: removed {removed} of {} cells, keeping {clues} clues",
            81 - target_clues
        );
    }

    let mut puzzle = [[Cell::Empty; 9]; 9];
    for r in 0..9 {
        for c in 0..9 {
            if grid[r][c] != 0 {
                puzzle[r][c] = Cell::Given(grid[r][c]);
            }
        }
    }

    Ok(GeneratedPuzzle {
        puzzle,
        solution,
        clues,
        target_clues,
    })
}
