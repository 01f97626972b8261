//! Generate one puzzle and print it alongside its solution.
//!
//! ```sh
//! cargo run --example generate -- --difficulty hard
//! ```

use std::process;

use clap::Parser;
use sudoku_gen::{Board, Difficulty, SolutionBoard, generate_puzzle};

#[derive(Debug, Parser)]
#[command(about = "Generate a Sudoku puzzle and print it with its solution")]
struct Args {
    /// Difficulty: easy, normal, or hard.
    #[arg(long, default_value = "normal")]
    difficulty: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let difficulty = match args.difficulty.as_str() {
        "easy" => Difficulty::Easy,
        "normal" => Difficulty::Normal,
        "hard" => Difficulty::Hard,
        other => {
            eprintln!("Unknown difficulty: {other} (expected easy, normal, or hard)");
            process::exit(2);
        }
    };

    let generated = match generate_puzzle(difficulty) {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Difficulty: {}", difficulty.label());
    println!(
        "Clues: {} (target {})",
        generated.clues, generated.target_clues
    );
    println!();
    println!("Puzzle:");
    print_puzzle(&generated.puzzle);
    println!();
    println!("Solution:");
    print_solution(&generated.solution);
}

fn print_puzzle(board: &Board) {
    for row in board {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell.value() {
                Some(v) => v.to_string(),
                None => ".".to_string(),
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}

fn print_solution(solution: &SolutionBoard) {
    for row in solution {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("  {}", line.join(" "));
    }
}
