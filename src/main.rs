use std::cmp::Reverse;
use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;
use std::rc::Rc;

use wordskein::{init_logger, Dictionary, PuzzleBoard};

/// 3x3 demo grid, row-major:
///   s t o
///   e n a
///   r e d
const DEMO_BOARD: &str = "stoenared";

fn demo_words() -> Vec<&'static str> {
    vec!["stone", "tend", "dent", "read", "rend", "dear", "dare"]
}

fn main() -> ExitCode {
    init_logger(false);
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let dict = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("failed to read word list {path}: {e}"))?;
            Rc::new(Dictionary::new(text.split_whitespace()))
        }
        None => Rc::new(Dictionary::new(demo_words())),
    };
    println!("Dictionary: {} words indexed", dict.len());

    let mut puzzle = PuzzleBoard::with_size(dict, 3, 3)?;
    puzzle.set_board(DEMO_BOARD)?;

    puzzle.find_all_words();
    println!("\nFound {} words:", puzzle.found_words_amount());
    let mut order: Vec<usize> = (0..puzzle.found_words_amount()).collect();
    order.sort_by_key(|&i| Reverse(puzzle.found_word(i).map_or(0, |w| w.len())));
    for i in order {
        if let Some(w) = puzzle.found_word(i) {
            if let Some(start) = w.path().first() {
                println!("  {:<12} starting at ({}, {})", w.word(), start.x, start.y);
            }
        }
    }

    puzzle.find_solution_from_words();
    println!("\n{} exact cover(s):", puzzle.solution_amount());
    for i in 0..puzzle.solution_amount() {
        println!("  #{i} {}", puzzle.solution_json(i)?);
        for &idx in puzzle.solution(i)? {
            if let Some(w) = puzzle.found_word(idx) {
                println!("     {}", w.word());
            }
        }
    }

    // descramble the bottom-right corner as a hint region
    for (x, y) in [(2, 1), (0, 2), (1, 2), (2, 2)] {
        puzzle.set_hint_coor(x, y, true)?;
    }
    puzzle.get_hints();
    println!("\nHint candidates for the marked cells:");
    for i in 0..puzzle.hints_amount() {
        if let Some(w) = puzzle.hint(i) {
            println!("  {}", w.word());
        }
    }

    Ok(())
}
