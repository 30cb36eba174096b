//! Descrambles the hint region: dictionary words spelled by exactly the
//! letters on hint-marked cells, each letter used once.
//!
//! Hint candidates are not adjacency paths. Their coordinates are a
//! deterministic assignment onto the hint cells: each letter of the word
//! claims the first unclaimed hint cell, in row-major scan order, that
//! carries it. The assignment always completes because the multisets match.

use crate::board::{Board, Coord};
use crate::dictionary::Dictionary;
use crate::puzzle_word::PuzzleWord;

/// Anagram candidates for the current hint region, in dictionary order.
pub fn find_hints(board: &Board, dict: &Dictionary) -> Vec<PuzzleWord> {
    let cells = board.hint_cells();
    if cells.is_empty() {
        return Vec::new();
    }
    let letters: Vec<u8> = cells
        .iter()
        .map(|c| board.letter(c.x as usize, c.y as usize))
        .collect();
    let text: String = letters.iter().map(|&b| char::from(b)).collect();

    let mut hints = Vec::new();
    for word in dict.anagrams_of(&text) {
        if let Some(path) = assign_path(word, &cells, &letters) {
            hints.push(PuzzleWord::new(
                word.to_string(),
                path,
                board.width(),
                board.height(),
            ));
        }
    }
    log::debug!(
        "hint search over {} cells produced {} candidates",
        cells.len(),
        hints.len()
    );
    hints
}

fn assign_path(word: &str, cells: &[Coord], letters: &[u8]) -> Option<Vec<Coord>> {
    let mut claimed = vec![false; cells.len()];
    let mut path = Vec::with_capacity(word.len());
    for b in word.bytes() {
        let slot = letters
            .iter()
            .zip(claimed.iter())
            .position(|(&l, &taken)| l == b && !taken)?;
        claimed[slot] = true;
        path.push(cells[slot]);
    }
    Some(path)
}
