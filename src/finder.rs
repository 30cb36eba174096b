//! Depth-first word search over the board.
//!
//! Every cell not marked used starts a search; each step extends the path to
//! an unvisited, unused 8-neighbour while descending the dictionary trie, so
//! a branch dies the moment its letters stop being a prefix of any word. The
//! neighbour visitation order is fixed (clockwise starting due north), which
//! makes the discovery order, and therefore the result collection, fully
//! deterministic for unchanged board state.

use smallvec::SmallVec;

use crate::board::{Board, CellSet, Coord};
use crate::dictionary::{Dictionary, TrieCursor};
use crate::puzzle_word::PuzzleWord;

/// Neighbour offsets, clockwise from due north.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Find every dictionary word spelled by a path of adjacent, non-repeated,
/// non-used cells. Distinct paths spelling the same text are distinct
/// entries, in discovery order.
pub fn find_all_words(board: &Board, dict: &Dictionary) -> Vec<PuzzleWord> {
    let mut search = Search {
        board,
        dict,
        visited: 0,
        letters: SmallVec::new(),
        path: SmallVec::new(),
        found: Vec::new(),
    };
    for y in 0..board.height() {
        for x in 0..board.width() {
            search.extend(x, y, dict.cursor());
        }
    }
    log::debug!(
        "word search over {}x{} board found {} words",
        board.width(),
        board.height(),
        search.found.len()
    );
    search.found
}

struct Search<'a> {
    board: &'a Board,
    dict: &'a Dictionary,
    visited: CellSet,
    /// Scratch buffers reused across branches; paths are copied out on a hit.
    letters: SmallVec<[u8; 32]>,
    path: SmallVec<[Coord; 32]>,
    found: Vec<PuzzleWord>,
}

impl Search<'_> {
    fn extend(&mut self, x: usize, y: usize, cursor: TrieCursor) {
        let bit: CellSet = 1 << self.board.index(x, y);
        if self.board.is_used(x, y) || self.visited & bit != 0 {
            return;
        }
        let letter = self.board.letter(x, y);
        let Some(cursor) = self.dict.descend(cursor, letter) else {
            // no dictionary word continues with this letter
            return;
        };

        self.visited |= bit;
        self.letters.push(letter);
        self.path.push(Coord::new(x, y));

        if self.dict.is_word_at(cursor, self.letters.len()) {
            let word: String = self.letters.iter().map(|&b| char::from(b)).collect();
            self.found.push(PuzzleWord::new(
                word,
                self.path.to_vec(),
                self.board.width(),
                self.board.height(),
            ));
        }

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx >= 0 && ny >= 0 && self.board.in_bounds(nx as usize, ny as usize) {
                self.extend(nx as usize, ny as usize, cursor);
            }
        }

        self.path.pop();
        self.letters.pop();
        self.visited &= !bit;
    }
}
