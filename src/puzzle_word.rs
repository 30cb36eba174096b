//! Immutable result value: a word together with the cells that spell it.

use crate::board::{CellSet, Coord};

/// A dictionary word realized on the board.
///
/// For found words the path is a chain of 8-adjacent, pairwise-distinct
/// cells, one per letter. For hint candidates the path is a deterministic
/// assignment of letters onto the hint region rather than an adjacency chain;
/// the lookup contract is the same either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    word: String,
    path: Vec<Coord>,
    cells: CellSet,
    width: usize,
    height: usize,
}

impl PuzzleWord {
    pub(crate) fn new(word: String, path: Vec<Coord>, width: usize, height: usize) -> Self {
        debug_assert_eq!(word.len(), path.len());
        let mut cells: CellSet = 0;
        for c in &path {
            cells |= 1 << (c.x as usize + width * c.y as usize);
        }
        PuzzleWord {
            word,
            path,
            cells,
            width,
            height,
        }
    }

    /// The spelled word, lowercase.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// One coordinate per letter, in spelling order.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Width of the board this word was found on.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the board this word was found on.
    pub fn height(&self) -> usize {
        self.height
    }

    /// 1-based position of a cell within the path, or 0 if the cell is not
    /// on the path. Lets a renderer draw the stroke between letters `n` and
    /// `n + 1`.
    pub fn coordinate(&self, x: usize, y: usize) -> usize {
        self.path
            .iter()
            .position(|c| c.x as usize == x && c.y as usize == y)
            .map_or(0, |i| i + 1)
    }

    /// Occupied cells as a bitmask.
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    /// Whether two words claim any common cell.
    pub fn overlaps(&self, other: &PuzzleWord) -> bool {
        self.cells & other.cells != 0
    }
}
