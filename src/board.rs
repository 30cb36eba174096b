//! Mutable grid state: letters plus the `used` and `hint` cell masks.

use serde::Serialize;

use crate::errors::SolverError;

/// Default grid dimensions when none are requested.
pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 8;

/// Largest supported board area; one bit per cell must fit in a [`CellSet`].
pub const MAX_BOARD_AREA: usize = 128;

/// Set of cells as a bitmask, one bit per cell in row-major order.
pub type CellSet = u128;

/// A grid position. `x` runs along a row, `y` down the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord {
            x: x as u8,
            y: y as u8,
        }
    }
}

/// The letter grid with its two independent cell masks.
///
/// `used` marks cells already claimed by the player and excluded from every
/// search; `hint` marks the reserved descramble region. Replacing the letters
/// with [`Board::set_board`] leaves both masks untouched.
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major ASCII lowercase letters, `width * height` of them.
    letters: Vec<u8>,
    used: Vec<bool>,
    hint: Vec<bool>,
}

impl Board {
    /// Create a board of the requested size, filled with `'a'` until
    /// [`Board::set_board`] supplies real letters.
    pub fn new(width: usize, height: usize) -> Result<Self, SolverError> {
        let area = width * height;
        if width == 0 || height == 0 || area > MAX_BOARD_AREA {
            return Err(SolverError::UnsupportedDimensions {
                width,
                height,
                max_area: MAX_BOARD_AREA,
            });
        }
        Ok(Board {
            width,
            height,
            letters: vec![b'a'; area],
            used: vec![false; area],
            hint: vec![false; area],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major cell index.
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + self.width * y
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), SolverError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(SolverError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Replace every letter from `text`, row-major, case-insensitively.
    ///
    /// The whole text is validated before anything is written, so a rejected
    /// call leaves the previous letters intact. The masks are not cleared.
    pub fn set_board(&mut self, text: &str) -> Result<(), SolverError> {
        let bytes = text.as_bytes();
        if bytes.len() != self.area() {
            return Err(SolverError::InvalidBoardSize {
                got: bytes.len(),
                expected: self.area(),
                width: self.width,
                height: self.height,
            });
        }
        for (offset, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(SolverError::InvalidCharacter {
                    ch: text[offset..].chars().next().unwrap_or(b as char),
                    offset,
                });
            }
        }
        for (cell, &b) in self.letters.iter_mut().zip(bytes) {
            *cell = b.to_ascii_lowercase();
        }
        Ok(())
    }

    /// Letter at a cell, assumed in bounds.
    pub fn letter(&self, x: usize, y: usize) -> u8 {
        self.letters[self.index(x, y)]
    }

    pub fn is_used(&self, x: usize, y: usize) -> bool {
        self.used[self.index(x, y)]
    }

    pub fn is_hint(&self, x: usize, y: usize) -> bool {
        self.hint[self.index(x, y)]
    }

    pub fn set_used(&mut self, x: usize, y: usize, flag: bool) -> Result<(), SolverError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.used[idx] = flag;
        Ok(())
    }

    pub fn set_hint(&mut self, x: usize, y: usize, flag: bool) -> Result<(), SolverError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.hint[idx] = flag;
        Ok(())
    }

    /// Cells a solution must cover exactly: neither `used` nor `hint`.
    pub fn target_cells(&self) -> CellSet {
        let mut set: CellSet = 0;
        for idx in 0..self.area() {
            if !self.used[idx] && !self.hint[idx] {
                set |= 1 << idx;
            }
        }
        set
    }

    /// Hint-marked cells in row-major scan order.
    pub fn hint_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.hint[self.index(x, y)] {
                    cells.push(Coord::new(x, y));
                }
            }
        }
        cells
    }
}
