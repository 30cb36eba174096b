//! Error types for board mutation and result access.
//!
//! Mutators report problems synchronously and never corrupt existing state:
//! a rejected `set_board` leaves the previous letters in place. Searches on a
//! well-formed board do not fail; an empty result collection is the normal
//! representation of "nothing found".

/// Errors produced by the puzzle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// `set_board` received text whose length does not match the grid.
    #[error("board text has {got} letters, expected {expected} for a {width}x{height} board")]
    InvalidBoardSize {
        got: usize,
        expected: usize,
        width: usize,
        height: usize,
    },

    /// `set_board` received a character that is not an alphabetic letter.
    #[error("invalid character {ch:?} at offset {offset}; only letters a-z are allowed")]
    InvalidCharacter { ch: char, offset: usize },

    /// A per-cell operation was given coordinates outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Board construction with a zero or oversized grid.
    #[error("unsupported board dimensions {width}x{height}; area must be 1..={max_area}")]
    UnsupportedDimensions {
        width: usize,
        height: usize,
        max_area: usize,
    },

    /// A result index beyond the current collection.
    #[error("index {index} out of range for a collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A result handle from a superseded search was dereferenced.
    #[error("stale result handle: produced by search generation {held}, current generation is {current}")]
    UseAfterInvalidate { held: u64, current: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = SolverError::InvalidBoardSize {
            got: 10,
            expected: 48,
            width: 6,
            height: 8,
        };
        assert!(e.to_string().contains("10"));
        assert!(e.to_string().contains("6x8"));

        let e = SolverError::InvalidCharacter { ch: '!', offset: 3 };
        assert!(e.to_string().contains("'!'"));

        let e = SolverError::UseAfterInvalidate { held: 1, current: 2 };
        assert!(e.to_string().contains("generation 1"));
    }
}
