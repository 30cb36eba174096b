//! The board facade: composes the grid state, the dictionary index, and the
//! three searches, and owns every result collection.
//!
//! Each search rebuilds its collection from scratch, so results from a
//! superseded run must not be read again. Rather than leaving that undefined,
//! collections carry a generation counter: [`WordToken`] handles and solution
//! accessors fail with [`SolverError::UseAfterInvalidate`] once the
//! collection they point into has been rebuilt.

use std::rc::Rc;

use crate::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::cover;
use crate::dictionary::Dictionary;
use crate::errors::SolverError;
use crate::finder;
use crate::hints;
use crate::puzzle_word::PuzzleWord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Found,
    Hint,
}

/// Stable handle to one entry of a result collection, valid until the same
/// kind of search runs again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken {
    collection: Collection,
    index: usize,
    generation: u64,
}

/// A puzzle board instance with its result collections.
pub struct PuzzleBoard {
    dict: Rc<Dictionary>,
    board: Board,
    found: Vec<PuzzleWord>,
    found_gen: u64,
    solutions: Vec<Vec<usize>>,
    /// Found-word generation the solutions were computed against.
    solved_against: Option<u64>,
    hints: Vec<PuzzleWord>,
    hints_gen: u64,
}

impl PuzzleBoard {
    /// A board with the default 6x8 dimensions.
    pub fn new(dict: Rc<Dictionary>) -> Result<Self, SolverError> {
        Self::with_size(dict, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(
        dict: Rc<Dictionary>,
        width: usize,
        height: usize,
    ) -> Result<Self, SolverError> {
        Ok(PuzzleBoard {
            dict,
            board: Board::new(width, height)?,
            found: Vec::new(),
            found_gen: 0,
            solutions: Vec::new(),
            solved_against: None,
            hints: Vec::new(),
            hints_gen: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Replace the letters; the `used`/`hint` masks are left as they are.
    pub fn set_board(&mut self, text: &str) -> Result<(), SolverError> {
        self.board.set_board(text)
    }

    pub fn set_used(&mut self, x: usize, y: usize, flag: bool) -> Result<(), SolverError> {
        self.board.set_used(x, y, flag)
    }

    pub fn set_hint_coor(&mut self, x: usize, y: usize, flag: bool) -> Result<(), SolverError> {
        self.board.set_hint(x, y, flag)
    }

    /// Rebuild the found-word collection, invalidating all previously handed
    /// out found-word tokens and any computed solutions.
    pub fn find_all_words(&mut self) {
        self.found = finder::find_all_words(&self.board, &self.dict);
        self.found_gen += 1;
    }

    /// Search for exact covers of the non-used, non-hint cells by the current
    /// found words. By far the most expensive operation; callers should gate
    /// it behind an explicit user action.
    pub fn find_solution_from_words(&mut self) {
        let target = self.board.target_cells();
        log::info!(
            "cover search over {} found words, {} target cells",
            self.found.len(),
            target.count_ones()
        );
        self.solutions = cover::find_exact_covers(target, &self.found);
        self.solved_against = Some(self.found_gen);
    }

    /// Rebuild the hint-candidate collection from the hint-masked letters.
    pub fn get_hints(&mut self) {
        self.hints = hints::find_hints(&self.board, &self.dict);
        self.hints_gen += 1;
    }

    pub fn found_words_amount(&self) -> usize {
        self.found.len()
    }

    pub fn found_word(&self, index: usize) -> Option<&PuzzleWord> {
        self.found.get(index)
    }

    pub fn hints_amount(&self) -> usize {
        self.hints.len()
    }

    pub fn hint(&self, index: usize) -> Option<&PuzzleWord> {
        self.hints.get(index)
    }

    pub fn solution_amount(&self) -> usize {
        self.solutions.len()
    }

    /// Indices into the found-word collection that was current at solve time.
    ///
    /// Fails with `UseAfterInvalidate` if `find_all_words` has run since the
    /// solutions were computed, because the indices would point into a
    /// rebuilt collection.
    pub fn solution(&self, index: usize) -> Result<&[usize], SolverError> {
        if let Some(generation) = self.solved_against {
            if generation != self.found_gen {
                return Err(SolverError::UseAfterInvalidate {
                    held: generation,
                    current: self.found_gen,
                });
            }
        }
        self.solutions
            .get(index)
            .map(Vec::as_slice)
            .ok_or(SolverError::IndexOutOfRange {
                index,
                len: self.solutions.len(),
            })
    }

    /// One solution as compact JSON text, e.g. `[0, 3, 7]`.
    pub fn solution_json(&self, index: usize) -> Result<String, SolverError> {
        let indices = self.solution(index)?;
        let mut json = String::from("[");
        for (i, idx) in indices.iter().enumerate() {
            if i > 0 {
                json.push_str(", ");
            }
            json.push_str(&idx.to_string());
        }
        json.push(']');
        Ok(json)
    }

    pub fn found_word_token(&self, index: usize) -> Result<WordToken, SolverError> {
        if index >= self.found.len() {
            return Err(SolverError::IndexOutOfRange {
                index,
                len: self.found.len(),
            });
        }
        Ok(WordToken {
            collection: Collection::Found,
            index,
            generation: self.found_gen,
        })
    }

    pub fn hint_token(&self, index: usize) -> Result<WordToken, SolverError> {
        if index >= self.hints.len() {
            return Err(SolverError::IndexOutOfRange {
                index,
                len: self.hints.len(),
            });
        }
        Ok(WordToken {
            collection: Collection::Hint,
            index,
            generation: self.hints_gen,
        })
    }

    /// Resolve a token, refusing handles from a superseded search.
    pub fn word(&self, token: WordToken) -> Result<&PuzzleWord, SolverError> {
        let (current, collection) = match token.collection {
            Collection::Found => (self.found_gen, &self.found),
            Collection::Hint => (self.hints_gen, &self.hints),
        };
        if token.generation != current {
            return Err(SolverError::UseAfterInvalidate {
                held: token.generation,
                current,
            });
        }
        collection
            .get(token.index)
            .ok_or(SolverError::IndexOutOfRange {
                index: token.index,
                len: collection.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(width: usize, height: usize, text: &str, words: &[&str]) -> PuzzleBoard {
        let dict = Rc::new(Dictionary::new(words.iter().copied()));
        let mut p = PuzzleBoard::with_size(dict, width, height).unwrap();
        p.set_board(text).unwrap();
        p
    }

    #[test]
    fn defaults_to_a_6x8_board() {
        let p = PuzzleBoard::new(Rc::new(Dictionary::new(["word"]))).unwrap();
        assert_eq!(p.width(), 6);
        assert_eq!(p.height(), 8);
    }

    #[test]
    fn full_solve_workflow() {
        let mut p = puzzle(4, 2, "mazelion", &["maze", "lion"]);
        p.find_all_words();
        assert_eq!(p.found_words_amount(), 2);
        assert_eq!(p.found_word(0).unwrap().word(), "maze");
        assert_eq!(p.found_word(1).unwrap().word(), "lion");

        p.find_solution_from_words();
        assert_eq!(p.solution_amount(), 1);
        assert_eq!(p.solution(0).unwrap(), &[0, 1]);
        assert_eq!(p.solution_json(0).unwrap(), "[0, 1]");
    }

    #[test]
    fn hint_cells_are_excluded_from_the_cover_target() {
        let mut p = puzzle(4, 2, "mazelion", &["maze", "lion"]);
        for x in 0..4 {
            p.set_hint_coor(x, 1, true).unwrap();
        }
        p.find_all_words();
        assert_eq!(p.found_words_amount(), 2);

        p.find_solution_from_words();
        assert_eq!(p.solution_amount(), 1);
        assert_eq!(p.solution(0).unwrap(), &[0]);

        p.get_hints();
        assert_eq!(p.hints_amount(), 1);
        assert_eq!(p.hint(0).unwrap().word(), "lion");
    }

    #[test]
    fn resolving_words_through_tokens() {
        let mut p = puzzle(4, 2, "mazelion", &["maze", "lion"]);
        p.find_all_words();
        let token = p.found_word_token(1).unwrap();
        assert_eq!(p.word(token).unwrap().word(), "lion");
        assert!(matches!(
            p.found_word_token(2),
            Err(SolverError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn rerunning_the_search_invalidates_tokens() {
        let mut p = puzzle(4, 2, "mazelion", &["maze", "lion"]);
        p.find_all_words();
        let stale = p.found_word_token(0).unwrap();
        p.find_all_words();
        assert!(matches!(
            p.word(stale),
            Err(SolverError::UseAfterInvalidate { .. })
        ));
        let fresh = p.found_word_token(0).unwrap();
        assert_eq!(p.word(fresh).unwrap().word(), "maze");
    }

    #[test]
    fn rerunning_find_all_words_invalidates_solutions() {
        let mut p = puzzle(4, 2, "mazelion", &["maze", "lion"]);
        p.find_all_words();
        p.find_solution_from_words();
        assert!(p.solution(0).is_ok());

        p.find_all_words();
        assert!(matches!(
            p.solution(0),
            Err(SolverError::UseAfterInvalidate { .. })
        ));

        // solving again against the fresh collection recovers
        p.find_solution_from_words();
        assert_eq!(p.solution(0).unwrap(), &[0, 1]);
    }

    #[test]
    fn solution_access_before_solving_is_out_of_range() {
        let mut p = puzzle(4, 2, "mazelion", &["maze", "lion"]);
        p.find_all_words();
        assert!(matches!(
            p.solution(0),
            Err(SolverError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn mutator_errors_pass_through() {
        let mut p = puzzle(4, 2, "mazelion", &["maze"]);
        assert!(matches!(
            p.set_board("short"),
            Err(SolverError::InvalidBoardSize { .. })
        ));
        assert!(matches!(
            p.set_used(4, 0, true),
            Err(SolverError::OutOfBounds { .. })
        ));
        assert!(matches!(
            p.set_hint_coor(0, 2, true),
            Err(SolverError::OutOfBounds { .. })
        ));
    }
}
