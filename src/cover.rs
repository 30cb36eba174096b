//! Exact-cover search over the found-word collection.
//!
//! Looks for every selection of found words, by strictly ascending index,
//! whose cells partition the target set exactly: no overlap between chosen
//! words, every target cell covered, no chosen word reaching outside the
//! target. This is the expensive operation of the engine; it runs to
//! exhaustion of the pruned search space.

use crate::board::CellSet;
use crate::puzzle_word::PuzzleWord;

/// Find every exact cover of `target` by `words`, as ascending index lists
/// into `words`, in discovery order.
pub fn find_exact_covers(target: CellSet, words: &[PuzzleWord]) -> Vec<Vec<usize>> {
    // Words reaching outside the target can never participate.
    let candidates: Vec<(usize, CellSet, usize)> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.cells() & !target == 0)
        .map(|(i, w)| (i, w.cells(), w.len()))
        .collect();

    // suffix_capacity[i]: most cells the candidates from i onward can still
    // supply; once it drops below the uncovered count the branch is dead.
    let mut suffix_capacity = vec![0usize; candidates.len() + 1];
    for i in (0..candidates.len()).rev() {
        suffix_capacity[i] = suffix_capacity[i + 1] + candidates[i].2;
    }

    let mut search = Cover {
        target,
        candidates,
        suffix_capacity,
        chosen: Vec::new(),
        out: Vec::new(),
    };
    search.recurse(0, 0);
    log::debug!(
        "cover search: {} candidate words, {} exact covers",
        search.candidates.len(),
        search.out.len()
    );
    search.out
}

struct Cover {
    target: CellSet,
    candidates: Vec<(usize, CellSet, usize)>,
    suffix_capacity: Vec<usize>,
    chosen: Vec<usize>,
    out: Vec<Vec<usize>>,
}

impl Cover {
    fn recurse(&mut self, from: usize, covered: CellSet) {
        if covered == self.target {
            self.out.push(self.chosen.clone());
            return;
        }
        let needed = (self.target & !covered).count_ones() as usize;
        for i in from..self.candidates.len() {
            if self.suffix_capacity[i] < needed {
                break;
            }
            let (index, cells, _) = self.candidates[i];
            if cells & covered != 0 {
                continue;
            }
            self.chosen.push(index);
            self.recurse(i + 1, covered | cells);
            self.chosen.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    fn word(text: &str, path: &[(usize, usize)]) -> PuzzleWord {
        PuzzleWord::new(
            text.to_string(),
            path.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
            4,
            4,
        )
    }

    fn row(text: &str, y: usize) -> PuzzleWord {
        let path: Vec<(usize, usize)> = (0..text.len()).map(|x| (x, y)).collect();
        word(text, &path)
    }

    #[test]
    fn two_disjoint_words_cover_the_target_once() {
        let words = vec![row("maze", 0), row("lion", 1)];
        let target = words[0].cells() | words[1].cells();
        assert_eq!(find_exact_covers(target, &words), vec![vec![0, 1]]);
    }

    #[test]
    fn overlapping_words_never_combine() {
        let a = word("tone", &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let b = word("note", &[(3, 0), (2, 0), (1, 0), (0, 0)]);
        let target = a.cells();
        let covers = find_exact_covers(target, &[a, b]);
        // either word alone is an exact cover, but not both together
        assert_eq!(covers, vec![vec![0], vec![1]]);
    }

    #[test]
    fn words_outside_the_target_are_excluded() {
        let inside = row("maze", 0);
        let outside = row("lion", 1);
        let target = inside.cells();
        let covers = find_exact_covers(target, &[outside.clone(), inside.clone()]);
        assert_eq!(covers, vec![vec![1]]);
    }

    #[test]
    fn partial_coverage_is_not_a_solution() {
        let a = row("maze", 0);
        let target = a.cells() | row("lion", 1).cells();
        assert!(find_exact_covers(target, &[a]).is_empty());
    }

    #[test]
    fn covers_appear_in_ascending_index_discovery_order() {
        let a = row("ta", 0); // cells (0,0) (1,0)
        let b = word("le", &[(2, 0), (3, 0)]);
        let c = row("tale", 0);
        let target = c.cells();
        let covers = find_exact_covers(target, &[a, b, c]);
        assert_eq!(covers, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn empty_target_has_the_empty_cover() {
        let covers = find_exact_covers(0, &[row("maze", 0)]);
        assert_eq!(covers, vec![Vec::<usize>::new()]);
    }
}
