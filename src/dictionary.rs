//! Read-only word index: membership, prefix existence, and anagram lookup.
//!
//! Built once from a word list at startup and never mutated afterwards. The
//! core is a flat-vector trie over the 26-letter alphabet; searches descend
//! it one letter at a time through a copyable [`TrieCursor`], so a dead
//! prefix is detected in O(1) per letter. Anagram queries go through a
//! secondary index keyed by the sorted-letter signature of each word.

use hashbrown::HashMap;

/// Words shorter than this are never indexed, found, or offered as hints.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

const ALPHABET: usize = 26;

#[derive(Clone)]
struct TrieNode {
    /// Child node ids, 0 meaning "no child" (the root is node 0 and is never a child).
    children: [u32; ALPHABET],
    terminal: bool,
}

impl TrieNode {
    fn empty() -> Self {
        TrieNode {
            children: [0; ALPHABET],
            terminal: false,
        }
    }
}

/// Position inside the trie, advanced with [`Dictionary::descend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieCursor(u32);

fn letter_index(b: u8) -> usize {
    (b - b'a') as usize
}

/// Sorted-letter signature of a letter multiset.
pub(crate) fn signature(letters: &[u8]) -> Vec<u8> {
    let mut sig = letters.to_vec();
    sig.sort_unstable();
    sig
}

pub struct Dictionary {
    min_word_len: usize,
    nodes: Vec<TrieNode>,
    /// Indexed words in insertion order, lowercase.
    words: Vec<String>,
    by_length: HashMap<usize, Vec<u32>>,
    anagrams: HashMap<Box<[u8]>, Vec<u32>>,
}

impl Dictionary {
    /// Build an index with the default minimum word length.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_min_word_len(words, DEFAULT_MIN_WORD_LEN)
    }

    /// Build an index that only admits words of at least `min_word_len` letters.
    ///
    /// Entries are lowercased; entries that are too short or contain anything
    /// other than ASCII letters are skipped, and duplicates are kept once.
    pub fn with_min_word_len<I, S>(words: I, min_word_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Dictionary {
            min_word_len,
            nodes: vec![TrieNode::empty()],
            words: Vec::new(),
            by_length: HashMap::new(),
            anagrams: HashMap::new(),
        };

        let mut skipped = 0usize;
        for raw in words {
            let trimmed = raw.as_ref().trim();
            if trimmed.len() < min_word_len
                || !trimmed.bytes().all(|b| b.is_ascii_alphabetic())
            {
                skipped += 1;
                continue;
            }
            dict.insert(&trimmed.to_ascii_lowercase());
        }

        log::debug!(
            "dictionary indexed {} words ({} entries skipped), {} trie nodes",
            dict.words.len(),
            skipped,
            dict.nodes.len()
        );
        dict
    }

    fn insert(&mut self, word: &str) {
        let mut node = 0usize;
        for b in word.bytes() {
            let slot = letter_index(b);
            let next = self.nodes[node].children[slot];
            node = if next == 0 {
                let id = self.nodes.len() as u32;
                self.nodes.push(TrieNode::empty());
                self.nodes[node].children[slot] = id;
                id as usize
            } else {
                next as usize
            };
        }
        if self.nodes[node].terminal {
            // duplicate entry
            return;
        }
        self.nodes[node].terminal = true;

        let idx = self.words.len() as u32;
        self.by_length.entry(word.len()).or_default().push(idx);
        self.anagrams
            .entry(signature(word.as_bytes()).into_boxed_slice())
            .or_default()
            .push(idx);
        self.words.push(word.to_string());
    }

    /// Minimum indexable word length.
    pub fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn walk(&self, s: &str) -> Option<usize> {
        let mut node = 0usize;
        for b in s.bytes() {
            if !b.is_ascii_lowercase() {
                return None;
            }
            let next = self.nodes[node].children[letter_index(b)];
            if next == 0 {
                return None;
            }
            node = next as usize;
        }
        Some(node)
    }

    /// Whether `word` (lowercase) is an indexed word.
    pub fn contains(&self, word: &str) -> bool {
        word.len() >= self.min_word_len
            && self.walk(word).is_some_and(|n| self.nodes[n].terminal)
    }

    /// Whether `prefix` (lowercase) begins at least one indexed word.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Cursor at the trie root, for incremental descent.
    pub fn cursor(&self) -> TrieCursor {
        TrieCursor(0)
    }

    /// Advance one lowercase letter; `None` means no indexed word continues here.
    pub fn descend(&self, cursor: TrieCursor, letter: u8) -> Option<TrieCursor> {
        debug_assert!(letter.is_ascii_lowercase());
        let next = self.nodes[cursor.0 as usize].children[letter_index(letter)];
        (next != 0).then_some(TrieCursor(next))
    }

    /// Whether the cursor sits on a full word of admissible length.
    pub fn is_word_at(&self, cursor: TrieCursor, len: usize) -> bool {
        len >= self.min_word_len && self.nodes[cursor.0 as usize].terminal
    }

    /// All indexed words of exactly `n` letters, in insertion order.
    pub fn words_of_length(&self, n: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .get(&n)
            .into_iter()
            .flatten()
            .map(move |&i| self.words[i as usize].as_str())
    }

    /// All indexed words spelled with exactly the letters of `letters`
    /// (as a multiset, every letter used once), in insertion order.
    pub fn anagrams_of(&self, letters: &str) -> impl Iterator<Item = &str> {
        let sig = signature(letters.to_ascii_lowercase().as_bytes());
        self.anagrams
            .get(sig.as_slice())
            .into_iter()
            .flatten()
            .map(move |&i| self.words[i as usize].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().copied())
    }

    #[test]
    fn membership_and_prefixes() {
        let d = dict(&["cats", "cart", "carts"]);
        assert!(d.contains("cats"));
        assert!(d.contains("carts"));
        assert!(!d.contains("ca"));
        assert!(!d.contains("cat")); // below the minimum length
        assert!(d.has_prefix("ca"));
        assert!(d.has_prefix("cart"));
        assert!(!d.has_prefix("cb"));
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn short_and_malformed_entries_are_skipped() {
        let d = dict(&["eat", "it", "café", "hello world", "slate"]);
        assert_eq!(d.len(), 1);
        assert!(d.contains("slate"));
        assert!(!d.has_prefix("e"));
    }

    #[test]
    fn entries_are_lowercased_and_deduplicated() {
        let d = dict(&["Stone", "stone", "STONE"]);
        assert_eq!(d.len(), 1);
        assert!(d.contains("stone"));
        // queries are expected in lowercase
        assert!(!d.contains("Stone"));
    }

    #[test]
    fn cursor_descent_matches_prefix_test() {
        let d = dict(&["stone", "stove"]);
        let mut cursor = d.cursor();
        for (i, b) in b"ston".iter().enumerate() {
            cursor = d.descend(cursor, *b).unwrap();
            assert!(!d.is_word_at(cursor, i + 1));
        }
        let end = d.descend(cursor, b'e').unwrap();
        assert!(d.is_word_at(end, 5));
        assert!(d.descend(cursor, b'x').is_none());
    }

    #[test]
    fn words_of_length_groups_by_size() {
        let d = dict(&["stone", "cats", "tacs", "stove"]);
        let fours: Vec<_> = d.words_of_length(4).collect();
        assert_eq!(fours, vec!["cats", "tacs"]);
        assert_eq!(d.words_of_length(7).count(), 0);
    }

    #[test]
    fn anagram_lookup_uses_exact_multisets() {
        let d = dict(&["stone", "notes", "onset", "tones", "stono"]);
        let hits: Vec<_> = d.anagrams_of("tnoes").collect();
        assert_eq!(hits, vec!["stone", "notes", "onset", "tones"]);
        // one letter off is not a match
        assert_eq!(d.anagrams_of("tnoe").count(), 0);
        assert_eq!(d.anagrams_of("tnoess").count(), 0);
    }

    #[test]
    fn configurable_minimum_length() {
        let d = Dictionary::with_min_word_len(["eat", "tea"], 3);
        assert!(d.contains("eat"));
        let hits: Vec<_> = d.anagrams_of("aet").collect();
        assert_eq!(hits, vec!["eat", "tea"]);
    }
}
