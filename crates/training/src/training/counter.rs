//! Pair counting for merge learning.
//!
//! Words are stored once per distinct spelling together with their number of
//! occurrences, so each counting pass touches every distinct word once while
//! still weighting pairs by corpus frequency.

use ahash::AHashMap;
use mergetok_core::{Pair, Vocabulary, Word};

/// Frequency of an adjacent pair and where it was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStats {
    /// Occurrences across the corpus, weighted by word frequency
    pub count: u64,
    /// (distinct word index, position) of the first occurrence in scan order
    pub first_seen: (usize, usize),
}

impl PairStats {
    fn absorb(&mut self, other: PairStats) {
        self.count += other.count;
        self.first_seen = self.first_seen.min(other.first_seen);
    }
}

/// Pair -> stats for one counting pass.
pub type PairCounts = AHashMap<Pair, PairStats>;

/// Counter for adjacent symbol-pair frequencies.
pub struct PairCounter {
    /// Distinct words as symbol IDs, in first-seen order
    words: Vec<Vec<u32>>,
    /// Occurrences of each distinct word
    word_counts: Vec<u64>,
    /// Word -> index into `words`
    index: AHashMap<Word, usize>,
}

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            word_counts: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Record one occurrence of `word`.
    ///
    /// Symbols of a word seen for the first time are registered in `vocab` in
    /// order, so the base alphabet is assigned IDs by first appearance.
    pub fn add_word(&mut self, word: Word, vocab: &mut Vocabulary) {
        if let Some(&pos) = self.index.get(&word) {
            self.word_counts[pos] += 1;
            return;
        }

        let ids: Vec<u32> = word.symbols().iter().map(|s| vocab.add_symbol(s)).collect();
        self.index.insert(word, self.words.len());
        self.words.push(ids);
        self.word_counts.push(1);
    }

    /// Count all pairs sequentially.
    pub fn count_pairs_sequential(&self) -> PairCounts {
        let mut pair_counts = PairCounts::new();

        for (idx, (word, &count)) in self.words.iter().zip(self.word_counts.iter()).enumerate() {
            count_word(&mut pair_counts, idx, word, count);
        }

        pair_counts
    }

    /// Count all pairs in parallel.
    ///
    /// Shard totals are summed and the earliest first occurrence is kept, so
    /// the result equals [`PairCounter::count_pairs_sequential`].
    pub fn count_pairs_parallel(&self) -> PairCounts {
        use rayon::prelude::*;

        self.words
            .par_iter()
            .zip(self.word_counts.par_iter())
            .enumerate()
            .fold(PairCounts::new, |mut acc, (idx, (word, &count))| {
                count_word(&mut acc, idx, word, count);
                acc
            })
            .reduce(PairCounts::new, |mut acc, shard| {
                for (pair, stats) in shard {
                    acc.entry(pair)
                        .and_modify(|s| s.absorb(stats))
                        .or_insert(stats);
                }
                acc
            })
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        self.word_counts.iter().sum()
    }

    /// Get a reference to the words.
    pub fn words(&self) -> &[Vec<u32>] {
        &self.words
    }

    /// Get a reference to the word counts.
    pub fn word_counts(&self) -> &[u64] {
        &self.word_counts
    }

    /// Replace every non-overlapping occurrence of `pair`, scanning left to
    /// right, with `new_id`.
    ///
    /// Scanning resumes after the merged symbol, so `a a a` with pair `(a, a)`
    /// becomes `aa a`. Returns the number of replacements, weighted by word
    /// frequency.
    pub fn merge_pair_in_words(&mut self, pair: Pair, new_id: u32) -> u64 {
        let mut replaced = 0;

        for (word, &count) in self.words.iter_mut().zip(self.word_counts.iter()) {
            if word.len() < 2 {
                continue;
            }

            let mut merged = Vec::with_capacity(word.len());
            let mut i = 0;
            while i < word.len() {
                if i + 1 < word.len() && word[i] == pair.0 && word[i + 1] == pair.1 {
                    merged.push(new_id);
                    replaced += count;
                    i += 2;
                } else {
                    merged.push(word[i]);
                    i += 1;
                }
            }
            *word = merged;
        }

        replaced
    }
}

impl Default for PairCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn count_word(pair_counts: &mut PairCounts, idx: usize, word: &[u32], count: u64) {
    for (pos, window) in word.windows(2).enumerate() {
        let pair = (window[0], window[1]);
        pair_counts
            .entry(pair)
            .and_modify(|s| s.count += count)
            .or_insert(PairStats {
                count,
                first_seen: (idx, pos),
            });
    }
}
