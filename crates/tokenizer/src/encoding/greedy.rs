//! Greedy longest-match segmentation.
//!
//! Words are segmented directly against the final vocabulary. The merge
//! history is not replayed, so a word unseen during training may split
//! differently than strict merge-order encoding would split it.

use mergetok_core::Vocabulary;

/// Encoder that consumes, at each position, the longest vocabulary symbol
/// starting there.
///
/// Worst case per word is O(len * min(len, longest symbol)) lookups, which is
/// fine for natural-language word lengths.
pub struct SubwordEncoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> SubwordEncoder<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Segment one word string (separator included), appending IDs to `out`.
    ///
    /// A position where not even the single character is known emits the
    /// unknown token and advances by one character.
    pub fn encode_word(&self, word: &str, out: &mut Vec<u32>) {
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let n_chars = bounds.len() - 1;
        let max_len = self.vocab.max_symbol_chars().max(1);
        let unk = self.vocab.special().unk;

        let mut start = 0;
        while start < n_chars {
            let mut end = n_chars.min(start + max_len);
            let mut matched = None;

            while end > start {
                if let Some(id) = self.vocab.get_id(&word[bounds[start]..bounds[end]]) {
                    matched = Some((id, end));
                    break;
                }
                end -= 1;
            }

            match matched {
                Some((id, next)) => {
                    out.push(id);
                    start = next;
                }
                None => {
                    out.push(unk);
                    start += 1;
                }
            }
        }
    }

    /// Segment a sequence of word strings, preserving order.
    pub fn encode_words<I, S>(&self, words: I) -> Vec<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for word in words {
            self.encode_word(word.as_ref(), &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergetok_core::SpecialTokensConfig;

    fn vocab_with(symbols: &[&str]) -> Vocabulary {
        let mut vocab = Vocabulary::new(SpecialTokensConfig::default(), "</w>").unwrap();
        for s in symbols {
            vocab.add_symbol(s);
        }
        vocab
    }

    fn encode(vocab: &Vocabulary, word: &str) -> Vec<String> {
        let mut ids = Vec::new();
        SubwordEncoder::new(vocab).encode_word(word, &mut ids);
        ids.iter().map(|&id| vocab.symbol_of(id).to_string()).collect()
    }

    #[test]
    fn test_single_characters_only() {
        let vocab = vocab_with(&["a", "b", "c", "</w>"]);
        assert_eq!(encode(&vocab, "abc</w>"), vec!["a", "b", "c", "</w>"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let vocab = vocab_with(&["h", "e", "l", "o", "</w>", "he", "hel", "lo</w>", "l</w>"]);
        assert_eq!(encode(&vocab, "hello</w>"), vec!["hel", "lo</w>"]);
    }

    #[test]
    fn test_greedy_is_not_merge_replay() {
        // Greedy takes "abc" first even though "bcd" might be a better split.
        let vocab = vocab_with(&["a", "b", "c", "d", "</w>", "abc", "bcd</w>"]);
        assert_eq!(encode(&vocab, "abcd</w>"), vec!["abc", "d", "</w>"]);
    }

    #[test]
    fn test_unknown_character() {
        let vocab = vocab_with(&["a", "b", "</w>"]);
        assert_eq!(encode(&vocab, "axb</w>"), vec!["a", "<UNK>", "b", "</w>"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let vocab = vocab_with(&["é", "t", "é</w>", "</w>"]);
        assert_eq!(encode(&vocab, "été</w>"), vec!["é", "t", "é</w>"]);
    }

    #[test]
    fn test_encode_words_concatenates() {
        let vocab = vocab_with(&["a", "b", "</w>", "a</w>"]);
        let ids = SubwordEncoder::new(&vocab).encode_words(["a</w>", "ab</w>"]);
        let expected = vec![
            vocab.get_id("a</w>").unwrap(),
            vocab.get_id("a").unwrap(),
            vocab.get_id("b").unwrap(),
            vocab.get_id("</w>").unwrap(),
        ];
        assert_eq!(ids, expected);
    }
}
