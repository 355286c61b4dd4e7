//! Reconstruction of text from token IDs or symbols.

use mergetok_core::Vocabulary;

/// Character emitted for every unknown token.
pub const UNKNOWN_PLACEHOLDER: char = '?';

/// Inverse of [`super::SubwordEncoder`], up to normalization loss.
///
/// Pad, start and end tokens are dropped. A symbol ending in the separator
/// closes the current word; completed words are joined with single spaces.
pub struct Decoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> Decoder<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Decode token IDs. Out-of-range IDs decode as the unknown token.
    pub fn decode(&self, ids: &[u32]) -> String {
        self.decode_iter(ids.iter().map(|&id| self.vocab.symbol_of(id)))
    }

    /// Decode symbols directly. Symbols need not be in the vocabulary.
    pub fn decode_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> String {
        self.decode_iter(symbols.iter().map(|s| s.as_ref()))
    }

    fn decode_iter<'s, I>(&self, symbols: I) -> String
    where
        I: IntoIterator<Item = &'s str>,
    {
        let special = self.vocab.special_config();
        let separator = self.vocab.separator();

        let mut words: Vec<String> = Vec::new();
        let mut buffer = String::new();

        for symbol in symbols {
            if symbol == special.pad || symbol == special.bos || symbol == special.eos {
                continue;
            }
            if symbol == special.unk {
                buffer.push(UNKNOWN_PLACEHOLDER);
                continue;
            }
            match symbol.strip_suffix(separator) {
                Some(stem) => {
                    buffer.push_str(stem);
                    words.push(std::mem::take(&mut buffer));
                }
                None => buffer.push_str(symbol),
            }
        }

        // Truncated final word.
        if !buffer.is_empty() {
            words.push(buffer);
        }

        words.join(" ")
    }
}
