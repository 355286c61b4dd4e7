//! Vocabulary storage and lookup.
//!
//! The vocabulary is a bijection between symbols and contiguous ids starting
//! at zero. Special tokens are always registered first, so they hold the
//! lowest ids regardless of corpus content.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use regex::Regex;
use std::sync::OnceLock;

/// Forward mapping: symbol -> ID
pub type SymbolMap = AHashMap<CompactString, u32>;

/// Default word-boundary separator.
pub const DEFAULT_SEPARATOR: &str = "</w>";

/// Unicode punctuation plus ASCII punctuation and symbols.
///
/// The segmenter turns each of these characters into a word of its own, so a
/// multi-character string containing one never occurs inside a word.
pub const PUNCTUATION_PATTERN: &str = r"[\p{P}[:punct:]]";

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PUNCTUATION_PATTERN).expect("Invalid punctuation pattern"))
}

/// Check whether a character belongs to [`PUNCTUATION_PATTERN`].
pub fn is_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    punctuation().is_match(c.encode_utf8(&mut buf))
}

/// Reason a separator or special token could be produced from word text.
fn marker_defect(marker: &str) -> Option<&'static str> {
    if marker.chars().count() < 2 {
        Some("must be at least two characters long")
    } else if marker.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if !marker.chars().any(is_punctuation) {
        Some("must contain a punctuation character")
    } else {
        None
    }
}

/// Validate a word-boundary separator.
///
/// Segmented text is lowercased and never holds punctuation next to other
/// characters, so a separator passing these checks cannot occur inside a word.
pub fn validate_separator(separator: &str) -> Result<()> {
    let defect = marker_defect(separator).or_else(|| {
        separator
            .chars()
            .any(char::is_uppercase)
            .then_some("must not contain uppercase letters")
    });
    match defect {
        Some(reason) => Err(TokenizerError::invalid(format!(
            "separator '{}' {}",
            separator, reason
        ))),
        None => Ok(()),
    }
}

/// Names of the reserved special tokens.
///
/// The order pad, unk, bos, eos is part of the contract: it is the order in
/// which the tokens are registered and the order they are persisted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTokensConfig {
    pub pad: String,
    pub unk: String,
    pub bos: String,
    pub eos: String,
}

impl Default for SpecialTokensConfig {
    fn default() -> Self {
        Self {
            pad: "<PAD>".to_string(),
            unk: "<UNK>".to_string(),
            bos: "<BOS>".to_string(),
            eos: "<EOS>".to_string(),
        }
    }
}

impl SpecialTokensConfig {
    /// The special token names in registration order.
    pub fn ordered(&self) -> [&str; 4] {
        [&self.pad, &self.unk, &self.bos, &self.eos]
    }

    /// Rebuild from a persisted, ordered list.
    pub fn from_ordered<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        match tokens {
            [pad, unk, bos, eos] => Ok(Self {
                pad: pad.as_ref().to_string(),
                unk: unk.as_ref().to_string(),
                bos: bos.as_ref().to_string(),
                eos: eos.as_ref().to_string(),
            }),
            _ => Err(TokenizerError::malformed(format!(
                "expected 4 special tokens (pad, unk, bos, eos), found {}",
                tokens.len()
            ))),
        }
    }

    fn validate(&self, separator: &str) -> Result<()> {
        let ordered = self.ordered();
        for (i, token) in ordered.iter().enumerate() {
            if let Some(reason) = marker_defect(token) {
                return Err(TokenizerError::invalid(format!(
                    "special token '{}' {}",
                    token, reason
                )));
            }
            if token.ends_with(separator) {
                return Err(TokenizerError::invalid(format!(
                    "special token '{}' collides with the separator",
                    token
                )));
            }
            if ordered[..i].contains(token) {
                return Err(TokenizerError::invalid(format!(
                    "special token '{}' is listed twice",
                    token
                )));
            }
        }
        Ok(())
    }
}

/// Special token IDs cached for fast access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialTokens {
    /// Padding token ID
    pub pad: u32,
    /// Unknown token ID
    pub unk: u32,
    /// Beginning of sequence token ID
    pub bos: u32,
    /// End of sequence token ID
    pub eos: u32,
}

impl SpecialTokens {
    /// Check if an ID is a special token.
    #[inline]
    pub fn is_special(&self, id: u32) -> bool {
        id == self.pad || id == self.unk || id == self.bos || id == self.eos
    }

    /// Check if an ID is a framing token that carries no text (pad, bos, eos).
    #[inline]
    pub fn is_control(&self, id: u32) -> bool {
        id == self.pad || id == self.bos || id == self.eos
    }
}

/// Vocabulary with forward and reverse mappings.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Reverse mapping: index = ID
    id2sym: Vec<CompactString>,
    /// Forward mapping: symbol -> ID
    sym2id: SymbolMap,
    special_config: SpecialTokensConfig,
    special: SpecialTokens,
    separator: CompactString,
    /// Length in chars of the longest symbol, bounds longest-match scans.
    max_symbol_chars: usize,
}

impl Vocabulary {
    /// Create a vocabulary holding only the special tokens.
    pub fn new(special: SpecialTokensConfig, separator: &str) -> Result<Self> {
        validate_separator(separator)?;
        special.validate(separator)?;

        let mut vocab = Self {
            id2sym: Vec::new(),
            sym2id: SymbolMap::new(),
            special_config: special.clone(),
            special: SpecialTokens {
                pad: 0,
                unk: 0,
                bos: 0,
                eos: 0,
            },
            separator: CompactString::new(separator),
            max_symbol_chars: 0,
        };
        vocab.special = SpecialTokens {
            pad: vocab.add_symbol(&special.pad),
            unk: vocab.add_symbol(&special.unk),
            bos: vocab.add_symbol(&special.bos),
            eos: vocab.add_symbol(&special.eos),
        };

        Ok(vocab)
    }

    /// Rebuild a vocabulary from symbols listed in ID order.
    ///
    /// Every problem is reported as [`TokenizerError::MalformedState`]; nothing
    /// is repaired.
    pub fn from_symbols<I, S>(
        symbols: I,
        special: SpecialTokensConfig,
        separator: &str,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_separator(separator)
            .and_then(|_| special.validate(separator))
            .map_err(|e| TokenizerError::malformed(e.to_string()))?;

        let symbols = symbols.into_iter();
        let mut id2sym = Vec::with_capacity(symbols.size_hint().0);
        let mut sym2id = SymbolMap::with_capacity(symbols.size_hint().0);
        let mut max_symbol_chars = 0;

        for (id, symbol) in symbols.enumerate() {
            let symbol = CompactString::new(symbol.as_ref());
            if symbol.is_empty() {
                return Err(TokenizerError::malformed(format!("empty symbol at id {}", id)));
            }
            if let Some(&first) = sym2id.get(&symbol) {
                return Err(TokenizerError::malformed(format!(
                    "symbol '{}' appears at ids {} and {}",
                    symbol, first, id
                )));
            }
            max_symbol_chars = max_symbol_chars.max(symbol.chars().count());
            sym2id.insert(symbol.clone(), id as u32);
            id2sym.push(symbol);
        }

        let lookup = |token: &str| {
            sym2id.get(token).copied().ok_or_else(|| {
                TokenizerError::malformed(format!("special token '{}' missing from id2tok", token))
            })
        };
        let ids = SpecialTokens {
            pad: lookup(&special.pad)?,
            unk: lookup(&special.unk)?,
            bos: lookup(&special.bos)?,
            eos: lookup(&special.eos)?,
        };

        Ok(Self {
            id2sym,
            sym2id,
            special_config: special,
            special: ids,
            separator: CompactString::new(separator),
            max_symbol_chars,
        })
    }

    /// Add a symbol to the vocabulary.
    ///
    /// Returns the ID assigned to the symbol, or its existing ID.
    pub fn add_symbol(&mut self, symbol: &str) -> u32 {
        if let Some(&id) = self.sym2id.get(symbol) {
            return id;
        }

        let id = self.id2sym.len() as u32;
        let symbol = CompactString::new(symbol);
        self.max_symbol_chars = self.max_symbol_chars.max(symbol.chars().count());
        self.sym2id.insert(symbol.clone(), id);
        self.id2sym.push(symbol);

        id
    }

    /// Get the ID for a symbol, if present.
    #[inline]
    pub fn get_id(&self, symbol: &str) -> Option<u32> {
        self.sym2id.get(symbol).copied()
    }

    /// Get the ID for a symbol, falling back to the unknown token.
    #[inline]
    pub fn id_of(&self, symbol: &str) -> u32 {
        self.get_id(symbol).unwrap_or(self.special.unk)
    }

    /// Check whether a symbol is present.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.sym2id.contains_key(symbol)
    }

    /// Get the symbol for an ID, if in range.
    #[inline]
    pub fn get_symbol(&self, id: u32) -> Option<&str> {
        self.id2sym.get(id as usize).map(|s| s.as_str())
    }

    /// Get the symbol for an ID, falling back to the unknown token.
    #[inline]
    pub fn symbol_of(&self, id: u32) -> &str {
        self.get_symbol(id).unwrap_or(self.special_config.unk.as_str())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.id2sym.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id2sym.is_empty()
    }

    /// All symbols in ID order.
    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.id2sym.iter().map(|s| s.as_str())
    }

    #[inline]
    pub fn special(&self) -> SpecialTokens {
        self.special
    }

    pub fn special_config(&self) -> &SpecialTokensConfig {
        &self.special_config
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[inline]
    pub fn max_symbol_chars(&self) -> usize {
        self.max_symbol_chars
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.id2sym == other.id2sym
            && self.separator == other.separator
            && self.special_config == other.special_config
    }
}

impl Eq for Vocabulary {}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new(SpecialTokensConfig::default(), DEFAULT_SEPARATOR).unwrap()
    }

    #[test]
    fn test_special_tokens_take_lowest_ids() {
        let vocab = vocab();
        let special = vocab.special();

        assert_eq!(vocab.len(), 4);
        assert_eq!(special.pad, 0);
        assert_eq!(special.unk, 1);
        assert_eq!(special.bos, 2);
        assert_eq!(special.eos, 3);
        assert_eq!(vocab.symbol_of(2), "<BOS>");
        assert!(special.is_special(special.unk));
        assert!(!special.is_control(special.unk));
        assert!(special.is_control(special.eos));
    }

    #[test]
    fn test_add_symbol() {
        let mut vocab = vocab();
        let id1 = vocab.add_symbol("hello");
        let id2 = vocab.add_symbol("world");

        assert_eq!(id1, 4);
        assert_eq!(id2, 5);
        assert_eq!(vocab.get_id("hello"), Some(4));
        assert_eq!(vocab.get_symbol(5), Some("world"));
    }

    #[test]
    fn test_add_duplicate_symbol() {
        let mut vocab = vocab();
        let id1 = vocab.add_symbol("hello");
        let id2 = vocab.add_symbol("hello");

        assert_eq!(id1, id2);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_id_zero_is_present_not_absent() {
        let vocab = vocab();
        assert!(vocab.contains("<PAD>"));
        assert_eq!(vocab.get_id("<PAD>"), Some(0));
        assert_eq!(vocab.id_of("<PAD>"), 0);
    }

    #[test]
    fn test_unknown_fallbacks() {
        let vocab = vocab();
        assert_eq!(vocab.id_of("zzz"), vocab.special().unk);
        assert_eq!(vocab.symbol_of(999), "<UNK>");
        assert_eq!(vocab.get_symbol(999), None);
    }

    #[test]
    fn test_bijection() {
        let mut vocab = vocab();
        for sym in ["a", "b", "ab", "</w>", "ab</w>"] {
            vocab.add_symbol(sym);
        }

        for id in 0..vocab.len() as u32 {
            assert_eq!(vocab.id_of(vocab.symbol_of(id)), id);
        }
        for sym in vocab.symbols() {
            assert_eq!(vocab.symbol_of(vocab.id_of(sym)), sym);
        }
    }

    #[test]
    fn test_max_symbol_chars() {
        let mut vocab = vocab();
        vocab.add_symbol("ab</w>");
        assert_eq!(vocab.max_symbol_chars(), 6);
    }

    #[test]
    fn test_invalid_separator() {
        let err = Vocabulary::new(SpecialTokensConfig::default(), "").unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidArgument(_)));

        let err = Vocabulary::new(SpecialTokensConfig::default(), "a b").unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidArgument(_)));
    }

    #[test]
    fn test_separator_producible_from_words_rejected() {
        for separator in ["w", "_", "##x ", "eow", "</W>"] {
            let err = Vocabulary::new(SpecialTokensConfig::default(), separator).unwrap_err();
            assert!(matches!(err, TokenizerError::InvalidArgument(_)), "{separator:?}");
        }

        for separator in ["</w>", "##", "@@", "<eow>"] {
            assert!(
                Vocabulary::new(SpecialTokensConfig::default(), separator).is_ok(),
                "{separator:?}"
            );
        }
    }

    #[test]
    fn test_special_token_producible_from_words_rejected() {
        let cases = [
            SpecialTokensConfig {
                unk: "x".to_string(),
                ..Default::default()
            },
            SpecialTokensConfig {
                unk: "unk".to_string(),
                ..Default::default()
            },
            SpecialTokensConfig {
                eos: "a</w>".to_string(),
                ..Default::default()
            },
        ];
        for special in cases {
            let err = Vocabulary::new(special.clone(), DEFAULT_SEPARATOR).unwrap_err();
            assert!(matches!(err, TokenizerError::InvalidArgument(_)), "{special:?}");
        }
    }

    #[test]
    fn test_is_punctuation() {
        for c in ['.', ',', '<', '$', '+', '_', '¿', '«'] {
            assert!(is_punctuation(c), "{c:?}");
        }
        for c in ['a', 'W', '7', ' ', 'é'] {
            assert!(!is_punctuation(c), "{c:?}");
        }
    }

    #[test]
    fn test_from_symbols_rejects_unsafe_separator() {
        let symbols = ["<PAD>", "<UNK>", "<BOS>", "<EOS>", "a", "w"];
        let err =
            Vocabulary::from_symbols(symbols, SpecialTokensConfig::default(), "w").unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedState(_)));
    }

    #[test]
    fn test_duplicate_special_tokens_rejected() {
        let special = SpecialTokensConfig {
            bos: "<S>".to_string(),
            eos: "<S>".to_string(),
            ..Default::default()
        };
        let err = Vocabulary::new(special, DEFAULT_SEPARATOR).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_symbols_preserves_ids() {
        let mut original = vocab();
        original.add_symbol("a");
        original.add_symbol("</w>");
        original.add_symbol("a</w>");

        let rebuilt = Vocabulary::from_symbols(
            original.symbols(),
            original.special_config().clone(),
            original.separator(),
        )
        .unwrap();

        assert_eq!(rebuilt, original);
        assert_eq!(rebuilt.special(), original.special());
        assert_eq!(rebuilt.get_id("a</w>"), Some(6));
        assert_eq!(rebuilt.max_symbol_chars(), original.max_symbol_chars());
    }

    #[test]
    fn test_from_symbols_rejects_duplicates() {
        let symbols = ["<PAD>", "<UNK>", "<BOS>", "<EOS>", "a", "a"];
        let err = Vocabulary::from_symbols(symbols, SpecialTokensConfig::default(), "</w>")
            .unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedState(_)));
    }

    #[test]
    fn test_from_symbols_rejects_missing_special() {
        let symbols = ["<PAD>", "<UNK>", "<BOS>", "a"];
        let err = Vocabulary::from_symbols(symbols, SpecialTokensConfig::default(), "</w>")
            .unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedState(_)));
    }

    #[test]
    fn test_special_tokens_from_ordered() {
        let list = vec!["<P>", "<U>", "<S>", "</S>"];
        let config = SpecialTokensConfig::from_ordered(&list).unwrap();
        assert_eq!(config.ordered(), ["<P>", "<U>", "<S>", "</S>"]);

        let err = SpecialTokensConfig::from_ordered(&list[..3]).unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedState(_)));
    }
}
