//! Words as sequences of symbols.

use compact_str::CompactString;

/// One whitespace/punctuation-delimited unit of text, exploded into
/// single-character symbols and terminated by the separator symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    symbols: Vec<CompactString>,
}

impl Word {
    /// Explode `text` into characters and append `separator`.
    pub fn new(text: &str, separator: &str) -> Self {
        let mut symbols: Vec<CompactString> = text
            .chars()
            .map(|c| {
                let mut buf = [0u8; 4];
                CompactString::new(c.encode_utf8(&mut buf))
            })
            .collect();
        symbols.push(CompactString::new(separator));
        Self { symbols }
    }

    pub fn symbols(&self) -> &[CompactString] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Concatenation of all symbols, separator included.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.as_str()).collect()
    }
}
