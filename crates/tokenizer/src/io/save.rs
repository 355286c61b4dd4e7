//! Save functionality for trained tokenizers.

use super::format::VocabRecord;
use crate::pre_tokenizer::NormalizationForm;
use log::debug;
use mergetok_core::{MergeHistory, Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tokenizer saver - turns a trained vocabulary into its persisted form.
pub struct TokenizerSaver<'a> {
    /// Vocabulary reference
    vocab: &'a Vocabulary,
    /// Merge history reference
    merges: &'a MergeHistory,
    normalization: NormalizationForm,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(
        vocab: &'a Vocabulary,
        merges: &'a MergeHistory,
        normalization: NormalizationForm,
    ) -> Self {
        Self {
            vocab,
            merges,
            normalization,
        }
    }

    /// Save as pretty-printed JSON to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TokenizerError::io(parent, e))?;
        }

        let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())?;
        writer.flush().map_err(|e| TokenizerError::io(path, e))?;

        debug!(
            "Saved vocabulary of {} symbols and {} merges to {}",
            self.vocab.len(),
            self.merges.len(),
            path.display()
        );
        Ok(())
    }

    /// Serialize the tokenizer to a record.
    pub fn serialize(&self) -> VocabRecord {
        VocabRecord {
            separator: self.vocab.separator().to_string(),
            special_tokens: self
                .vocab
                .special_config()
                .ordered()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            id2tok: self.vocab.symbols().map(str::to_string).collect(),
            merges: self.merges.iter().map(|rule| rule.to_string()).collect(),
            normalization: self.normalization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergetok_core::{MergeRule, SpecialTokensConfig};

    #[test]
    fn test_serialize() {
        let mut vocab = Vocabulary::new(SpecialTokensConfig::default(), "</w>").unwrap();
        vocab.add_symbol("a");
        vocab.add_symbol("b");
        vocab.add_symbol("ab");
        let merges: MergeHistory = [MergeRule::new("a", "b")].into_iter().collect();

        let saver = TokenizerSaver::new(&vocab, &merges, NormalizationForm::None);
        let record = saver.serialize();

        assert_eq!(record.separator, "</w>");
        assert_eq!(record.special_tokens, vec!["<PAD>", "<UNK>", "<BOS>", "<EOS>"]);
        assert_eq!(record.id2tok, vec!["<PAD>", "<UNK>", "<BOS>", "<EOS>", "a", "b", "ab"]);
        assert_eq!(record.merges, vec!["a b"]);
    }
}
