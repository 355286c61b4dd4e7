//! Load functionality for trained tokenizers.
//!
//! Loading never repairs a vocabulary: any inconsistency is reported as
//! [`TokenizerError::MalformedState`].

use super::format::VocabRecord;
use log::debug;
use mergetok_core::{
    MergeHistory, MergeRule, Result, SpecialTokensConfig, TokenizerError, Vocabulary,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tokenizer loader - rebuilds vocabularies from their persisted form.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load and validate a vocabulary file.
    pub fn load(path: &Path) -> Result<(Vocabulary, MergeHistory)> {
        Self::deserialize(&Self::read_record(path)?)
    }

    /// Read the raw record from `path` without validating its contents.
    pub fn read_record(path: &Path) -> Result<VocabRecord> {
        let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;
        let reader = BufReader::new(file);
        let record: VocabRecord = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                TokenizerError::io(path, e.into())
            } else {
                TokenizerError::malformed(format!("{}: {}", path.display(), e))
            }
        })?;

        debug!(
            "Read {} symbols and {} merges from {}",
            record.id2tok.len(),
            record.merges.len(),
            path.display()
        );
        Ok(record)
    }

    /// Parse a JSON string into a record.
    pub fn from_json(json: &str) -> Result<VocabRecord> {
        serde_json::from_str(json).map_err(|e| TokenizerError::malformed(e.to_string()))
    }

    /// Rebuild the vocabulary and merge history, assigning IDs by position.
    pub fn deserialize(record: &VocabRecord) -> Result<(Vocabulary, MergeHistory)> {
        let special = SpecialTokensConfig::from_ordered(&record.special_tokens)?;
        let vocab = Vocabulary::from_symbols(&record.id2tok, special, &record.separator)?;

        let merges = record
            .merges
            .iter()
            .map(|entry| {
                let rule: MergeRule = entry.parse()?;
                let merged = rule.merged();
                for symbol in [rule.left.as_str(), rule.right.as_str(), merged.as_str()] {
                    if !vocab.contains(symbol) {
                        return Err(TokenizerError::malformed(format!(
                            "merge '{}' refers to '{}', which is not in id2tok",
                            entry, symbol
                        )));
                    }
                }
                Ok(rule)
            })
            .collect::<Result<MergeHistory>>()?;

        Ok((vocab, merges))
    }
}
