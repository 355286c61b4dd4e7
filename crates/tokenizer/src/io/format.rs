//! Persisted vocabulary format.
//!
//! ```json
//! {
//!   "separator": "</w>",
//!   "specialTokens": ["<PAD>", "<UNK>", "<BOS>", "<EOS>"],
//!   "id2tok": ["<PAD>", "<UNK>", "<BOS>", "<EOS>", "a", "b"],
//!   "merges": ["a b"]
//! }
//! ```
//!
//! `id2tok[i]` is the symbol with ID `i`; `merges` are space-delimited pairs
//! in learned order.

use crate::pre_tokenizer::NormalizationForm;
use serde::{Deserialize, Serialize};

/// Serializable form of a trained tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabRecord {
    /// Word-boundary marker
    pub separator: String,
    /// Special tokens in pad, unk, bos, eos order
    pub special_tokens: Vec<String>,
    /// Symbols in ID order
    pub id2tok: Vec<String>,
    /// Merge rules as `"left right"`
    pub merges: Vec<String>,
    /// Omitted when no Unicode normalization is configured.
    #[serde(default, skip_serializing_if = "NormalizationForm::is_none")]
    pub normalization: NormalizationForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VocabRecord {
        VocabRecord {
            separator: "</w>".to_string(),
            special_tokens: vec!["<PAD>".into(), "<UNK>".into(), "<BOS>".into(), "<EOS>".into()],
            id2tok: vec![
                "<PAD>".into(),
                "<UNK>".into(),
                "<BOS>".into(),
                "<EOS>".into(),
                "a".into(),
                "aa".into(),
            ],
            merges: vec!["a a".into()],
            normalization: NormalizationForm::None,
        }
    }

    #[test]
    fn test_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        let obj = json.as_object().unwrap();

        assert!(obj.contains_key("separator"));
        assert!(obj.contains_key("specialTokens"));
        assert!(obj.contains_key("id2tok"));
        assert!(obj.contains_key("merges"));
        assert!(!obj.contains_key("normalization"));
    }

    #[test]
    fn test_normalization_written_when_set() {
        let mut data = record();
        data.normalization = NormalizationForm::NFC;
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"normalization\":\"nfc\""));

        let back: VocabRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_field_order_irrelevant() {
        let json = r#"{
            "merges": [],
            "id2tok": ["<PAD>", "<UNK>", "<BOS>", "<EOS>"],
            "specialTokens": ["<PAD>", "<UNK>", "<BOS>", "<EOS>"],
            "separator": "</w>"
        }"#;
        let data: VocabRecord = serde_json::from_str(json).unwrap();
        assert_eq!(data.id2tok.len(), 4);
        assert!(data.normalization.is_none());
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"{"separator": "</w>", "specialTokens": [], "merges": []}"#;
        assert!(serde_json::from_str::<VocabRecord>(json).is_err());
    }
}
