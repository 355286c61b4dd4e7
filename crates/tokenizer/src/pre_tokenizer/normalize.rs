//! Text normalization for pre-tokenization.
//!
//! Line endings are unified, an optional Unicode normalization form is
//! applied, and the text is lowercased. Case is not recoverable afterwards.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    /// Canonical composition
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
    /// No Unicode normalization
    #[default]
    None,
}

impl NormalizationForm {
    pub fn is_none(&self) -> bool {
        *self == NormalizationForm::None
    }
}

/// Text normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Unicode normalization form to apply
    form: NormalizationForm,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text: String = match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFD => text.nfd().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::NFKD => text.nfkd().collect(),
            NormalizationForm::None => text,
        };
        text.to_lowercase()
    }
}
