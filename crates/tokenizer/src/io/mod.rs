//! Serialization and deserialization of trained vocabularies.

pub mod format;
pub mod load;
pub mod save;

pub use format::VocabRecord;
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
