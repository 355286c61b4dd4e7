//! Subword encoding and decoding against a fixed vocabulary.

pub mod decoder;
pub mod greedy;

pub use decoder::{Decoder, UNKNOWN_PLACEHOLDER};
pub use greedy::SubwordEncoder;
