mod aligner;
mod sentences;
mod types;

pub use aligner::{align_sentences, reconstruct_sentences, AlignerConfig, Alignment, SentenceMatch};
pub use sentences::{running_text, split_sentences};
pub use types::{DocumentSegment, DocumentWord, Word, WordTimestampDocument};

#[cfg(test)]
pub mod unit_test;
