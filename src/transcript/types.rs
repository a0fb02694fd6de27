use crate::errors::SubpolishResult;
use serde::{Deserialize, Serialize};

/// A single recognised token with its own timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Word-timestamp document as emitted by Whisper-style transcribers
/// (`--word_timestamps True --output_format json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordTimestampDocument {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub segments: Vec<DocumentSegment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSegment {
    #[serde(default)]
    pub text: String,
    /// Absent when the transcriber ran without word timestamps
    #[serde(default)]
    pub words: Option<Vec<DocumentWord>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl WordTimestampDocument {
    pub fn from_json_str(json: &str) -> SubpolishResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flatten every segment's words into one ordered stream, trimming the
    /// leading space Whisper puts in front of each token.
    pub fn words(&self) -> Vec<Word> {
        self.segments
            .iter()
            .filter_map(|segment| segment.words.as_ref())
            .flatten()
            .map(|word| Word::new(word.word.trim(), word.start, word.end))
            .collect()
    }
}
