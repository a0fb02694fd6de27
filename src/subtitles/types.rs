use serde::{Deserialize, Serialize};

/// A timed subtitle unit.
///
/// `index` is 1-based and only meaningful inside the sequence it was produced
/// for; every stage that changes the structure of a sequence renumbers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn new(index: usize, start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            text: text.into(),
        }
    }
}
