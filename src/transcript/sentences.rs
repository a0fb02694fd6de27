use super::types::Word;
use regex::Regex;
use std::sync::LazyLock;

/// Sentence-final marks, Latin and full-width
pub(crate) const SENTENCE_MARKS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?。！？]").expect("valid sentence end regex"));

/// Rebuild the running text from the word stream
pub fn running_text(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text after every sentence-final mark.
///
/// Each mark stays attached to the sentence before it; whitespace-only
/// fragments are discarded. A mark with no preceding text (as in `"?!"`)
/// becomes a sentence of its own.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for mark in SENTENCE_END.find_iter(text) {
        let mut sentence = text[last..mark.start()].trim().to_string();
        sentence.push_str(mark.as_str());
        sentences.push(sentence);
        last = mark.end();
    }

    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Tokens of a sentence used for matching: sentence marks removed, split on
/// whitespace, commas removed per token.
pub(crate) fn sentence_tokens(sentence: &str) -> Vec<String> {
    sentence
        .replace(SENTENCE_MARKS, "")
        .split_whitespace()
        .map(strip_commas)
        .collect()
}

/// Normalised form of a word-stream token for comparison
pub(crate) fn normalize_word(text: &str) -> String {
    strip_commas(&text.replace(SENTENCE_MARKS, "")).trim().to_lowercase()
}

pub(crate) fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

fn strip_commas(token: &str) -> String {
    token.replace([',', '，'], "")
}
