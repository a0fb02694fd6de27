use super::sentences::{
    normalize_token, normalize_word, running_text, sentence_tokens, split_sentences,
};
use super::types::Word;
use crate::errors::{ConfigError, SubpolishResult, TranscriptError};
use crate::subtitles::Segment;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Settings for sentence re-timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Duration assumed per token when a sentence could not be matched
    pub seconds_per_token: f64,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            seconds_per_token: 0.5,
        }
    }
}

impl AlignerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.seconds_per_token.is_finite() || self.seconds_per_token < 0.0 {
            return Err(ConfigError::new(format!(
                "seconds_per_token must be a non-negative number, got {}",
                self.seconds_per_token
            )));
        }
        Ok(())
    }
}

/// One reconstructed sentence and where it landed in the word stream
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceMatch {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub token_count: usize,
    pub matched_tokens: usize,
    /// Word index of the first matched token
    pub first_word: Option<usize>,
    /// Word index of the last matched token
    pub last_word: Option<usize>,
}

impl SentenceMatch {
    /// True when timing came from the per-token estimate instead of words
    pub fn is_estimated(&self) -> bool {
        self.first_word.is_none()
    }
}

/// Result of aligning sentences onto a word stream
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub sentences: Vec<SentenceMatch>,
    pub word_count: usize,
}

impl Alignment {
    /// Share of input words covered by sentence tokens, in percent.
    ///
    /// Diagnostic only. It counts whitespace tokens of the sentence texts, so
    /// a sentence made only of a mark still counts as one token.
    pub fn accuracy(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        let covered: usize = self
            .sentences
            .iter()
            .map(|sentence| sentence.text.split_whitespace().count())
            .sum();
        100.0 * covered as f64 / self.word_count as f64
    }

    pub fn estimated_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_estimated()).count()
    }

    pub fn to_segments(&self) -> Vec<Segment> {
        self.sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                Segment::new(i + 1, sentence.start, sentence.end, &sentence.text)
            })
            .collect()
    }
}

/// Tokens of one sentence matched against the word stream
struct TokenRun {
    first: Option<usize>,
    last: Option<usize>,
    matched: usize,
}

/// Align sentence text back onto the word stream.
///
/// Sentences are matched in order with a cursor that only moves forward:
/// each sentence scans the words after the previous sentence's last match,
/// comparing case-insensitively with punctuation stripped. A sentence with no
/// matched word gets an estimated span starting where the previous sentence
/// ended.
pub fn align_sentences(words: &[Word], config: &AlignerConfig) -> SubpolishResult<Alignment> {
    let first_word = words.first().ok_or_else(TranscriptError::insufficient_input)?;
    config.validate()?;

    let (_, sentences) = split_sentences(&running_text(words)).into_iter().fold(
        (0usize, Vec::<SentenceMatch>::new()),
        |(cursor, mut matches), text| {
            let tokens = sentence_tokens(&text);
            let run = match_tokens(&tokens, words, cursor);

            let (start, end) = match (run.first, run.last) {
                (Some(first), Some(last)) => (words[first].start, words[last].end),
                _ => {
                    let start = matches.last().map_or(first_word.start, |prev| prev.end);
                    debug!("No word matched for {:?}, estimating timing", text);
                    (start, start + config.seconds_per_token * tokens.len() as f64)
                }
            };

            let next_cursor = run.last.map_or(cursor, |last| last + 1);
            matches.push(SentenceMatch {
                text,
                start,
                end,
                token_count: tokens.len(),
                matched_tokens: run.matched,
                first_word: run.first,
                last_word: run.last,
            });
            (next_cursor, matches)
        },
    );

    Ok(Alignment {
        sentences,
        word_count: words.len(),
    })
}

/// Reconstruct sentence-level segments from word timestamps
pub fn reconstruct_sentences(
    words: &[Word],
    config: &AlignerConfig,
) -> SubpolishResult<Vec<Segment>> {
    let alignment = align_sentences(words, config)?;

    let estimated = alignment.estimated_count();
    if estimated > 0 {
        warn!(
            "{} of {} sentences fell back to estimated timing",
            estimated,
            alignment.sentences.len()
        );
    }
    info!("Word match accuracy: {:.1}%", alignment.accuracy());
    info!("Generated {} subtitle segments", alignment.sentences.len());

    Ok(alignment.to_segments())
}

/// Greedy forward scan from `cursor`; words that do not match the next
/// expected token are skipped, never revisited.
fn match_tokens(tokens: &[String], words: &[Word], cursor: usize) -> TokenRun {
    let mut run = TokenRun {
        first: None,
        last: None,
        matched: 0,
    };
    if tokens.is_empty() {
        return run;
    }

    for (i, word) in words.iter().enumerate().skip(cursor) {
        if normalize_word(&word.text) != normalize_token(&tokens[run.matched]) {
            continue;
        }
        run.first.get_or_insert(i);
        run.last = Some(i);
        run.matched += 1;
        if run.matched == tokens.len() {
            break;
        }
    }

    run
}
