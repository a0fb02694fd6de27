use super::config::OptimizerConfig;
use super::text::{count_words, is_cjk_dominant};
use crate::subtitles::Segment;
use log::debug;

/// Merge rule for a pair of neighbours.
///
/// At least one side must be a short fragment and the combined word count
/// must fit the budget picked by the first segment's script.
pub fn should_merge(current: &Segment, next: &Segment, config: &OptimizerConfig) -> bool {
    let current_words = count_words(&current.text, config.cjk_ratio);
    let next_words = count_words(&next.text, config.cjk_ratio);
    let max_words = config.max_words(is_cjk_dominant(&current.text, config.cjk_ratio));

    (current_words < config.short_fragment_words || next_words < config.short_fragment_words)
        && current_words + next_words <= max_words
}

/// Single left-to-right pass merging short fragments into their neighbour.
///
/// A merged pair is consumed as a whole; the result is not compared against
/// the following segment again in the same pass.
pub fn merge_fragments(segments: Vec<Segment>, config: &OptimizerConfig) -> Vec<Segment> {
    let mut merged = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(current) = iter.next() {
        let next = iter.next_if(|next| should_merge(&current, next, config));

        let segment = match next {
            Some(next) => {
                let separator = if is_cjk_dominant(&current.text, config.cjk_ratio) {
                    ""
                } else {
                    " "
                };
                Segment {
                    index: merged.len() + 1,
                    start: current.start,
                    end: next.end,
                    text: format!("{}{}{}", current.text, separator, next.text),
                }
            }
            None => Segment {
                index: merged.len() + 1,
                ..current
            },
        };
        merged.push(segment);
    }

    debug!("Merged fragments into {} segments", merged.len());
    merged
}
