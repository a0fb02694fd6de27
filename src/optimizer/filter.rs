use crate::subtitles::Segment;
use log::debug;

/// Leading characters that mark sound cues or music rather than speech
pub const NOISE_MARKERS: [char; 6] = ['【', '[', '(', '（', '♪', '♫'];

pub fn is_noise(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.starts_with(NOISE_MARKERS)
}

/// Drop noise lines, trim surviving text and renumber densely.
pub fn filter_noise(segments: Vec<Segment>) -> Vec<Segment> {
    let before = segments.len();
    let kept: Vec<Segment> = segments
        .into_iter()
        .filter(|segment| !is_noise(&segment.text))
        .enumerate()
        .map(|(i, segment)| Segment {
            index: i + 1,
            text: segment.text.trim().to_string(),
            ..segment
        })
        .collect();

    debug!("Filtered {} noise segments", before - kept.len());
    kept
}
