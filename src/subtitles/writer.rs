use super::types::Segment;
use super::utils::format_timestamp;
use std::fmt::Write;

/// Serialize segments back into SRT text.
///
/// Indices are reassigned 1..N in sequence order. Every block, including the
/// last one, ends with a blank line.
pub fn segments_to_srt(segments: &[Segment]) -> String {
    let mut srt = String::new();
    for (i, segment) in segments.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            srt,
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(segment.start),
            format_timestamp(segment.end),
            segment.text
        );
    }
    srt
}
