use crate::subtitles::Segment;
use log::debug;

/// Close small gaps between neighbours by moving both boundaries to the
/// midpoint.
///
/// Only gaps with `0 < gap < threshold` are touched; overlaps and exact
/// joins stay as they are. The sweep reads the already adjusted values.
pub fn snap_gaps(mut segments: Vec<Segment>, threshold: f64) -> Vec<Segment> {
    let mut snapped = 0usize;

    for i in 1..segments.len() {
        let (head, tail) = segments.split_at_mut(i);
        let (current, next) = (&mut head[i - 1], &mut tail[0]);

        let gap = next.start - current.end;
        if gap > 0.0 && gap < threshold {
            let midpoint = (current.end + next.start) / 2.0;
            current.end = midpoint;
            next.start = midpoint;
            snapped += 1;
        }
    }

    debug!("Snapped {} gaps below {}s", snapped, threshold);
    segments
}
