mod config;
mod filter;
mod gaps;
mod merge;
pub mod text;

pub use config::OptimizerConfig;
pub use filter::{filter_noise, is_noise, NOISE_MARKERS};
pub use gaps::snap_gaps;
pub use merge::{merge_fragments, should_merge};

use crate::subtitles::Segment;
use log::info;
use serde::Serialize;

/// Segment counts before and after optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimizeReport {
    pub original_count: usize,
    pub final_count: usize,
}

/// Run gap snapping, fragment merging and noise filtering, in that order.
///
/// An empty sequence is returned untouched.
pub fn optimize_segments(segments: Vec<Segment>, config: &OptimizerConfig) -> Vec<Segment> {
    optimize_segments_with_report(segments, config).0
}

pub fn optimize_segments_with_report(
    segments: Vec<Segment>,
    config: &OptimizerConfig,
) -> (Vec<Segment>, OptimizeReport) {
    let original_count = segments.len();
    if segments.is_empty() {
        return (
            segments,
            OptimizeReport {
                original_count,
                final_count: 0,
            },
        );
    }

    let snapped = snap_gaps(segments, config.gap_threshold);
    let merged = merge_fragments(snapped, config);
    let filtered = filter_noise(merged);

    let report = OptimizeReport {
        original_count,
        final_count: filtered.len(),
    };
    info!(
        "Optimized: {} -> {} segments",
        report.original_count, report.final_count
    );
    (filtered, report)
}
