pub mod subtitles;
pub use subtitles::{parse_srt, segments_to_srt, Segment};

pub mod transcript;
pub use transcript::{reconstruct_sentences, AlignerConfig, Word, WordTimestampDocument};

pub mod optimizer;
pub use optimizer::{optimize_segments, OptimizeReport, OptimizerConfig};

pub mod errors;
pub use errors::{ConfigError, SubpolishError, SubpolishResult, SubtitleError, TranscriptError};

use log::info;
use std::path::Path;

/// Optimize SRT text end to end.
///
/// Text without a single valid block is handed back unchanged.
pub fn optimize_srt(content: &str, config: &OptimizerConfig) -> String {
    optimize_srt_with_report(content, config).0
}

pub fn optimize_srt_with_report(
    content: &str,
    config: &OptimizerConfig,
) -> (String, OptimizeReport) {
    let segments = parse_srt(content);
    if segments.is_empty() {
        info!("No valid subtitle blocks, leaving input unchanged");
        let report = OptimizeReport {
            original_count: 0,
            final_count: 0,
        };
        return (content.to_string(), report);
    }

    let (optimized, report) = optimizer::optimize_segments_with_report(segments, config);
    (segments_to_srt(&optimized), report)
}

/// Sentence-level SRT from a word-timestamp document
pub fn words_to_srt(
    document: &WordTimestampDocument,
    config: &AlignerConfig,
) -> SubpolishResult<String> {
    let segments = reconstruct_sentences(&document.words(), config)?;
    Ok(segments_to_srt(&segments))
}

pub fn words_json_to_srt(json: &str, config: &AlignerConfig) -> SubpolishResult<String> {
    words_to_srt(&WordTimestampDocument::from_json_str(json)?, config)
}

/// Polish a local transcription output file and return the optimized SRT.
///
/// `.json` files are read as word-timestamp documents and re-timed into
/// sentences first; anything else is read as SRT.
pub fn polish_local_file<P: AsRef<Path>>(
    path: P,
    aligner_config: &AlignerConfig,
    optimizer_config: &OptimizerConfig,
) -> SubpolishResult<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let srt = if is_json {
        words_json_to_srt(&content, aligner_config)?
    } else {
        content
    };

    info!(
        "Read {} subtitle blocks from {}",
        subtitles::count_blocks(&srt),
        path.display()
    );
    Ok(optimize_srt(&srt, optimizer_config))
}
