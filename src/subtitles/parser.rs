use super::types::Segment;
use super::utils::parse_timestamp;
use log::{debug, info};
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid block separator regex"));

static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2},\d{3})")
        .expect("valid timing line regex")
});

/// Parse SRT text into an ordered list of segments.
///
/// Blocks are separated by blank lines and need an index line, a timing line
/// and at least one text line. Malformed blocks are dropped one by one; the
/// input index is ignored and segments are numbered densely from 1.
pub fn parse_srt(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut dropped = 0usize;

    for block in split_blocks(content) {
        match parse_block(block, segments.len() + 1) {
            Some(segment) => segments.push(segment),
            None => {
                dropped += 1;
                debug!("Dropping malformed subtitle block: {:?}", block);
            }
        }
    }

    if dropped > 0 {
        info!(
            "Parsed {} subtitle blocks, dropped {} malformed",
            segments.len(),
            dropped
        );
    }

    segments
}

/// Number of blank-line separated blocks in the text, valid or not
pub fn count_blocks(content: &str) -> usize {
    split_blocks(content).count()
}

fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR
        .split(content.trim())
        .filter(|block| !block.trim().is_empty())
}

fn parse_block(block: &str, index: usize) -> Option<Segment> {
    let lines: Vec<&str> = block
        .trim()
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    if lines.len() < 3 {
        return None;
    }

    let captures = TIMING_LINE.captures(lines[1].trim())?;
    let start = parse_timestamp(&captures[1]).ok()?;
    let end = parse_timestamp(&captures[2]).ok()?;
    let text = lines[2..].join("\n").trim().to_string();

    Some(Segment {
        index,
        start,
        end,
        text,
    })
}
