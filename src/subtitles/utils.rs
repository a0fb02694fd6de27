use crate::errors::SubtitleError;

/// Format timestamp in SRT format (`HH:MM:SS,mmm`).
///
/// Milliseconds are truncated, not rounded. The tiny bias added before
/// truncation keeps values that were parsed from a literal (e.g. `1.001`)
/// from dropping a millisecond through float representation error.
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return "00:00:00,000".to_string();
    }

    let total_millis = (seconds * 1000.0 + 1e-6) as u64;
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Parse an SRT timestamp literal (`HH:MM:SS,mmm`) into seconds
pub fn parse_timestamp(literal: &str) -> Result<f64, SubtitleError> {
    let invalid = || SubtitleError::new(format!("invalid timestamp literal: {:?}", literal));

    let (clock, millis) = literal.trim().split_once(',').ok_or_else(invalid)?;
    let mut parts = clock.split(':');
    let (Some(hours), Some(minutes), Some(secs), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let field = |value: &str| value.parse::<u64>().map_err(|_| invalid());
    let total_millis =
        field(hours)? * 3_600_000 + field(minutes)? * 60_000 + field(secs)? * 1000 + field(millis)?;

    Ok(total_millis as f64 / 1000.0)
}
