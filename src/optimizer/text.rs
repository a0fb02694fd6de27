//! Character classes shared by word counting and text classification.

/// CJK unified ideographs, hiragana, katakana and hangul syllables
pub fn is_cjk_char(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF // CJK unified ideographs
            | 0x3040..=0x309F // Hiragana
            | 0x30A0..=0x30FF // Katakana
            | 0xAC00..=0xD7AF // Hangul syllables
    )
}

/// Letters, digits and underscore; everything else is punctuation or symbol
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Share of CJK characters among non-whitespace characters (0.0 for blank text)
pub fn cjk_share(text: &str) -> f64 {
    let (cjk, total) = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .fold((0usize, 0usize), |(cjk, total), c| {
            (cjk + usize::from(is_cjk_char(c)), total + 1)
        });
    if total == 0 {
        return 0.0;
    }
    cjk as f64 / total as f64
}

/// Whether CJK characters make up more than `ratio` of the text
pub fn is_cjk_dominant(text: &str, ratio: f64) -> bool {
    cjk_share(text) > ratio
}

/// Word count that works across scripts.
///
/// CJK-dominant text counts word characters (punctuation and whitespace
/// excluded); anything else counts whitespace-separated tokens.
pub fn count_words(text: &str, ratio: f64) -> usize {
    if is_cjk_dominant(text, ratio) {
        text.chars().filter(|&c| is_word_char(c)).count()
    } else {
        text.split_whitespace().count()
    }
}
