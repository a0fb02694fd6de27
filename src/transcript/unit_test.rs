use crate::errors::SubpolishError;
use crate::transcript::{
    align_sentences, reconstruct_sentences, running_text, split_sentences, AlignerConfig, Word,
    WordTimestampDocument,
};

#[cfg(test)]
mod test_helpers {
    use crate::transcript::Word;

    pub fn words(raw: &[(&str, f64, f64)]) -> Vec<Word> {
        raw.iter()
            .map(|&(text, start, end)| Word::new(text, start, end))
            .collect()
    }
}

#[test]
fn test_split_sentences_keeps_marks() {
    assert_eq!(
        split_sentences("Hello world. How are you? Fine"),
        vec!["Hello world.", "How are you?", "Fine"]
    );
    assert_eq!(
        split_sentences("你好。今天天气很好！"),
        vec!["你好。", "今天天气很好！"]
    );
    assert_eq!(split_sentences("Really?! Yes"), vec!["Really?", "!", "Yes"]);
    assert!(split_sentences("   ").is_empty());
}

#[test]
fn test_running_text_joins_with_spaces() {
    let words = test_helpers::words(&[("Hello", 0.0, 0.5), ("world.", 0.5, 1.0)]);
    assert_eq!(running_text(&words), "Hello world.");
}

#[test]
fn test_reconstruct_two_sentences() {
    let words = test_helpers::words(&[
        ("Hello", 0.0, 0.5),
        ("world.", 0.5, 1.0),
        ("Bye", 1.0, 1.2),
    ]);
    let segments = reconstruct_sentences(&words, &AlignerConfig::default()).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "Hello world.");
    assert_eq!((segments[0].start, segments[0].end), (0.0, 1.0));
    assert_eq!(segments[1].text, "Bye");
    assert_eq!((segments[1].start, segments[1].end), (1.0, 1.2));
    assert_eq!(segments[1].index, 2);
}

#[test]
fn test_matching_ignores_case_and_commas() {
    let words = test_helpers::words(&[
        ("Well,", 0.0, 0.4),
        ("OK!", 0.4, 0.9),
        ("see", 1.0, 1.3),
        ("YOU.", 1.3, 1.8),
    ]);
    let alignment = align_sentences(&words, &AlignerConfig::default()).unwrap();
    assert_eq!(alignment.sentences.len(), 2);
    assert_eq!(alignment.sentences[0].text, "Well, OK!");
    assert_eq!(alignment.sentences[0].first_word, Some(0));
    assert_eq!(alignment.sentences[0].last_word, Some(1));
    assert_eq!(alignment.sentences[1].first_word, Some(2));
    assert_eq!(alignment.sentences[1].end, 1.8);
    assert_eq!(alignment.estimated_count(), 0);
    assert_eq!(alignment.accuracy(), 100.0);
}

#[test]
fn test_unmatched_sentence_uses_estimate() {
    // "?!" produces a lone "!" sentence with no tokens to match
    let words = test_helpers::words(&[("Really?!", 2.0, 2.6), ("Yes", 3.0, 3.2)]);
    let alignment = align_sentences(&words, &AlignerConfig::default()).unwrap();
    let texts: Vec<&str> = alignment.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Really?", "!", "Yes"]);

    let lone_mark = &alignment.sentences[1];
    assert!(lone_mark.is_estimated());
    assert_eq!(lone_mark.start, 2.6);
    assert_eq!(lone_mark.end, 2.6);
    assert_eq!(alignment.sentences[2].start, 3.0);
}

#[test]
fn test_first_sentence_estimate_starts_at_first_word() {
    // decimal points split the running text into pieces no single word matches
    let words = test_helpers::words(&[("3.5", 4.0, 4.4), ("percent", 4.4, 5.0)]);
    let alignment = align_sentences(&words, &AlignerConfig::default()).unwrap();
    assert_eq!(alignment.sentences[0].text, "3.");
    assert!(alignment.sentences[0].is_estimated());
    assert_eq!(alignment.sentences[0].start, 4.0);
    assert_eq!(alignment.sentences[0].end, 4.5);
    // "5 percent" never finds its leading "5", so it is estimated as well
    assert_eq!(alignment.sentences[1].text, "5 percent");
    assert!(alignment.sentences[1].is_estimated());
    assert_eq!(alignment.sentences[1].start, 4.5);
    assert_eq!(alignment.sentences[1].end, 5.5);
}

#[test]
fn test_estimate_uses_configured_token_duration() {
    let words = test_helpers::words(&[("1.25", 0.0, 1.0)]);
    let config = AlignerConfig {
        seconds_per_token: 2.0,
    };
    let alignment = align_sentences(&words, &config).unwrap();
    // "1." has one token "1"; the word "1.25" normalises to "125"
    assert!(alignment.sentences[0].is_estimated());
    assert_eq!(alignment.sentences[0].end, 2.0);
}

#[test]
fn test_cursor_never_reuses_words() {
    let words = test_helpers::words(&[
        ("go.", 0.0, 0.3),
        ("go.", 0.5, 0.8),
        ("go.", 1.0, 1.3),
    ]);
    let alignment = align_sentences(&words, &AlignerConfig::default()).unwrap();
    let firsts: Vec<Option<usize>> = alignment.sentences.iter().map(|s| s.first_word).collect();
    assert_eq!(firsts, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn test_empty_words_is_insufficient_input() {
    let result = reconstruct_sentences(&[], &AlignerConfig::default());
    assert!(matches!(result, Err(SubpolishError::Transcript(_))));
}

#[test]
fn test_negative_token_duration_rejected() {
    let words = test_helpers::words(&[("Hi", 0.0, 0.2)]);
    let config = AlignerConfig {
        seconds_per_token: -1.0,
    };
    assert!(matches!(
        align_sentences(&words, &config),
        Err(SubpolishError::Config(_))
    ));
}

#[test]
fn test_document_words_flatten_and_trim() {
    let json = r#"{
        "text": " Hello world. Bye",
        "language": "en",
        "segments": [
            {"id": 0, "text": " Hello world.", "words": [
                {"word": " Hello", "start": 0.0, "end": 0.5, "probability": 0.9},
                {"word": " world.", "start": 0.5, "end": 1.0, "probability": 0.8}
            ]},
            {"id": 1, "text": " (no words)"},
            {"id": 2, "text": " Bye", "words": [
                {"word": " Bye", "start": 1.0, "end": 1.2}
            ]}
        ]
    }"#;
    let document = WordTimestampDocument::from_json_str(json).unwrap();
    assert_eq!(document.language.as_deref(), Some("en"));
    let words = document.words();
    assert_eq!(
        words,
        vec![
            Word::new("Hello", 0.0, 0.5),
            Word::new("world.", 0.5, 1.0),
            Word::new("Bye", 1.0, 1.2),
        ]
    );
}

#[test]
fn test_document_without_words() {
    let json = r#"{"segments": [{"text": "x"}]}"#;
    let document = WordTimestampDocument::from_json_str(json).unwrap();
    assert!(document.words().is_empty());
    assert!(WordTimestampDocument::from_json_str("not json").is_err());
}
