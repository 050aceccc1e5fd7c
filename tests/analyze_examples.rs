//! End-to-end checks of the statistics record on concrete documents.

use text_stats_lib::{analyze, details, AppError, Analyzer, ReadingTime};

fn words(n: usize) -> String {
    vec!["lorem"; n].join(" ")
}

#[test]
fn empty_document() {
    let stats = analyze("");
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.avg_word_length, 0.0);
    assert_eq!(stats.longest_word, "-");
    assert_eq!(stats.reading_time, "0 sec");
}

#[test]
fn whitespace_only_document() {
    assert_eq!(analyze("   ").word_count, 0);
}

#[test]
fn hello_world() {
    let stats = analyze("Hello world");
    assert_eq!(stats.word_count, 2);
    assert_eq!(stats.longest_word, "Hello");
    assert_eq!(stats.char_with_spaces, 11);
    assert_eq!(stats.char_without_spaces, 10);
}

#[test]
fn byte_order_mark_prefix() {
    let stats = analyze("\u{FEFF}Para one.\n\nPara two.");
    assert_eq!(stats.word_count, 4);
    assert_eq!(stats.char_without_spaces, 16);
    assert_eq!(stats.paragraph_count, 2);
    assert_eq!(stats.longest_word, "Para");
}

#[test]
fn sentences_and_paragraphs() {
    assert_eq!(analyze("One. Two! Three?").sentence_count, 3);
    assert_eq!(analyze("Para one.\n\nPara two.").paragraph_count, 2);
}

#[test]
fn reading_time_thresholds() {
    assert_eq!(analyze(&words(10)).reading_time, "3 sec");
    assert_eq!(analyze(&words(225)).reading_time, "1 min");
    assert_eq!(analyze(&words(450)).reading_time, "2 min");
    assert_eq!(ReadingTime::estimate(0, 225).to_string(), "0 sec");
    assert_eq!(ReadingTime::estimate(300, 225).to_string(), "1.3 min");
}

#[test]
fn average_word_length_rounding() {
    assert_eq!(analyze("ab abcd").avg_word_length, 3.0);
}

#[test]
fn multi_paragraph_document() {
    let text = "First paragraph. It has two sentences.\n\n   \n\nSecond one?\nYes!\n\n\n";
    let stats = analyze(text);
    assert_eq!(stats.paragraph_count, 2);
    assert_eq!(stats.sentence_count, 4);
    assert_eq!(stats.word_count, 9);
    assert_eq!(stats.longest_word, "paragraph.");
    assert_eq!(details(text).line_count, 8);
}

#[test]
fn json_shape() {
    let json = serde_json::to_value(analyze("Hi there.")).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "avgWordLength",
            "charWithSpaces",
            "charWithoutSpaces",
            "longestWord",
            "paragraphCount",
            "readingTime",
            "sentenceCount",
            "wordCount",
        ]
    );
}

#[test]
fn zero_reading_speed_rejected() {
    assert!(matches!(Analyzer::new(0), Err(AppError::Validation(_))));
}

#[test]
fn shared_across_threads() {
    let analyzer = Analyzer::default();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || analyzer.analyze(&words(i * 100)).word_count))
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![0, 100, 200, 300]);
}
