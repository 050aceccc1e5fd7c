//! Property-based tests for the text metrics engine.
//!
//! Uses proptest to verify invariants that must hold for every input string.

use proptest::prelude::*;
use text_stats_lib::core::features::text_analyser_logic::is_space;
use text_stats_lib::{analyze, Analyzer};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary printable UTF-8 text
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,200}"
}

/// Text built from words, terminators and assorted whitespace
fn prose_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "word", "naïve", "ab", "abcd", ".", "!", "?", "...", " ", "  ", "\t", "\n", "\n\n",
            "\n \n", "\u{00A0}", "\u{2003}", "\u{FEFF}",
        ]),
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![utf8_string(), prose_string()]
}

// ============================================================================
// Record invariants
// ============================================================================

proptest! {
    #[test]
    fn char_counts_match_input(s in any_text()) {
        let stats = analyze(&s);
        prop_assert_eq!(stats.char_with_spaces, s.chars().count());
        prop_assert!(stats.char_without_spaces <= stats.char_with_spaces);
    }

    #[test]
    fn no_words_means_zero_and_sentinel(s in any_text()) {
        let stats = analyze(&s);
        if stats.word_count == 0 {
            prop_assert_eq!(stats.avg_word_length, 0.0);
            prop_assert_eq!(stats.longest_word.as_str(), "-");
            prop_assert_eq!(stats.reading_time.as_str(), "0 sec");
        } else {
            prop_assert!(stats.avg_word_length > 0.0);
            prop_assert!(s.contains(stats.longest_word.as_str()));
        }
    }

    #[test]
    fn word_count_matches_whitespace_split(s in any_text()) {
        let expected = s.split(is_space).filter(|w| !w.is_empty()).count();
        prop_assert_eq!(analyze(&s).word_count, expected);
    }

    #[test]
    fn segments_never_exceed_words(s in any_text()) {
        let stats = analyze(&s);
        prop_assert!(stats.sentence_count <= stats.word_count);
        prop_assert!(stats.paragraph_count <= stats.word_count);
        if stats.word_count == 0 {
            prop_assert_eq!(stats.sentence_count, 0);
            prop_assert_eq!(stats.paragraph_count, 0);
        }
    }

    #[test]
    fn analysis_is_idempotent(s in any_text()) {
        prop_assert_eq!(analyze(&s), analyze(&s));
    }

    #[test]
    fn average_has_one_decimal(s in prose_string()) {
        let avg = analyze(&s).avg_word_length;
        prop_assert!(((avg * 10.0).round() - avg * 10.0).abs() < 1e-9);
    }

    #[test]
    fn reading_time_label_shape(words in 0usize..2000, wpm in 1u32..600) {
        let text = vec!["w"; words].join(" ");
        let label = Analyzer::new(wpm).unwrap().analyze(&text).reading_time;
        prop_assert!(label.ends_with(" sec") || label.ends_with(" min"), "label: {}", label);
    }
}
