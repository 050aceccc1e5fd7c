//! Text metrics engine (pure logic)
//!
//! Segments a document into words, sentences and paragraphs using plain
//! whitespace/punctuation heuristics and derives the statistics record from
//! those segments. Every call recomputes everything from the input string.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{StatisticsResult, TextDetails};

/// Average adult reading speed used for the reading time estimate
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 225;

/// Shown instead of the longest word when the document has no words
pub const NO_WORDS_SENTINEL: &str = "-";

static TERMINATOR_RUN: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn terminator_run() -> &'static Regex {
    TERMINATOR_RUN.get_or_init(|| Regex::new(r"[.!?]+").expect("valid regex"))
}

/// A newline, any whitespace (more newlines included), then another newline
fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n[\s\x{FEFF}]*\n").expect("valid regex"))
}

/// Unicode `White_Space` plus U+FEFF, so a byte-order mark never counts as text
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_space(segment: &str) -> &str {
    segment.trim_matches(is_space)
}

/// Word, sentence and paragraph segments of one document.
///
/// Borrowed from the input and dropped at the end of the analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    pub words: Vec<&'a str>,
    pub sentences: Vec<&'a str>,
    pub paragraphs: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    pub fn of(text: &'a str) -> Self {
        Self {
            words: extract_words(text),
            sentences: extract_sentences(text),
            paragraphs: extract_paragraphs(text),
        }
    }
}

/// Maximal runs of non-whitespace characters, left to right
pub fn extract_words(text: &str) -> Vec<&str> {
    text.split(is_space).filter(|word| !word.is_empty()).collect()
}

/// Split at every run of `.`, `!` or `?` that is followed by whitespace or
/// the end of the text. The terminators are dropped; segments are trimmed
/// and empty ones discarded.
pub fn extract_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for run in terminator_run().find_iter(text) {
        let at_boundary = text[run.end()..]
            .chars()
            .next()
            .map_or(true, is_space);

        if at_boundary {
            push_trimmed(&mut sentences, &text[start..run.start()]);
            start = run.end();
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Split on blank lines, trim, discard empties
pub fn extract_paragraphs(text: &str) -> Vec<&str> {
    paragraph_break()
        .split(text)
        .map(trim_space)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

fn push_trimmed<'a>(segments: &mut Vec<&'a str>, segment: &'a str) {
    let segment = trim_space(segment);
    if !segment.is_empty() {
        segments.push(segment);
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Round half-up at the tenths digit. Inputs here are never negative.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimated reading time, rendered as `"<n> sec"` or `"<n> min"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadingTime {
    Seconds(u64),
    Minutes(f64),
}

impl ReadingTime {
    /// Under one minute reports whole seconds, under two minutes reports
    /// minutes to one decimal, anything longer whole minutes.
    pub fn estimate(word_count: usize, words_per_minute: u32) -> Self {
        let minutes = word_count as f64 / f64::from(words_per_minute.max(1));

        if minutes < 1.0 {
            ReadingTime::Seconds((minutes * 60.0).round() as u64)
        } else if minutes < 2.0 {
            ReadingTime::Minutes(round_to_tenth(minutes))
        } else {
            ReadingTime::Minutes(minutes.round())
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingTime::Seconds(secs) => write!(f, "{} sec", secs),
            ReadingTime::Minutes(mins) => write!(f, "{} min", mins),
        }
    }
}

/// Mean character length of the words, one decimal; `0` without words
pub fn average_word_length(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let total: usize = words.iter().map(|word| char_len(word)).sum();
    round_to_tenth(total as f64 / words.len() as f64)
}

/// Leftmost word of maximum length; ties keep the earlier word
pub fn longest_word<'a>(words: &[&'a str]) -> Option<&'a str> {
    let (first, rest) = words.split_first()?;

    let mut longest = *first;
    for &word in rest {
        if char_len(word) > char_len(longest) {
            longest = word;
        }
    }
    Some(longest)
}

/// Text analyser with a configurable reading speed.
///
/// `Analyzer` holds no per-document state, so one value can be shared
/// freely between threads and reused for any number of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analyzer {
    words_per_minute: u32,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl Analyzer {
    pub fn new(words_per_minute: u32) -> AppResult<Self> {
        if words_per_minute == 0 {
            return Err(AppError::Validation(
                "Reading speed must be at least 1 word per minute".to_string(),
            ));
        }
        Ok(Self { words_per_minute })
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    /// Perform the full analysis of one document.
    ///
    /// CPU-bound and linear in the input length. Async callers with very
    /// large input should run it in `spawn_blocking`.
    #[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> StatisticsResult {
        let segments = Segments::of(text);
        let word_count = segments.words.len();

        let result = StatisticsResult {
            char_with_spaces: text.chars().count(),
            char_without_spaces: text.chars().filter(|&c| !is_space(c)).count(),
            word_count,
            sentence_count: segments.sentences.len(),
            paragraph_count: segments.paragraphs.len(),
            reading_time: ReadingTime::estimate(word_count, self.words_per_minute).to_string(),
            avg_word_length: average_word_length(&segments.words),
            longest_word: longest_word(&segments.words)
                .unwrap_or(NO_WORDS_SENTINEL)
                .to_string(),
        };

        tracing::debug!(
            word_count = result.word_count,
            sentence_count = result.sentence_count,
            paragraph_count = result.paragraph_count,
            "text analysed"
        );
        result
    }
}

/// Analyse `text` at the default reading speed
pub fn analyze(text: &str) -> StatisticsResult {
    Analyzer::default().analyze(text)
}

/// Unicode-aware counts reported next to the statistics record
pub fn details(text: &str) -> TextDetails {
    TextDetails {
        grapheme_count: text.graphemes(true).count(),
        line_count: text.lines().count(),
        unicode_word_count: text.unicode_words().count(),
    }
}

/// Live word count indicator, e.g. `"12 words"`
pub fn word_count_label(text: &str) -> String {
    format!("{} words", extract_words(text).len())
}
