//! Stat card registry
//!
//! Centralized display labels for the statistics record.
//! Maps serialized field names to StatCard entries, in display order.

use serde::Serialize;

/// One labelled row of the rendered statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub field: &'static str,
    pub label: &'static str,
}

const STAT_CARDS: [StatCard; 8] = [
    StatCard { field: "charWithSpaces", label: "Characters (with spaces)" },
    StatCard { field: "charWithoutSpaces", label: "Characters (no spaces)" },
    StatCard { field: "wordCount", label: "Words" },
    StatCard { field: "sentenceCount", label: "Sentences" },
    StatCard { field: "paragraphCount", label: "Paragraphs" },
    StatCard { field: "readingTime", label: "Reading time" },
    StatCard { field: "avgWordLength", label: "Avg. word length" },
    StatCard { field: "longestWord", label: "Longest word" },
];

/// Card for a serialized field name
pub fn get_stat_card(field: &str) -> Option<StatCard> {
    STAT_CARDS.iter().find(|card| card.field == field).copied()
}

/// All cards in display order
pub fn get_all_stat_cards() -> &'static [StatCard] {
    &STAT_CARDS
}
