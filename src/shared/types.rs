use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed-shape statistics record for one document.
///
/// Field names serialize in camelCase (`charWithSpaces`, `wordCount`, ...)
/// so the record can be handed to a web front end unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct StatisticsResult {
    #[ts(type = "number")]
    pub char_with_spaces: usize,
    #[ts(type = "number")]
    pub char_without_spaces: usize,
    #[ts(type = "number")]
    pub word_count: usize,
    #[ts(type = "number")]
    pub sentence_count: usize,
    #[ts(type = "number")]
    pub paragraph_count: usize,
    pub reading_time: String,
    pub avg_word_length: f64,
    pub longest_word: String,
}

impl StatisticsResult {
    /// Display value of a field by its serialized name
    pub fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "charWithSpaces" => self.char_with_spaces.to_string(),
            "charWithoutSpaces" => self.char_without_spaces.to_string(),
            "wordCount" => self.word_count.to_string(),
            "sentenceCount" => self.sentence_count.to_string(),
            "paragraphCount" => self.paragraph_count.to_string(),
            "readingTime" => self.reading_time.clone(),
            "avgWordLength" => self.avg_word_length.to_string(),
            "longestWord" => self.longest_word.clone(),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct TextDetails {
    #[ts(type = "number")]
    pub grapheme_count: usize,
    #[ts(type = "number")]
    pub line_count: usize,
    #[ts(type = "number")]
    pub unicode_word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TextAnalysisRequest {
    pub text: String,
    #[serde(default)]
    pub include_details: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TextAnalysisResponse {
    pub statistics: StatisticsResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub details: Option<TextDetails>,
}

// Action types mirror the buttons of the text statistics screen.
// Adjacently tagged serialization for frontend compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export, export_to = "bindings.ts")]
pub enum ActionType {
    /// Any of the single-metric or full analysis actions
    AnalyzeText(TextAnalysisPayload),
    ClearText,
    CopyText,
    SampleText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TextAnalysisPayload {
    pub action: TextAnalysisAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub enum TextAnalysisAction {
    Analyze,
    CountWords,
    CountChars,
    CountSentences,
    CountParagraphs,
    ReadingTime,
    AverageWordLength,
    LongestWord,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub action_type: Option<ActionType>,
    /// Keyboard shortcut shown next to the command, if any
    pub shortcut: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExecuteActionRequest {
    pub action_type: ActionType,
    #[ts(type = "any")]
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExecuteActionResponse {
    pub result: String,
    #[ts(type = "any")]
    pub metadata: Option<serde_json::Value>,
}
