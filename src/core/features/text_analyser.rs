use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    ActionType, CommandItem, ExecuteActionResponse, StatisticsResult, TextAnalysisAction,
    TextAnalysisPayload,
};
use super::text_analyser_logic::Analyzer;
use super::{text_param, FeatureAsync, FeatureSync};
use std::collections::HashMap;
use async_trait::async_trait;

/// Above this size the analysis is moved off the async runtime
const LARGE_TEXT_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct TextAnalyserFeature;

fn analysis_command(id: &str, label: &str, description: &str, action: TextAnalysisAction) -> CommandItem {
    CommandItem {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
        action_type: Some(ActionType::AnalyzeText(TextAnalysisPayload { action })),
        shortcut: None,
    }
}

impl FeatureSync for TextAnalyserFeature {
    fn id(&self) -> &str {
        "text_analyser"
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        vec![
            analysis_command("analyze", "Analyze Text", "All statistics at once", TextAnalysisAction::Analyze),
            analysis_command("count_words", "Count Words", "Count words in the text", TextAnalysisAction::CountWords),
            analysis_command("count_chars", "Count Characters", "Count characters (with/without spaces)", TextAnalysisAction::CountChars),
            analysis_command("count_sentences", "Count Sentences", "Count sentences in the text", TextAnalysisAction::CountSentences),
            analysis_command("count_paragraphs", "Count Paragraphs", "Count paragraphs in the text", TextAnalysisAction::CountParagraphs),
            analysis_command("reading_time", "Reading Time", "Estimate reading time", TextAnalysisAction::ReadingTime),
            analysis_command("avg_word_length", "Average Word Length", "Mean word length in characters", TextAnalysisAction::AverageWordLength),
            analysis_command("longest_word", "Longest Word", "Find the longest word", TextAnalysisAction::LongestWord),
            CommandItem {
                id: "clear_text".to_string(),
                label: "Clear".to_string(),
                description: Some("Clear the text and reset statistics".to_string()),
                action_type: Some(ActionType::ClearText),
                shortcut: Some("Ctrl+K".to_string()),
            },
        ]
    }

    fn get_context_boost(&self, text: &str) -> HashMap<String, f64> {
        let mut boost = HashMap::new();
        if !text.trim().is_empty() {
            boost.insert("analyze".to_string(), 30.0);
        }
        // Boost if text is long enough to be worth timing
        if text.len() > 50 {
            boost.insert("analyze".to_string(), 35.0);
            boost.insert("reading_time".to_string(), 40.0);
        }
        boost
    }
}

/// Run the analysis, off the runtime for large input
pub async fn analyze_text(analyzer: Analyzer, text: String) -> AppResult<StatisticsResult> {
    if text.len() > LARGE_TEXT_BYTES {
        tracing::debug!(bytes = text.len(), "analysing on blocking pool");
        return Ok(tokio::task::spawn_blocking(move || analyzer.analyze(&text)).await?);
    }
    Ok(analyzer.analyze(&text))
}

/// Short human-readable answer for one analysis action
pub fn format_action_result(action: TextAnalysisAction, stats: &StatisticsResult) -> String {
    match action {
        TextAnalysisAction::Analyze => format!(
            "{} words, {} sentences, {} paragraphs, {} read",
            stats.word_count, stats.sentence_count, stats.paragraph_count, stats.reading_time
        ),
        TextAnalysisAction::CountWords => format!("{} words", stats.word_count),
        TextAnalysisAction::CountChars => format!(
            "{} chars ({} without spaces)",
            stats.char_with_spaces, stats.char_without_spaces
        ),
        TextAnalysisAction::CountSentences => format!("{} sentences", stats.sentence_count),
        TextAnalysisAction::CountParagraphs => format!("{} paragraphs", stats.paragraph_count),
        TextAnalysisAction::ReadingTime => stats.reading_time.clone(),
        TextAnalysisAction::AverageWordLength => stats.avg_word_length.to_string(),
        TextAnalysisAction::LongestWord => stats.longest_word.clone(),
    }
}

/// Analyzer for the optional `words_per_minute` parameter
fn reading_speed_param(params: &serde_json::Value) -> AppResult<Analyzer> {
    match params.get("words_per_minute") {
        None | Some(serde_json::Value::Null) => Ok(Analyzer::default()),
        Some(value) => {
            let wpm = value
                .as_u64()
                .and_then(|wpm| u32::try_from(wpm).ok())
                .ok_or_else(|| AppError::Validation(format!("Invalid 'words_per_minute' parameter: {}", value)))?;
            Analyzer::new(wpm)
        }
    }
}

#[async_trait]
impl FeatureAsync for TextAnalyserFeature {
    async fn execute_action(&self, action: &ActionType, params: &serde_json::Value) -> AppResult<ExecuteActionResponse> {
        let analyzer = reading_speed_param(params)?;

        let (text, analysis_action) = match action {
            ActionType::AnalyzeText(payload) => (text_param(params)?, payload.action),
            ActionType::ClearText => (String::new(), TextAnalysisAction::Analyze),
            _ => return Err(AppError::UnsupportedAction),
        };

        let stats = analyze_text(analyzer, text).await?;
        let result = match action {
            ActionType::ClearText => "Cleared".to_string(),
            _ => format_action_result(analysis_action, &stats),
        };

        Ok(ExecuteActionResponse {
            result,
            metadata: Some(serde_json::to_value(stats)?),
        })
    }
}
