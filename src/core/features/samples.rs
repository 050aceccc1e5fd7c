//! Sample text feature
//!
//! Offers a few built-in texts to try the statistics on.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionResponse};
use super::text_analyser_logic::analyze;
use super::{FeatureAsync, FeatureSync};
use std::collections::HashMap;
use async_trait::async_trait;
use rand::seq::SliceRandom;

pub const SAMPLE_TEXTS: [&str; 3] = [
    "The quick brown fox jumps over the lazy dog. This pangram contains every letter of the alphabet at least once.",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "To be, or not to be, that is the question. Whether 'tis nobler in the mind to suffer the slings and arrows of outrageous fortune.",
];

#[derive(Clone)]
pub struct SampleTextFeature;

/// Pick one sample at random
pub fn random_sample() -> &'static str {
    SAMPLE_TEXTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SAMPLE_TEXTS[0])
}

impl FeatureSync for SampleTextFeature {
    fn id(&self) -> &str {
        "samples"
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "sample_text".to_string(),
            label: "Sample Text".to_string(),
            description: Some("Load a sample text".to_string()),
            action_type: Some(ActionType::SampleText),
            shortcut: None,
        }]
    }

    fn get_context_boost(&self, text: &str) -> HashMap<String, f64> {
        let mut boost = HashMap::new();
        // Nothing to analyse yet, suggest a sample
        if text.trim().is_empty() {
            boost.insert("sample_text".to_string(), 50.0);
        }
        boost
    }
}

#[async_trait]
impl FeatureAsync for SampleTextFeature {
    async fn execute_action(&self, action: &ActionType, _params: &serde_json::Value) -> AppResult<ExecuteActionResponse> {
        if !matches!(action, ActionType::SampleText) {
            return Err(AppError::UnsupportedAction);
        }

        let sample = random_sample();
        Ok(ExecuteActionResponse {
            result: sample.to_string(),
            metadata: Some(serde_json::to_value(analyze(sample))?),
        })
    }
}
