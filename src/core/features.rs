//! Feature plugin system with enum dispatch
//!
//! Every button of the text statistics screen is an action owned by one
//! feature. Uses enum_dispatch for static dispatch of the sync methods.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};
use std::collections::HashMap;
use std::sync::OnceLock;
use enum_dispatch::enum_dispatch;

pub mod text_analyser_logic;
pub mod text_analyser;
pub mod clipboard;
pub mod samples;

use async_trait::async_trait;

/// Sync methods trait for enum_dispatch
///
/// enum_dispatch works with sync methods only.
/// Async methods are handled separately via async_trait.
#[enum_dispatch]
pub trait FeatureSync: Send + Sync {
    /// Unique identifier for this feature
    fn id(&self) -> &str;

    /// Commands this feature can execute
    fn action_commands(&self) -> Vec<CommandItem>;

    /// Map of command IDs to boost scores for the given text.
    /// Higher scores rank commands first.
    fn get_context_boost(&self, text: &str) -> HashMap<String, f64>;
}

/// Async methods trait (separate from enum_dispatch)
#[async_trait]
pub trait FeatureAsync: Send + Sync {
    /// Execute an action for this feature
    ///
    /// Returns `AppError::UnsupportedAction` when the action belongs to
    /// another feature.
    async fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse>;
}

#[enum_dispatch(FeatureSync)]
pub enum AppFeature {
    TextAnalyser(text_analyser::TextAnalyserFeature),
    Clipboard(clipboard::ClipboardFeature),
    Samples(samples::SampleTextFeature),
}

impl AppFeature {
    pub fn all() -> Vec<Self> {
        vec![
            AppFeature::TextAnalyser(text_analyser::TextAnalyserFeature),
            AppFeature::Clipboard(clipboard::ClipboardFeature),
            AppFeature::Samples(samples::SampleTextFeature),
        ]
    }
}

/// Cached command items, built once
static BASE_COMMAND_ITEMS: OnceLock<Vec<CommandItem>> = OnceLock::new();

fn get_base_command_items() -> &'static Vec<CommandItem> {
    BASE_COMMAND_ITEMS.get_or_init(|| {
        let items: Vec<CommandItem> = AppFeature::all()
            .iter()
            .flat_map(|feature| feature.action_commands())
            .collect();

        tracing::debug!(count = items.len(), "built command index");
        items
    })
}

/// All command items from all features, in registration order
pub fn get_all_command_items() -> Vec<CommandItem> {
    get_base_command_items().clone()
}

/// Look up a command item by its id
pub fn find_command(id: &str) -> Option<CommandItem> {
    get_base_command_items().iter().find(|item| item.id == id).cloned()
}

/// Context boost from all features
pub fn get_context_boost(text: &str) -> HashMap<String, f64> {
    let mut boost_map = HashMap::new();

    for feature in AppFeature::all() {
        boost_map.extend(feature.get_context_boost(text));
    }

    boost_map
}

/// Command items ordered by context boost, highest first.
/// Items with equal boost keep registration order.
pub fn ranked_command_items(text: &str) -> Vec<CommandItem> {
    let boost = get_context_boost(text);
    let score = |item: &CommandItem| boost.get(&item.id).copied().unwrap_or(0.0);

    let mut items = get_all_command_items();
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
    items
}

/// Execute an action across all features
pub async fn execute_feature_action(request: &ExecuteActionRequest) -> AppResult<ExecuteActionResponse> {
    for feature in AppFeature::all() {
        // Manual dispatch for async methods (enum_dispatch doesn't support async)
        let result = match &feature {
            AppFeature::TextAnalyser(f) => f.execute_action(&request.action_type, &request.params).await,
            AppFeature::Clipboard(f) => f.execute_action(&request.action_type, &request.params).await,
            AppFeature::Samples(f) => f.execute_action(&request.action_type, &request.params).await,
        };

        match result {
            Err(AppError::UnsupportedAction) => continue,
            other => {
                tracing::debug!(feature = feature.id(), "action handled");
                return other;
            }
        }
    }

    Err(AppError::Feature("Unknown action type".to_string()))
}

/// Read the required `text` parameter of an action request
pub(crate) fn text_param(params: &serde_json::Value) -> AppResult<String> {
    params
        .get("text")
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Missing 'text' parameter".to_string()))
}
