//! Copy-to-clipboard feature
//!
//! Writes the text to the system clipboard. When the clipboard cannot be
//! reached the text is handed back in the response so the caller can emit
//! it another way.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionResponse};
use super::{text_param, FeatureAsync, FeatureSync};
use std::collections::HashMap;
use async_trait::async_trait;
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use serde_json::json;

#[derive(Clone)]
pub struct ClipboardFeature;

impl FeatureSync for ClipboardFeature {
    fn id(&self) -> &str {
        "clipboard"
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "copy_text".to_string(),
            label: "Copy Text".to_string(),
            description: Some("Copy the text to the clipboard".to_string()),
            action_type: Some(ActionType::CopyText),
            shortcut: Some("Ctrl+Enter".to_string()),
        }]
    }

    fn get_context_boost(&self, text: &str) -> HashMap<String, f64> {
        let mut boost = HashMap::new();
        if !text.trim().is_empty() {
            boost.insert("copy_text".to_string(), 25.0);
        }
        boost
    }
}

/// Write to the system clipboard
pub fn write_system_clipboard(text: &str) -> AppResult<()> {
    ClipboardContext::new()
        .and_then(|mut ctx| ctx.set_contents(text.to_string()))
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

/// Copy with `write`, falling back to returning the text itself
pub fn copy_with_fallback<F>(text: &str, write: F) -> ExecuteActionResponse
where
    F: FnOnce(&str) -> AppResult<()>,
{
    let chars = text.chars().count();
    match write(text) {
        Ok(()) => ExecuteActionResponse {
            result: "Copied!".to_string(),
            metadata: Some(json!({ "copied": true, "chars": chars })),
        },
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable, falling back to output");
            ExecuteActionResponse {
                result: text.to_string(),
                metadata: Some(json!({ "copied": false, "chars": chars, "reason": e.to_string() })),
            }
        }
    }
}

#[async_trait]
impl FeatureAsync for ClipboardFeature {
    async fn execute_action(&self, action: &ActionType, params: &serde_json::Value) -> AppResult<ExecuteActionResponse> {
        if !matches!(action, ActionType::CopyText) {
            return Err(AppError::UnsupportedAction);
        }

        let text = text_param(params)?;
        let response = tokio::task::spawn_blocking(move || {
            copy_with_fallback(&text, write_system_clipboard)
        })
        .await?;
        Ok(response)
    }
}
