//! Command palette module
//!
//! Lists command items ranked for the current text and executes them by id.
//! Feature-specific logic is delegated to the features module.

use crate::core::features;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{CommandItem, ExecuteActionRequest, ExecuteActionResponse};
use serde_json::json;

/// All command items, ranked for `text` when given
pub fn get_command_items(text: Option<&str>) -> Vec<CommandItem> {
    match text {
        Some(text) => features::ranked_command_items(text),
        None => features::get_all_command_items(),
    }
}

/// Execute an action request
pub async fn execute_action(request: ExecuteActionRequest) -> AppResult<ExecuteActionResponse> {
    features::execute_feature_action(&request).await
}

/// Execute the command with the given id against `text`
pub async fn execute_command(id: &str, text: &str, words_per_minute: u32) -> AppResult<ExecuteActionResponse> {
    let command = features::find_command(id)
        .ok_or_else(|| AppError::Validation(format!("Unknown command: {}", id)))?;
    let action_type = command
        .action_type
        .ok_or_else(|| AppError::Feature(format!("Command {} has no action", id)))?;

    tracing::debug!(command = id, "executing command");
    execute_action(ExecuteActionRequest {
        action_type,
        params: json!({ "text": text, "words_per_minute": words_per_minute }),
    })
    .await
}
