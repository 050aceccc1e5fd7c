use thiserror::Error;
use serde::Serialize;

/// Errors surfaced by the action layer, settings and the CLI.
///
/// The metrics engine itself never fails; every variant here comes from
/// the edges (files, settings, requests, clipboard).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Feature Error: {0}")]
    Feature(String),

    /// Returned by a feature that does not own the requested action
    #[error("Unsupported action type")]
    UnsupportedAction,

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Unknown(format!("Background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
