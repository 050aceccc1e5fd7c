//! Settings command module
//!
//! Handles application settings persistence.

use std::path::Path;

use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Settings from `path`, or from the default location
pub async fn get_settings(path: Option<&Path>) -> AppResult<AppSettings> {
    match path {
        Some(path) => AppSettings::load_from(path).await,
        None => AppSettings::load().await,
    }
}

/// Save settings to `path`, or to the default location
pub async fn save_settings(settings: &AppSettings, path: Option<&Path>) -> AppResult<()> {
    settings.validate()?;
    match path {
        Some(path) => settings.save_to(path).await,
        None => settings.save_to(&AppSettings::get_settings_path()?).await,
    }
}
