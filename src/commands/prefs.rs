// Preference commands - favourites, history and settings operations
//
// Words are normalized before they touch a store, so the favourites and
// history keys always match the cache's canonical headwords.

use super::CommandError;
use crate::prefs::{Favourites, History, Settings, Theme};
use crate::word::Word;

/// Star a word. Returns the normalized form that was stored.
pub async fn add_favourite(favourites: &Favourites, raw: &str) -> Result<String, CommandError> {
    let word = Word::normalize(raw);
    if word.is_empty() {
        return Err(CommandError::EmptyWord);
    }
    favourites.add(&word).await?;
    Ok(word)
}

/// Unstar a word. Returns whether it was starred.
pub async fn remove_favourite(favourites: &Favourites, raw: &str) -> Result<bool, CommandError> {
    Ok(favourites.remove(&Word::normalize(raw)).await?)
}

pub async fn clear_favourites(favourites: &Favourites) -> Result<(), CommandError> {
    Ok(favourites.clear().await?)
}

/// Record a word in the search history by hand.
pub async fn record_history(history: &History, raw: &str) -> Result<String, CommandError> {
    let word = Word::normalize(raw);
    if word.is_empty() {
        return Err(CommandError::EmptyWord);
    }
    history.record(&word).await?;
    Ok(word)
}

/// Forget a word. Returns whether it was recorded.
pub async fn remove_history(history: &History, raw: &str) -> Result<bool, CommandError> {
    Ok(history.remove(&Word::normalize(raw)).await?)
}

pub async fn clear_history(history: &History) -> Result<(), CommandError> {
    Ok(history.clear().await?)
}

/// Settings keys addressable from a front-end.
pub const SETTING_KEYS: &[&str] = &["theme", "ttsLanguage", "startBlank"];

/// Read one setting as a display string.
pub fn get_setting(settings: &Settings, key: &str) -> Result<String, CommandError> {
    match key {
        "theme" => Ok(settings.theme().to_string()),
        "ttsLanguage" => Ok(settings.tts_language()),
        "startBlank" => Ok(settings.start_blank().to_string()),
        _ => Err(CommandError::UnknownSetting(key.to_string())),
    }
}

/// Write one setting from its string form.
pub async fn set_setting(
    settings: &Settings,
    key: &str,
    value: &str,
) -> Result<(), CommandError> {
    match key {
        "theme" => {
            let theme = Theme::parse(value).ok_or_else(|| CommandError::InvalidSetting {
                key: key.to_string(),
                reason: format!("'{}' is not one of light, dark, system", value),
            })?;
            Ok(settings.set_theme(theme).await?)
        }
        "ttsLanguage" => {
            if value.trim().is_empty() {
                return Err(CommandError::InvalidSetting {
                    key: key.to_string(),
                    reason: "language tag cannot be empty".to_string(),
                });
            }
            Ok(settings.set_tts_language(value.trim()).await?)
        }
        "startBlank" => {
            let flag = value.parse::<bool>().map_err(|_| CommandError::InvalidSetting {
                key: key.to_string(),
                reason: format!("'{}' is not true or false", value),
            })?;
            Ok(settings.set_start_blank(flag).await?)
        }
        _ => Err(CommandError::UnknownSetting(key.to_string())),
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
