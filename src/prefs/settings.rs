// Typed app settings over the settings store
//
// The theme is restored once at construction; a missing or unreadable
// value is logged and the in-memory default kept, so a broken settings
// file never takes the app down.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::store::{PrefMap, PrefStore, StoreError};

const THEME_KEY: &str = "theme";
const TTS_LANGUAGE_KEY: &str = "ttsLanguage";
const START_BLANK_KEY: &str = "startBlank";

const DEFAULT_TTS_LANGUAGE: &str = "en-US";

/// App colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the platform theme
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parse a persisted theme name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed settings facade over the settings preference store.
#[derive(Clone)]
pub struct Settings {
    store: Arc<PrefStore>,
    /// Restored theme, kept in memory for synchronous reads
    theme: Arc<RwLock<Theme>>,
}

impl Settings {
    /// Wrap the settings store, restoring the persisted theme.
    pub fn new(store: Arc<PrefStore>) -> Self {
        let theme = match store.get(THEME_KEY) {
            None => Theme::default(),
            Some(value) => match value.as_str().and_then(Theme::parse) {
                Some(theme) => theme,
                None => {
                    crate::warn!(
                        "Ignoring unreadable theme setting {:?}, keeping {}",
                        value,
                        Theme::default()
                    );
                    Theme::default()
                }
            },
        };
        crate::debug!("Restored theme from store: {}", theme);

        Self {
            store,
            theme: Arc::new(RwLock::new(theme)),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store
            .set(THEME_KEY, Value::String(theme.as_str().to_string()))
            .await?;
        *self.theme.write() = theme;
        Ok(())
    }

    /// BCP-47 tag of the speech-synthesis voice.
    pub fn tts_language(&self) -> String {
        self.store
            .get(TTS_LANGUAGE_KEY)
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .unwrap_or_else(|| DEFAULT_TTS_LANGUAGE.to_string())
    }

    pub async fn set_tts_language(&self, tag: &str) -> Result<(), StoreError> {
        self.store
            .set(TTS_LANGUAGE_KEY, Value::String(tag.to_string()))
            .await
    }

    /// Whether the front-end starts without restoring the last search.
    pub fn start_blank(&self) -> bool {
        self.store
            .get(START_BLANK_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(true)
    }

    pub async fn set_start_blank(&self, start_blank: bool) -> Result<(), StoreError> {
        self.store.set(START_BLANK_KEY, Value::Bool(start_blank)).await
    }

    /// Reactive view over the raw settings mapping.
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<PrefMap> {
        self.store.subscribe()
    }

    /// Raw snapshot of every settings key.
    pub fn snapshot(&self) -> PrefMap {
        self.store.snapshot()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
