// Search history - words keyed to the time they were last looked up
//
// The key is the word, the value its last-searched RFC 3339 timestamp,
// so re-searching a word moves it back to the front of the view.
// Independent of the relational cache.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;
use tokio::sync::watch;

use super::store::{PrefMap, PrefStore, StoreError};

/// Searched words, backed by the history preference store.
#[derive(Clone)]
pub struct History {
    store: Arc<PrefStore>,
}

impl History {
    pub fn new(store: Arc<PrefStore>) -> Self {
        Self { store }
    }

    /// Record a search, stamping the word with the current time.
    pub async fn record(&self, word: &str) -> Result<(), StoreError> {
        self.store
            .set(word, Value::String(Utc::now().to_rfc3339()))
            .await
    }

    /// Forget a word. Returns whether it was recorded.
    pub async fn remove(&self, word: &str) -> Result<bool, StoreError> {
        self.store.remove(word).await
    }

    /// Forget everything.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.clear().await
    }

    pub fn contains(&self, word: &str) -> bool {
        self.store.contains(word)
    }

    /// Searched words, most recent first. Entries whose timestamp does
    /// not parse sort last, in name order.
    pub fn words(&self) -> Vec<String> {
        let mut stamped: Vec<(Option<DateTime<FixedOffset>>, String)> = self
            .store
            .snapshot()
            .iter()
            .map(|(word, value)| {
                let stamp = value
                    .as_str()
                    .and_then(|s| DateTime::parse_from_rfc3339(s).ok());
                (stamp, word.clone())
            })
            .collect();

        stamped.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        stamped.into_iter().map(|(_, word)| word).collect()
    }

    /// Reactive view over the history mapping; keys are the words.
    pub fn subscribe(&self) -> watch::Receiver<PrefMap> {
        self.store.subscribe()
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
