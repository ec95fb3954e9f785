// Favourites - the set of starred words
//
// Each favourite is one key in the store; the value carries no
// information. Independent of the relational cache: a favourite does
// not have to be a cached word.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use super::store::{PrefMap, PrefStore, StoreError};

/// Starred words, backed by the favourites preference store.
#[derive(Clone)]
pub struct Favourites {
    store: Arc<PrefStore>,
}

impl Favourites {
    pub fn new(store: Arc<PrefStore>) -> Self {
        Self { store }
    }

    /// Star a word. Adding an existing favourite is a no-op rewrite.
    pub async fn add(&self, word: &str) -> Result<(), StoreError> {
        self.store.set(word, Value::Bool(true)).await
    }

    /// Unstar a word. Returns whether it was starred.
    pub async fn remove(&self, word: &str) -> Result<bool, StoreError> {
        self.store.remove(word).await
    }

    /// Unstar everything.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.clear().await
    }

    pub fn contains(&self, word: &str) -> bool {
        self.store.contains(word)
    }

    /// Current favourites, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.store.snapshot().keys().cloned().collect();
        words.sort();
        words
    }

    /// Reactive view over the favourites mapping; keys are the words.
    pub fn subscribe(&self) -> watch::Receiver<PrefMap> {
        self.store.subscribe()
    }
}

#[cfg(test)]
#[path = "favourites_test.rs"]
mod tests;
