//! Storage backend trait for cached words.
//!
//! Decouples the command layer from the concrete database client so
//! front-ends can be tested against in-memory fakes. The primary
//! implementation is DbClient.

use async_trait::async_trait;

use super::{DbClient, DbError};
use crate::word::Word;

/// Backend trait for word cache operations.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Cache a word's entry graph, replacing any previous graph for the
    /// same headword.
    async fn put_word(&self, word: &Word) -> Result<(), DbError>;

    /// Load the full cached entry graph for a headword, if present.
    async fn get_word(&self, headword: &str) -> Result<Option<Word>, DbError>;

    /// Suggest cached headwords for a prefix, closest matches first.
    async fn suggestions(&self, prefix: &str, limit: usize) -> Result<Vec<String>, DbError>;

    /// Pick a uniformly random cached headword.
    async fn random_word(&self) -> Result<Option<String>, DbError>;
}

#[async_trait]
impl WordStore for DbClient {
    async fn put_word(&self, word: &Word) -> Result<(), DbError> {
        DbClient::put_word(self, word).await
    }

    async fn get_word(&self, headword: &str) -> Result<Option<Word>, DbError> {
        DbClient::get_word(self, headword).await
    }

    async fn suggestions(&self, prefix: &str, limit: usize) -> Result<Vec<String>, DbError> {
        DbClient::suggestions(self, prefix, limit).await
    }

    async fn random_word(&self) -> Result<Option<String>, DbError> {
        DbClient::random_word(self).await
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
