// Word commands - cached lookup, import, suggestions, random pick

use std::path::Path;

use serde::Deserialize;

use super::CommandError;
use crate::db::WordStore;
use crate::prefs::History;
use crate::word::Word;

/// An import file holds either one entry graph or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    One(Word),
    Many(Vec<Word>),
}

/// Look up a word in the cache, recording a hit in the search history.
///
/// A failed history write only loses recency, so it is logged rather
/// than failing the lookup.
pub async fn define(
    store: &dyn WordStore,
    history: &History,
    raw: &str,
) -> Result<Option<Word>, CommandError> {
    let headword = Word::normalize(raw);
    if headword.is_empty() {
        return Err(CommandError::EmptyWord);
    }

    let word = store.get_word(&headword).await?;
    if word.is_some() {
        if let Err(e) = history.record(&headword).await {
            crate::warn!("Failed to record '{}' in history: {}", headword, e);
        }
    }
    Ok(word)
}

/// Import entry graphs from a JSON file into the cache.
///
/// This is the ingestion path for successful lookups done elsewhere:
/// each imported graph replaces whatever is cached for its headword.
/// Returns the number of entries imported.
pub async fn import_file(store: &dyn WordStore, path: &Path) -> Result<usize, CommandError> {
    let content = tokio::fs::read_to_string(path).await?;
    let parsed: ImportFile =
        serde_json::from_str(&content).map_err(|e| CommandError::InvalidImport {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let words = match parsed {
        ImportFile::One(word) => vec![word],
        ImportFile::Many(words) => words,
    };

    for word in &words {
        if Word::normalize(&word.word).is_empty() {
            return Err(CommandError::InvalidImport {
                path: path.display().to_string(),
                reason: "entry with an empty headword".to_string(),
            });
        }
    }
    for word in &words {
        store.put_word(word).await?;
    }

    crate::info!("Imported {} entries from {:?}", words.len(), path);
    Ok(words.len())
}

/// Suggest cached headwords for a prefix.
pub async fn suggest(
    store: &dyn WordStore,
    prefix: &str,
    limit: usize,
) -> Result<Vec<String>, CommandError> {
    Ok(store.suggestions(prefix, limit).await?)
}

/// Pick a random cached headword.
pub async fn random(store: &dyn WordStore) -> Result<Option<String>, CommandError> {
    Ok(store.random_word().await?)
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
