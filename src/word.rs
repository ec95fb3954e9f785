// Word graph model - one dictionary entry with its phonetics and meanings
//
// This is both the public type returned by cache lookups and the JSON
// shape accepted by the import path, so older exports with missing
// fields must keep deserializing.

use serde::{Deserialize, Serialize};

/// A full dictionary entry graph for one headword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// The headword this entry defines
    pub word: String,
    /// Pronunciations, possibly with an audio reference
    #[serde(default)]
    pub phonetics: Vec<WordPhonetic>,
    /// Senses of the word, grouped by part of speech
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
}

/// A pronunciation of a headword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WordPhonetic {
    /// IPA text, when known
    #[serde(default)]
    pub text: Option<String>,
    /// Reference to an audio recording, when known
    #[serde(default)]
    pub audio: Option<String>,
}

/// One sense of a word, tagged with its part of speech.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    /// Part of speech tag (e.g., "noun")
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A single definition within a meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordDefinition {
    pub definition: String,
    /// Usage example, when the source provides one
    #[serde(default)]
    pub example: Option<String>,
}

impl Word {
    /// Normalize a headword for storage and lookup.
    ///
    /// Lookups are case-insensitive and ignore surrounding whitespace, so
    /// every headword is stored in this canonical form.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

#[cfg(test)]
#[path = "word_test.rs"]
mod tests;
