// Entry-graph operations over the generic DAO
//
// A successful dictionary lookup is cached by replacing the stored graph
// for that headword wholesale; reads reassemble the graph through the
// indexed parent-key queries. There are no partial updates. Each row is
// written independently (no cross-entity transaction), so an interrupted
// write can leave a partial graph behind; the next put of the same
// headword replaces whatever is there.

use super::entity::{
    AntonymRow, DefinitionRow, EntryRow, MeaningRow, PhoneticRow, Record, SynonymRow,
};
use super::{DbClient, DbError};
use crate::word::{Word, WordDefinition, WordMeaning, WordPhonetic};

/// Escape LIKE wildcards in user-supplied text (pattern uses `\` escapes).
fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

impl DbClient {
    /// Cache a word's entry graph, replacing any previous graph for the
    /// same headword, and record the headword in the term index.
    pub async fn put_word(&self, word: &Word) -> Result<(), DbError> {
        let headword = Word::normalize(&word.word);

        if let Some(existing) = self.entry_by_word(&headword).await? {
            crate::debug!("Replacing cached entry graph for '{}'", headword);
            self.remove_entry_graph(&existing).await?;
        }

        let entry_id = self
            .insert(&EntryRow {
                id: 0,
                word: headword.clone(),
            })
            .await?;

        for phonetic in &word.phonetics {
            self.insert(&PhoneticRow {
                id: 0,
                entry_id,
                text: phonetic.text.clone(),
                audio: phonetic.audio.clone(),
            })
            .await?;
        }

        for meaning in &word.meanings {
            let meaning_id = self
                .insert(&MeaningRow {
                    id: 0,
                    entry_id,
                    part_of_speech: meaning.part_of_speech.clone(),
                })
                .await?;

            for definition in &meaning.definitions {
                self.insert(&DefinitionRow {
                    id: 0,
                    meaning_id,
                    definition: definition.definition.clone(),
                    example: definition.example.clone(),
                })
                .await?;
            }
            for synonym in &meaning.synonyms {
                self.insert(&SynonymRow {
                    id: 0,
                    meaning_id,
                    value: synonym.clone(),
                })
                .await?;
            }
            for antonym in &meaning.antonyms {
                self.insert(&AntonymRow {
                    id: 0,
                    meaning_id,
                    value: antonym.clone(),
                })
                .await?;
            }
        }

        self.ensure_term(&headword).await?;
        Ok(())
    }

    /// Load the full cached entry graph for a headword, if present.
    pub async fn get_word(&self, headword: &str) -> Result<Option<Word>, DbError> {
        let headword = Word::normalize(headword);
        let entry = match self.entry_by_word(&headword).await? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let phonetics: Vec<PhoneticRow> = self.by_parent(entry.id).await?;
        let meanings: Vec<MeaningRow> = self.by_parent(entry.id).await?;

        let mut word = Word {
            word: entry.word,
            phonetics: phonetics
                .into_iter()
                .map(|p| WordPhonetic {
                    text: p.text,
                    audio: p.audio,
                })
                .collect(),
            meanings: Vec::with_capacity(meanings.len()),
        };

        for meaning in meanings {
            let definitions: Vec<DefinitionRow> = self.by_parent(meaning.id).await?;
            let synonyms: Vec<SynonymRow> = self.by_parent(meaning.id).await?;
            let antonyms: Vec<AntonymRow> = self.by_parent(meaning.id).await?;

            word.meanings.push(WordMeaning {
                part_of_speech: meaning.part_of_speech,
                definitions: definitions
                    .into_iter()
                    .map(|d| WordDefinition {
                        definition: d.definition,
                        example: d.example,
                    })
                    .collect(),
                synonyms: synonyms.into_iter().map(|s| s.value).collect(),
                antonyms: antonyms.into_iter().map(|a| a.value).collect(),
            });
        }

        Ok(Some(word))
    }

    /// Suggest cached headwords for a prefix, closest matches first.
    pub async fn suggestions(&self, prefix: &str, limit: usize) -> Result<Vec<String>, DbError> {
        let prefix = Word::normalize(prefix);
        if prefix.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let pattern = format!("{}%", escape_like(&prefix));
        let words = self
            .word_column(
                "SELECT word FROM term WHERE word LIKE ?1 ESCAPE '\\' ORDER BY word",
                libsql::params![pattern],
            )
            .await?;

        let mut scored: Vec<(f64, String)> = words
            .into_iter()
            .map(|word| (strsim::jaro_winkler(&prefix, &word), word))
            .collect();
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        scored.truncate(limit);

        Ok(scored.into_iter().map(|(_, word)| word).collect())
    }

    /// Pick a uniformly random headword from the term index.
    pub async fn random_word(&self) -> Result<Option<String>, DbError> {
        let words = self
            .word_column("SELECT word FROM term ORDER BY RANDOM() LIMIT 1", ())
            .await?;
        Ok(words.into_iter().next())
    }

    /// Every headword in the lookup index, sorted.
    pub async fn terms(&self) -> Result<Vec<String>, DbError> {
        self.word_column("SELECT word FROM term ORDER BY word", ()).await
    }

    /// Look up the entry row for a normalized headword.
    pub(crate) async fn entry_by_word(&self, headword: &str) -> Result<Option<EntryRow>, DbError> {
        let mut rows = self
            .query(
                "SELECT id, word FROM entry WHERE word = ?1",
                libsql::params![headword.to_string()],
            )
            .await?;
        match rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            Some(row) => Ok(Some(EntryRow::from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Delete an entry and all of its children, children first, since the
    /// foreign keys declare no cascade.
    async fn remove_entry_graph(&self, entry: &EntryRow) -> Result<(), DbError> {
        let meanings: Vec<MeaningRow> = self.by_parent(entry.id).await?;
        for meaning in &meanings {
            self.delete_by_parent::<DefinitionRow>(meaning.id).await?;
            self.delete_by_parent::<SynonymRow>(meaning.id).await?;
            self.delete_by_parent::<AntonymRow>(meaning.id).await?;
        }
        self.delete_by_parent::<MeaningRow>(entry.id).await?;
        self.delete_by_parent::<PhoneticRow>(entry.id).await?;
        self.delete::<EntryRow>(entry.id).await
    }

    async fn ensure_term(&self, headword: &str) -> Result<(), DbError> {
        self.execute(
            "INSERT OR IGNORE INTO term (word) VALUES (?1)",
            libsql::params![headword.to_string()],
        )
        .await?;
        Ok(())
    }

    async fn word_column(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<String>, DbError> {
        let mut rows = self.query(sql, params).await?;
        let mut words = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            let word: String = row.get(0).map_err(|e| DbError::Decode(e.to_string()))?;
            words.push(word);
        }
        Ok(words)
    }
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
