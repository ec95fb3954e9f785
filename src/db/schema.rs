// Database schema definitions and migration system
//
// This module defines the SQLite schema for the dictionary entity tables
// and provides a migration system for future schema changes.

use super::{DbClient, DbError};

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Root record for a cached headword
    r#"CREATE TABLE IF NOT EXISTS entry (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT UNIQUE NOT NULL
    )"#,
    // Pronunciations of an entry
    r#"CREATE TABLE IF NOT EXISTS phonetic (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        entry_id INTEGER NOT NULL,
        text TEXT,
        audio TEXT,
        FOREIGN KEY (entry_id) REFERENCES entry(id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_phonetic_entry_id ON phonetic(entry_id)"#,
    // One sense of an entry, tagged with part of speech
    r#"CREATE TABLE IF NOT EXISTS meaning (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        entry_id INTEGER NOT NULL,
        part_of_speech TEXT NOT NULL,
        FOREIGN KEY (entry_id) REFERENCES entry(id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_meaning_entry_id ON meaning(entry_id)"#,
    // Definitions belonging to a meaning
    r#"CREATE TABLE IF NOT EXISTS definition (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meaning_id INTEGER NOT NULL,
        definition TEXT NOT NULL,
        example TEXT,
        FOREIGN KEY (meaning_id) REFERENCES meaning(id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_definition_meaning_id ON definition(meaning_id)"#,
    // Synonyms belonging to a meaning
    r#"CREATE TABLE IF NOT EXISTS synonym (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meaning_id INTEGER NOT NULL,
        value TEXT NOT NULL,
        FOREIGN KEY (meaning_id) REFERENCES meaning(id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_synonym_meaning_id ON synonym(meaning_id)"#,
    // Antonyms belonging to a meaning
    r#"CREATE TABLE IF NOT EXISTS antonym (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meaning_id INTEGER NOT NULL,
        value TEXT NOT NULL,
        FOREIGN KEY (meaning_id) REFERENCES meaning(id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_antonym_meaning_id ON antonym(meaning_id)"#,
    // Standalone lookup index of every headword ever cached
    r#"CREATE TABLE IF NOT EXISTS term (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT UNIQUE NOT NULL
    )"#,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist and runs any pending migrations.
/// This should be called once during application startup after DbClient is created.
pub async fn initialize_schema(client: &DbClient) -> Result<(), DbError> {
    // First, ensure schema_version table exists (needed for version checking)
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    // Check current schema version
    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        // Fresh database - create all tables
        crate::info!("Initializing dictionary database schema (version {})", SCHEMA_VERSION);

        // Execute each CREATE statement
        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }

        // Set schema version
        set_schema_version(client, SCHEMA_VERSION).await?;

        crate::info!("Dictionary database schema initialized successfully");
    } else if current_version < SCHEMA_VERSION {
        // Run migrations
        crate::info!(
            "Migrating dictionary database from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
        crate::info!("Dictionary database migration complete");
    } else {
        crate::debug!("Dictionary database schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 if no version has been recorded yet.
async fn get_schema_version(client: &DbClient) -> Result<i32, DbError> {
    let mut rows = client
        .query("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1", ())
        .await?;

    match rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| DbError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(client: &DbClient, version: i32) -> Result<(), DbError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another.
/// Each migration is a function that updates the schema.
async fn run_migrations(
    client: &DbClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), DbError> {
    for version in (from_version + 1)..=to_version {
        match version {
            // 2 => migrate_v1_to_v2(client).await?,
            _ => {
                // No migration needed for this version
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
