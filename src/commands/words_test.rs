// Tests for word commands
// Test cases:
// - define on an empty cache returns None and records nothing
// - define requires a non-empty word
// - Import (single object and array forms) then define round-trips and records history
// - Invalid JSON and empty headwords are rejected before anything is cached
// - suggest and random go through the store

use super::*;
use crate::commands::App;
use tempfile::TempDir;

async fn setup_app() -> (App, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = App::init(temp_dir.path()).await.expect("Failed to init app");
    (app, temp_dir)
}

async fn write_import(temp_dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join(name);
    tokio::fs::write(&path, content).await.unwrap();
    path
}

const OWL_JSON: &str = r#"{
    "word": "Owl",
    "phonetics": [{"text": "/aʊl/"}],
    "meanings": [{
        "partOfSpeech": "noun",
        "definitions": [{"definition": "A nocturnal bird of prey."}],
        "synonyms": ["night bird"],
        "antonyms": []
    }]
}"#;

#[tokio::test]
async fn test_define_miss_returns_none_without_history() {
    let (app, _temp) = setup_app().await;

    let result = define(&app.db, &app.history, "ghost").await.unwrap();
    assert!(result.is_none());
    assert!(app.history.words().is_empty());
}

#[tokio::test]
async fn test_define_requires_a_word() {
    let (app, _temp) = setup_app().await;

    let result = define(&app.db, &app.history, "   ").await;
    assert!(matches!(result, Err(CommandError::EmptyWord)));
}

#[tokio::test]
async fn test_import_single_then_define_records_history() {
    let (app, temp) = setup_app().await;
    let path = write_import(&temp, "owl.json", OWL_JSON).await;

    let count = import_file(&app.db, &path).await.unwrap();
    assert_eq!(count, 1);

    let word = define(&app.db, &app.history, "OWL")
        .await
        .unwrap()
        .expect("imported word should be cached");
    assert_eq!(word.word, "owl");
    assert_eq!(word.meanings.len(), 1);
    assert_eq!(app.history.words(), vec!["owl"]);
}

#[tokio::test]
async fn test_import_array_counts_entries() {
    let (app, temp) = setup_app().await;
    let path = write_import(
        &temp,
        "words.json",
        r#"[{"word": "cat"}, {"word": "dog"}]"#,
    )
    .await;

    let count = import_file(&app.db, &path).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(app.db.terms().await.unwrap(), vec!["cat", "dog"]);
}

#[tokio::test]
async fn test_import_invalid_json_rejected() {
    let (app, temp) = setup_app().await;
    let path = write_import(&temp, "bad.json", "{not json").await;

    let result = import_file(&app.db, &path).await;
    assert!(matches!(result, Err(CommandError::InvalidImport { .. })));
}

#[tokio::test]
async fn test_import_empty_headword_rejected_before_caching() {
    let (app, temp) = setup_app().await;
    let path = write_import(
        &temp,
        "mixed.json",
        r#"[{"word": "cat"}, {"word": "   "}]"#,
    )
    .await;

    let result = import_file(&app.db, &path).await;
    assert!(matches!(result, Err(CommandError::InvalidImport { .. })));
    // Validation happens before any write, so nothing was cached.
    assert!(app.db.terms().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_missing_file_is_io_error() {
    let (app, temp) = setup_app().await;

    let result = import_file(&app.db, &temp.path().join("nope.json")).await;
    assert!(matches!(result, Err(CommandError::Io(_))));
}

#[tokio::test]
async fn test_suggest_and_random() {
    let (app, temp) = setup_app().await;
    let path = write_import(&temp, "owl.json", OWL_JSON).await;
    import_file(&app.db, &path).await.unwrap();

    assert_eq!(suggest(&app.db, "ow", 5).await.unwrap(), vec!["owl"]);
    assert_eq!(random(&app.db).await.unwrap(), Some("owl".to_string()));
}
