// Tests for the generic DAO
// Test cases:
// - Insert then query-by-parent returns exactly the inserted rows, for every child entity type
// - Optional columns round-trip through get
// - Update rewrites columns; update/delete of a missing row is NotFound
// - Children referencing a missing parent are rejected (FK)
// - Deleting a parent that still has children is rejected (no cascade)
// - Duplicate headwords in entry/term are rejected (UNIQUE)

use super::*;
use crate::db::entity::{
    AntonymRow, DefinitionRow, EntryRow, MeaningRow, PhoneticRow, SynonymRow, TermRow,
};
use crate::db::{initialize_schema, DbClient, DbError};

async fn setup_client() -> DbClient {
    let client = DbClient::open_in_memory().await.expect("Failed to open in-memory db");
    initialize_schema(&client).await.expect("Failed to initialize schema");
    client
}

async fn insert_entry(client: &DbClient, word: &str) -> i64 {
    client
        .insert(&EntryRow {
            id: 0,
            word: word.to_string(),
        })
        .await
        .expect("Failed to insert entry")
}

async fn insert_meaning(client: &DbClient, entry_id: i64, part_of_speech: &str) -> i64 {
    client
        .insert(&MeaningRow {
            id: 0,
            entry_id,
            part_of_speech: part_of_speech.to_string(),
        })
        .await
        .expect("Failed to insert meaning")
}

#[tokio::test]
async fn test_query_by_parent_returns_exactly_inserted_rows() {
    let client = setup_client().await;

    // Two entries so each query has rows it must NOT return.
    let owl = insert_entry(&client, "owl").await;
    let cat = insert_entry(&client, "cat").await;

    let owl_noun = insert_meaning(&client, owl, "noun").await;
    let owl_verb = insert_meaning(&client, owl, "verb").await;
    let cat_noun = insert_meaning(&client, cat, "noun").await;

    let meanings: Vec<MeaningRow> = client.by_parent(owl).await.unwrap();
    assert_eq!(
        meanings.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![owl_noun, owl_verb]
    );
    assert!(meanings.iter().all(|m| m.entry_id == owl));

    for value in ["hoot", "screech"] {
        client
            .insert(&SynonymRow {
                id: 0,
                meaning_id: owl_noun,
                value: value.to_string(),
            })
            .await
            .unwrap();
    }
    client
        .insert(&SynonymRow {
            id: 0,
            meaning_id: cat_noun,
            value: "feline".to_string(),
        })
        .await
        .unwrap();
    client
        .insert(&AntonymRow {
            id: 0,
            meaning_id: owl_noun,
            value: "lark".to_string(),
        })
        .await
        .unwrap();
    client
        .insert(&PhoneticRow {
            id: 0,
            entry_id: owl,
            text: Some("/aʊl/".to_string()),
            audio: None,
        })
        .await
        .unwrap();

    let synonyms: Vec<SynonymRow> = client.by_parent(owl_noun).await.unwrap();
    assert_eq!(
        synonyms.iter().map(|s| s.value.as_str()).collect::<Vec<_>>(),
        vec!["hoot", "screech"]
    );

    let antonyms: Vec<AntonymRow> = client.by_parent(owl_noun).await.unwrap();
    assert_eq!(antonyms.len(), 1);
    assert_eq!(antonyms[0].value, "lark");

    let phonetics: Vec<PhoneticRow> = client.by_parent(owl).await.unwrap();
    assert_eq!(phonetics.len(), 1);

    // The verb meaning has no children at all.
    let none: Vec<SynonymRow> = client.by_parent(owl_verb).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_optional_columns_round_trip() {
    let client = setup_client().await;
    let entry = insert_entry(&client, "owl").await;
    let meaning = insert_meaning(&client, entry, "noun").await;

    let id = client
        .insert(&DefinitionRow {
            id: 0,
            meaning_id: meaning,
            definition: "A nocturnal bird of prey.".to_string(),
            example: None,
        })
        .await
        .unwrap();

    let fetched: DefinitionRow = client.get(id).await.unwrap().expect("row should exist");
    assert_eq!(fetched.definition, "A nocturnal bird of prey.");
    assert_eq!(fetched.example, None);
    assert_eq!(fetched.meaning_id, meaning);
    assert_eq!(fetched.id, id);
}

#[tokio::test]
async fn test_update_rewrites_columns() {
    let client = setup_client().await;
    let entry = insert_entry(&client, "owl").await;
    let meaning = insert_meaning(&client, entry, "noun").await;

    let id = client
        .insert(&DefinitionRow {
            id: 0,
            meaning_id: meaning,
            definition: "A bird.".to_string(),
            example: None,
        })
        .await
        .unwrap();

    client
        .update(&DefinitionRow {
            id,
            meaning_id: meaning,
            definition: "A nocturnal bird of prey.".to_string(),
            example: Some("An owl hooted.".to_string()),
        })
        .await
        .unwrap();

    let fetched: DefinitionRow = client.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.definition, "A nocturnal bird of prey.");
    assert_eq!(fetched.example, Some("An owl hooted.".to_string()));
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let client = setup_client().await;

    let result = client
        .update(&TermRow {
            id: 42,
            word: "ghost".to_string(),
        })
        .await;

    assert_eq!(result, Err(DbError::NotFound("term", 42)));
}

#[tokio::test]
async fn test_delete_removes_row() {
    let client = setup_client().await;
    let id = client
        .insert(&TermRow {
            id: 0,
            word: "owl".to_string(),
        })
        .await
        .unwrap();

    client.delete::<TermRow>(id).await.unwrap();
    let fetched: Option<TermRow> = client.get(id).await.unwrap();
    assert!(fetched.is_none());

    let result = client.delete::<TermRow>(id).await;
    assert_eq!(result, Err(DbError::NotFound("term", id)));
}

#[tokio::test]
async fn test_all_returns_insertion_order() {
    let client = setup_client().await;
    for word in ["cat", "owl", "bat"] {
        client
            .insert(&TermRow {
                id: 0,
                word: word.to_string(),
            })
            .await
            .unwrap();
    }

    let terms: Vec<TermRow> = client.all().await.unwrap();
    assert_eq!(
        terms.iter().map(|t| t.word.as_str()).collect::<Vec<_>>(),
        vec!["cat", "owl", "bat"]
    );
}

#[tokio::test]
async fn test_child_with_missing_parent_rejected() {
    let client = setup_client().await;

    let result = client
        .insert(&MeaningRow {
            id: 0,
            entry_id: 999,
            part_of_speech: "noun".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbError::Constraint(_))));
}

#[tokio::test]
async fn test_delete_parent_with_children_rejected() {
    let client = setup_client().await;
    let entry = insert_entry(&client, "owl").await;
    let meaning = insert_meaning(&client, entry, "noun").await;
    client
        .insert(&DefinitionRow {
            id: 0,
            meaning_id: meaning,
            definition: "A bird.".to_string(),
            example: None,
        })
        .await
        .unwrap();

    let result = client.delete::<MeaningRow>(meaning).await;
    assert!(matches!(result, Err(DbError::Constraint(_))));

    // Children first, then the parent goes through.
    client.delete_by_parent::<DefinitionRow>(meaning).await.unwrap();
    client.delete::<MeaningRow>(meaning).await.unwrap();
}

#[tokio::test]
async fn test_delete_by_parent_counts_removed_rows() {
    let client = setup_client().await;
    let entry = insert_entry(&client, "owl").await;
    let meaning = insert_meaning(&client, entry, "noun").await;
    for value in ["hoot", "screech", "whoop"] {
        client
            .insert(&SynonymRow {
                id: 0,
                meaning_id: meaning,
                value: value.to_string(),
            })
            .await
            .unwrap();
    }

    let removed = client.delete_by_parent::<SynonymRow>(meaning).await.unwrap();
    assert_eq!(removed, 3);
    let remaining: Vec<SynonymRow> = client.by_parent(meaning).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_duplicate_headword_rejected() {
    let client = setup_client().await;
    insert_entry(&client, "owl").await;

    let result = client
        .insert(&EntryRow {
            id: 0,
            word: "owl".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbError::Constraint(_))));
}
