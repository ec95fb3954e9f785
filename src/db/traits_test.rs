// Tests for the WordStore backend trait
// Test cases:
// - DbClient satisfies the trait object interface used by front-ends

use super::*;
use crate::db::{initialize_schema, DbClient};
use crate::word::Word;

#[tokio::test]
async fn test_db_client_usable_as_trait_object() {
    let client = DbClient::open_in_memory().await.unwrap();
    initialize_schema(&client).await.unwrap();

    let store: &dyn WordStore = &client;
    store
        .put_word(&Word {
            word: "owl".to_string(),
            phonetics: vec![],
            meanings: vec![],
        })
        .await
        .unwrap();

    let fetched = store.get_word("owl").await.unwrap();
    assert_eq!(fetched.map(|w| w.word), Some("owl".to_string()));
    assert_eq!(store.suggestions("ow", 5).await.unwrap(), vec!["owl"]);
    assert_eq!(store.random_word().await.unwrap(), Some("owl".to_string()));
}
