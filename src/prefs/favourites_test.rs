// Tests for favourites
// Test cases:
// - Add/contains/words round trip, sorted view
// - Removing a word removes it from the reactive view on the next emission
// - Clear-all empties the reactive view
// - Favourites survive reopen

use std::sync::Arc;

use super::*;
use tempfile::TempDir;

async fn create_favourites(temp_dir: &TempDir) -> Favourites {
    let store = PrefStore::open(temp_dir.path().join("favourites.json")).await;
    Favourites::new(Arc::new(store))
}

#[tokio::test]
async fn test_add_and_sorted_view() {
    let temp_dir = TempDir::new().unwrap();
    let favourites = create_favourites(&temp_dir).await;

    favourites.add("owl").await.unwrap();
    favourites.add("cat").await.unwrap();
    favourites.add("owl").await.unwrap();

    assert_eq!(favourites.words(), vec!["cat", "owl"]);
    assert!(favourites.contains("owl"));
    assert!(!favourites.contains("dog"));
}

#[tokio::test]
async fn test_remove_updates_reactive_view() {
    let temp_dir = TempDir::new().unwrap();
    let favourites = create_favourites(&temp_dir).await;
    favourites.add("owl").await.unwrap();
    favourites.add("cat").await.unwrap();

    let mut rx = favourites.subscribe();
    assert!(favourites.remove("owl").await.unwrap());

    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow().keys().cloned().collect::<Vec<_>>(),
        vec!["cat"]
    );

    assert!(!favourites.remove("owl").await.unwrap());
}

#[tokio::test]
async fn test_clear_empties_reactive_view() {
    let temp_dir = TempDir::new().unwrap();
    let favourites = create_favourites(&temp_dir).await;
    favourites.add("owl").await.unwrap();
    favourites.add("cat").await.unwrap();

    let mut rx = favourites.subscribe();
    favourites.clear().await.unwrap();

    rx.changed().await.unwrap();
    assert!(rx.borrow().is_empty());
    assert!(favourites.words().is_empty());
}

#[tokio::test]
async fn test_favourites_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let favourites = create_favourites(&temp_dir).await;
        favourites.add("owl").await.unwrap();
    }

    let favourites = create_favourites(&temp_dir).await;
    assert_eq!(favourites.words(), vec!["owl"]);
}
