// Preference store - a flat, observable, string-keyed JSON mapping
// persisted to a single file with atomic writes
//
// Reads come from a watch channel holding the current committed map, so
// every subscriber sees a new snapshot after each committed mutation.
// Mutations are serialized by an internal async mutex (single writer per
// store) and persist before publishing, so the reactive view never gets
// ahead of the file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::sync::{watch, Mutex};

/// Contents of one store: a flat string-keyed mapping.
pub type PrefMap = serde_json::Map<String, Value>;

/// Error types for preference store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Failed to persist the mapping
    #[error("Failed to persist preferences: {0}")]
    PersistenceError(String),
    /// Failed to load the mapping
    #[error("Failed to load preferences: {0}")]
    LoadError(String),
}

/// A file-backed observable key-value store.
#[derive(Debug)]
pub struct PrefStore {
    /// Path to the persistence file
    path: PathBuf,
    /// Serializes writers; readers go through the watch channel
    write_lock: Mutex<()>,
    /// Holds the current committed snapshot
    view: watch::Sender<PrefMap>,
}

impl PrefStore {
    /// Open the store at the given path.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt
    /// file is logged and the store also starts empty rather than
    /// failing the caller; the bad file is overwritten on the next
    /// committed mutation.
    pub async fn open(path: PathBuf) -> Self {
        let map = match Self::read_file(&path).await {
            Ok(Some(map)) => {
                crate::debug!("Loaded {} preference keys from {:?}", map.len(), path);
                map
            }
            Ok(None) => {
                crate::debug!("No preference file at {:?}, starting with empty store", path);
                PrefMap::new()
            }
            Err(e) => {
                crate::warn!("Could not load preferences from {:?}: {}", path, e);
                PrefMap::new()
            }
        };

        let (view, _) = watch::channel(map);
        Self {
            path,
            write_lock: Mutex::new(()),
            view,
        }
    }

    async fn read_file(path: &Path) -> Result<Option<PrefMap>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::LoadError(e.to_string()))?;
        let map: PrefMap =
            serde_json::from_str(&content).map_err(|e| StoreError::LoadError(e.to_string()))?;
        Ok(Some(map))
    }

    /// Subscribe to the reactive view. The receiver observes a new
    /// snapshot after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<PrefMap> {
        self.view.subscribe()
    }

    /// Current committed snapshot.
    pub fn snapshot(&self) -> PrefMap {
        self.view.borrow().clone()
    }

    /// Read one key from the current snapshot.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.view.borrow().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.view.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.view.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.borrow().is_empty()
    }

    /// Set a key, persist, then publish the new snapshot.
    pub async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.view.borrow().clone();
        map.insert(key.to_string(), value);
        self.persist(&map).await?;
        self.view.send_replace(map);
        Ok(())
    }

    /// Remove a key. Returns whether the key was present.
    pub async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.view.borrow().clone();
        if map.remove(key).is_none() {
            return Ok(false);
        }
        self.persist(&map).await?;
        self.view.send_replace(map);
        Ok(true)
    }

    /// Remove every key.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let map = PrefMap::new();
        self.persist(&map).await?;
        self.view.send_replace(map);
        Ok(())
    }

    /// Persist the mapping using atomic write (temp file + rename).
    async fn persist(&self, map: &PrefMap) -> Result<(), StoreError> {
        crate::debug!("Persisting {} preference keys to {:?}", map.len(), self.path);

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::PersistenceError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(map)
            .map_err(|e| StoreError::PersistenceError(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");

        // Write to temp file with explicit sync
        {
            let mut file = tokio::fs::File::create(&temp_path).await.map_err(|e| {
                StoreError::PersistenceError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes())
                .await
                .map_err(|e| StoreError::PersistenceError(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .await
                .map_err(|e| StoreError::PersistenceError(format!("Failed to sync: {}", e)))?;
        } // File closed here

        // Atomic rename
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            // Clean up temp file on error
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StoreError::PersistenceError(format!("Failed to rename: {}", e)));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
