// Command layer - composes the database and the preference stores
//
// Front-ends talk to this layer only; it owns validation and the
// user-facing error surface. The App struct wires everything to one
// data directory.

pub mod prefs;
pub mod words;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::db::{initialize_schema, DbClient, DbError};
use crate::prefs::{
    Favourites, History, PrefStore, Settings, StoreError, FAVOURITES_FILE, HISTORY_FILE,
    SETTINGS_FILE,
};

/// File name of the dictionary database inside the data directory.
pub const DB_FILE: &str = "dictionary.db";

/// Error types for command operations
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The database rejected or failed an operation
    #[error("Database error: {0}")]
    Db(#[from] DbError),
    /// A preference store failed to load or persist
    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),
    /// Reading an import file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// An import file could not be understood
    #[error("Invalid import file {path}: {reason}")]
    InvalidImport { path: String, reason: String },
    /// An operation needs a non-empty word
    #[error("A word is required")]
    EmptyWord,
    /// No setting with this key exists
    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),
    /// A setting value did not parse
    #[error("Invalid value for {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

/// Everything a front-end needs, wired to one data directory.
#[derive(Clone)]
pub struct App {
    pub db: DbClient,
    pub settings: Settings,
    pub favourites: Favourites,
    pub history: History,
    data_dir: PathBuf,
}

impl App {
    /// Open the database and the three preference stores under the given
    /// data directory, creating it as needed.
    pub async fn init(data_dir: &Path) -> Result<Self, CommandError> {
        crate::info!("Initializing app state in {:?}", data_dir);

        let db = DbClient::open(&data_dir.join(DB_FILE)).await?;
        initialize_schema(&db).await?;

        let settings_store = PrefStore::open(data_dir.join(SETTINGS_FILE)).await;
        let favourites_store = PrefStore::open(data_dir.join(FAVOURITES_FILE)).await;
        let history_store = PrefStore::open(data_dir.join(HISTORY_FILE)).await;

        Ok(Self {
            db,
            settings: Settings::new(Arc::new(settings_store)),
            favourites: Favourites::new(Arc::new(favourites_store)),
            history: History::new(Arc::new(history_store)),
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
