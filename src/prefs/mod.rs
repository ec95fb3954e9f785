//! Observable key-value preference stores.
//!
//! Three independent stores back the app's non-relational state:
//! - `settings`: typed app settings (theme, TTS language, start blank)
//! - `favourites`: the set of starred words
//! - `history`: searched words with the time they were last looked up
//!
//! Each store is a flat string-keyed JSON mapping on disk with a
//! reactive in-process view; mutations are asynchronous and serialized
//! by the store itself.

mod favourites;
mod history;
mod settings;
mod store;

pub use favourites::Favourites;
pub use history::History;
pub use settings::{Settings, Theme};
pub use store::{PrefMap, PrefStore, StoreError};

/// File names of the three stores inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";
pub const FAVOURITES_FILE: &str = "favourites.json";
pub const HISTORY_FILE: &str = "history.json";
