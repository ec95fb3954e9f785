mod paths;

pub mod commands;
pub mod db;
pub mod prefs;
pub mod word;

pub use paths::data_dir;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
