//! Data directory resolution.
//!
//! All persistent state (database file and preference stores) lives under
//! a single data directory: `$LEXICAT_DATA_DIR` when set, otherwise the
//! platform data directory plus `lexicat`.

use std::io;
use std::path::PathBuf;

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "LEXICAT_DATA_DIR";

/// Resolve the data directory without touching the filesystem.
pub fn data_dir() -> io::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir()
        .map(|d| d.join("lexicat"))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine platform data directory",
            )
        })
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
