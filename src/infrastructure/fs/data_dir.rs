//! Data directory resolution.
//!
//! The data directory holds the JSON document or the SQLite database. It is
//! resolved once at startup:
//! 1. `RACKETBOOK_DATA_DIR` environment variable (also used for test isolation)
//! 2. `dirs::data_dir()/racketbook` (e.g. `~/.local/share/racketbook`)
//! 3. `./.racketbook` when no platform data directory exists

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_VAR: &str = "RACKETBOOK_DATA_DIR";

/// Default data directory when neither config nor CLI names one.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_VAR).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("racketbook"))
        .unwrap_or_else(|| PathBuf::from(".racketbook"))
}
