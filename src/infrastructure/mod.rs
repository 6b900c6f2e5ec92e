//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file and database I/O
//! lives here.
//!
//! ## Structure
//!
//! - `fs/` - atomic writes, advisory locks, data directory resolution
//! - `repositories/` - JSON document and SQLite combination stores

pub mod fs;
pub mod repositories;

pub use repositories::{
    JsonCombinationStore, MigrationOutcome, SqliteCombinationStore, DEFAULT_JSON_FILE,
    DEFAULT_SQLITE_FILE,
};
