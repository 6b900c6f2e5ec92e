//! Combination Store Implementations
//!
//! Concrete implementations of the `CombinationStore` port.

mod json;
mod sqlite;

pub use json::{JsonCombinationStore, DEFAULT_JSON_FILE};
pub use sqlite::{
    detect_shape, MigrationOutcome, SqliteCombinationStore, TableShape, DEFAULT_SQLITE_FILE,
};
