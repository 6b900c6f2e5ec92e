//! CombinationStore port - durable storage of saved combinations
//!
//! Two interchangeable implementations live in the infrastructure layer:
//! a JSON document file and a SQLite table. Both honor the same contract,
//! so callers never branch on the backend.

use std::path::Path;

use crate::domain::entities::{sort_newest_first, Combination, NewCombination};
use crate::domain::value_objects::CombinationId;

/// Storage operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("combination {id} not found")]
    NotFound { id: CombinationId },

    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("failed to serialize combinations: {message}")]
    Serialization { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

pub trait CombinationStore: Send + Sync {
    /// Every stored combination, newest first.
    fn list_all(&self) -> Result<Vec<Combination>, StoreError>;

    /// Persist a new record and return it with its assigned id.
    fn save(&self, combination: &NewCombination) -> Result<Combination, StoreError>;

    /// Remove a record. Returns `false` when no record had that id.
    fn delete(&self, id: CombinationId) -> Result<bool, StoreError>;

    /// Persist a copy of an existing record under a new id and a timestamp
    /// strictly later than the original's.
    fn duplicate(&self, id: CombinationId) -> Result<Combination, StoreError>;

    /// Short backend name for diagnostics (`json`, `sqlite`).
    fn backend_name(&self) -> &'static str;

    /// Where the data lives.
    fn location(&self) -> &Path;

    /// Serialized snapshot of every record, newest first.
    fn export_snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let mut combinations = self.list_all()?;
        sort_newest_first(&mut combinations);
        encode_snapshot(&combinations)
    }
}

/// Encode combinations as the export blob: a pretty-printed UTF-8 JSON array.
pub fn encode_snapshot(combinations: &[Combination]) -> Result<Vec<u8>, StoreError> {
    let mut blob =
        serde_json::to_vec_pretty(combinations).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;
    blob.push(b'\n');
    Ok(blob)
}

/// Decode an export blob.
pub fn decode_snapshot(blob: &[u8]) -> Result<Vec<Combination>, StoreError> {
    serde_json::from_slice(blob).map_err(|e| StoreError::Serialization {
        message: e.to_string(),
    })
}
