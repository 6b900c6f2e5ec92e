//! JSON Combination Store
//!
//! Keeps every combination in one pretty-printed JSON array, newest first.
//! Each mutation locks, reads the whole document, applies the change, and
//! rewrites the whole file atomically. There are no partial updates.
//!
//! The highest id ever handed out is kept in a sibling `.last_id` file, so
//! deleting the newest record never frees its id for reuse.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{sort_newest_first, Combination, NewCombination};
use crate::domain::ports::{CombinationStore, StoreError};
use crate::domain::value_objects::timestamp::{
    format_timestamp, fresh_after, parse_timestamp_or_epoch,
};
use crate::domain::value_objects::CombinationId;
use crate::infrastructure::fs::{atomic_write, lock_path_for, sibling_with_suffix, FileLock};

/// Default document file name inside the data directory.
pub const DEFAULT_JSON_FILE: &str = "saved_combinations.json";

/// On-disk record.
///
/// Every field is optional on read so documents written before ids and
/// notes existed still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct JsonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(default)]
    playstyle: String,
    #[serde(default)]
    racket: String,
    #[serde(default)]
    rubber_front: String,
    #[serde(default)]
    rubber_back: String,
    #[serde(default)]
    notes: String,
    #[serde(default, alias = "created_at")]
    saved_at: String,
}

impl From<&Combination> for JsonRecord {
    fn from(c: &Combination) -> Self {
        Self {
            id: Some(c.id.get()),
            playstyle: c.playstyle.clone(),
            racket: c.racket.clone(),
            rubber_front: c.rubber_front.clone(),
            rubber_back: c.rubber_back.clone(),
            notes: c.notes.clone(),
            saved_at: format_timestamp(c.saved_at),
        }
    }
}

/// What was found at the document path.
enum Document {
    Missing,
    Unreadable(io::Error),
    Corrupt(String),
    Parsed(Vec<Combination>),
}

/// Records loaded for a mutation, plus the highest id ever issued.
struct Ledger {
    records: Vec<Combination>,
    last_issued: CombinationId,
}

impl Ledger {
    fn new(records: Vec<Combination>, last_issued: CombinationId) -> Self {
        let last_issued = records
            .iter()
            .map(|c| c.id)
            .chain([last_issued])
            .max()
            .unwrap_or_default();
        Self {
            records,
            last_issued,
        }
    }

    fn issue_id(&mut self) -> Result<CombinationId, StoreError> {
        let id = self.last_issued.checked_next().ok_or_else(|| {
            StoreError::unavailable(format!(
                "no combination ids left after {}",
                self.last_issued
            ))
        })?;
        self.last_issued = id;
        Ok(id)
    }
}

pub struct JsonCombinationStore {
    path: PathBuf,
}

impl JsonCombinationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `DEFAULT_JSON_FILE` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(DEFAULT_JSON_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupt document is moved before it gets overwritten.
    pub fn quarantine_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".corrupt")
    }

    /// Where the highest issued id is recorded.
    pub fn last_id_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".last_id")
    }

    /// Highest id ever issued by this store; zero when nothing was recorded.
    fn read_last_issued(&self) -> CombinationId {
        let path = self.last_id_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return CombinationId::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read last issued id");
                return CombinationId::default();
            }
        };
        match text.trim().parse::<CombinationId>() {
            Ok(id) if id.get() <= CombinationId::MAX => id,
            _ => {
                tracing::warn!(path = %path.display(), "ignoring malformed last issued id");
                CombinationId::default()
            }
        }
    }

    fn read_document(&self, last_issued: CombinationId) -> Document {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Document::Missing,
            Err(e) => return Document::Unreadable(e),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return Document::Parsed(Vec::new());
        }

        let records = match serde_json::from_slice::<Vec<JsonRecord>>(&content) {
            Ok(records) => records,
            Err(e) => return Document::Corrupt(e.to_string()),
        };
        match assign_ids(records, last_issued) {
            Ok(combinations) => Document::Parsed(combinations),
            Err(message) => Document::Corrupt(message),
        }
    }

    /// Current records for a mutation. Must be called with the lock held.
    fn load_for_write(&self) -> Result<Ledger, StoreError> {
        let last_issued = self.read_last_issued();
        let records = match self.read_document(last_issued) {
            Document::Missing => Vec::new(),
            Document::Parsed(records) => records,
            Document::Unreadable(e) => {
                return Err(StoreError::unavailable(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
            Document::Corrupt(message) => {
                let quarantine = self.quarantine_path();
                fs::rename(&self.path, &quarantine).map_err(|e| {
                    StoreError::unavailable(format!(
                        "cannot move corrupt {} aside: {}",
                        self.path.display(),
                        e
                    ))
                })?;
                tracing::warn!(
                    path = %self.path.display(),
                    moved_to = %quarantine.display(),
                    error = %message,
                    "corrupt combinations file moved aside; starting a new one"
                );
                Vec::new()
            }
        };
        Ok(Ledger::new(records, last_issued))
    }

    /// Persist the id high-water mark first, then the document.
    fn write_all(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let last_id_path = self.last_id_path();
        atomic_write(&last_id_path, format!("{}\n", ledger.last_issued).as_bytes()).map_err(
            |e| StoreError::unavailable(format!("cannot write {}: {}", last_id_path.display(), e)),
        )?;

        let records: Vec<JsonRecord> = ledger.records.iter().map(JsonRecord::from).collect();
        let mut content =
            serde_json::to_vec_pretty(&records).map_err(|e| StoreError::Serialization {
                message: e.to_string(),
            })?;
        content.push(b'\n');

        atomic_write(&self.path, &content).map_err(|e| {
            StoreError::unavailable(format!("cannot write {}: {}", self.path.display(), e))
        })
    }

    fn lock(&self) -> Result<FileLock, StoreError> {
        FileLock::acquire(&lock_path_for(&self.path)).map_err(|e| {
            StoreError::unavailable(format!("cannot lock {}: {}", self.path.display(), e))
        })
    }
}

impl CombinationStore for JsonCombinationStore {
    fn list_all(&self) -> Result<Vec<Combination>, StoreError> {
        let mut combinations = match self.read_document(self.read_last_issued()) {
            Document::Missing => Vec::new(),
            Document::Parsed(records) => records,
            Document::Unreadable(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "combinations file unreadable; treating as empty");
                Vec::new()
            }
            Document::Corrupt(message) => {
                tracing::warn!(path = %self.path.display(), error = %message, "combinations file corrupt; treating as empty");
                Vec::new()
            }
        };
        sort_newest_first(&mut combinations);
        tracing::debug!(count = combinations.len(), "loaded combinations from json");
        Ok(combinations)
    }

    fn save(&self, combination: &NewCombination) -> Result<Combination, StoreError> {
        let _lock = self.lock()?;
        let mut ledger = self.load_for_write()?;

        let saved = Combination::from_new(ledger.issue_id()?, combination);
        ledger.records.insert(0, saved.clone());
        self.write_all(&ledger)?;

        tracing::info!(id = %saved.id, path = %self.path.display(), "saved combination");
        Ok(saved)
    }

    fn delete(&self, id: CombinationId) -> Result<bool, StoreError> {
        let _lock = self.lock()?;
        let mut ledger = self.load_for_write()?;

        let Some(index) = ledger.records.iter().position(|c| c.id == id) else {
            tracing::debug!(%id, "delete: no such combination");
            return Ok(false);
        };
        ledger.records.remove(index);
        self.write_all(&ledger)?;

        tracing::info!(%id, "deleted combination");
        Ok(true)
    }

    fn duplicate(&self, id: CombinationId) -> Result<Combination, StoreError> {
        let _lock = self.lock()?;
        let mut ledger = self.load_for_write()?;

        let original = ledger
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })?;
        let copy = original.duplicate_as(ledger.issue_id()?, fresh_after(original.saved_at));

        ledger.records.insert(0, copy.clone());
        self.write_all(&ledger)?;

        tracing::info!(from = %id, id = %copy.id, "duplicated combination");
        Ok(copy)
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Convert on-disk records, giving every record a unique id.
///
/// The document is newest-first, so ids are handed out walking from the
/// oldest record. Records without an id, or repeating an id already seen,
/// get the next id after both the current maximum and `last_issued`. An id
/// above [`CombinationId::MAX`] makes the whole document unusable.
fn assign_ids(
    records: Vec<JsonRecord>,
    last_issued: CombinationId,
) -> Result<Vec<Combination>, String> {
    if let Some(id) = records
        .iter()
        .filter_map(|r| r.id)
        .find(|&id| id > CombinationId::MAX)
    {
        return Err(format!("combination id {id} is out of range"));
    }

    let mut last = records
        .iter()
        .filter_map(|r| r.id)
        .map(CombinationId::new)
        .chain([last_issued])
        .max()
        .unwrap_or_default();
    let mut seen = HashSet::new();
    let mut combinations = Vec::with_capacity(records.len());

    for record in records.into_iter().rev() {
        let id = match record.id.map(CombinationId::new) {
            Some(id) if seen.insert(id) => id,
            _ => {
                last = last
                    .checked_next()
                    .ok_or_else(|| format!("no combination ids left after {last}"))?;
                seen.insert(last);
                last
            }
        };
        combinations.push(Combination {
            id,
            playstyle: record.playstyle,
            racket: record.racket,
            rubber_front: record.rubber_front,
            rubber_back: record.rubber_back,
            notes: record.notes,
            saved_at: parse_timestamp_or_epoch(&record.saved_at),
        });
    }
    combinations.reverse();
    Ok(combinations)
}
