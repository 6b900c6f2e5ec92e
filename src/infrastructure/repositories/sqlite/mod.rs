//! SQLite Combination Store
//!
//! One row per combination in the `combinations` table. The table shape is
//! checked (and migrated if needed) once, when the store is opened; see
//! [`schema`].

mod schema;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::entities::{sort_newest_first, Combination, NewCombination};
use crate::domain::ports::{CombinationStore, StoreError};
use crate::domain::value_objects::timestamp::{
    format_timestamp, fresh_after, parse_timestamp_or_epoch,
};
use crate::domain::value_objects::CombinationId;

pub use schema::{detect_shape, MigrationOutcome, TableShape};

use schema::{select_columns, TABLE};

/// Default database file name inside the data directory.
pub const DEFAULT_SQLITE_FILE: &str = "combinations.db";

pub struct SqliteCombinationStore {
    path: PathBuf,
    conn: Mutex<Connection>,
    shape: TableShape,
    migration: MigrationOutcome,
}

impl SqliteCombinationStore {
    /// Open (or create) the database at `path` and bring the table up to date.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::unavailable(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(&path).map_err(|e| {
            StoreError::unavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_connection(conn, path)
    }

    /// Store at `DEFAULT_SQLITE_FILE` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Result<Self, StoreError> {
        Self::open(data_dir.join(DEFAULT_SQLITE_FILE))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::unavailable(format!("cannot open in-memory db: {e}")))?;
        Self::from_connection(conn, PathBuf::from(":memory:"))
    }

    fn from_connection(mut conn: Connection, path: PathBuf) -> Result<Self, StoreError> {
        let migration = schema::migrate(&mut conn);
        if let MigrationOutcome::Failed { reason } = &migration {
            tracing::warn!(path = %path.display(), %reason, "combinations table left in its old shape");
        }

        let shape = detect_shape(&conn).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "cannot inspect combinations database");
            TableShape::Unreadable {
                reason: e.to_string(),
            }
        });
        tracing::debug!(path = %path.display(), ?shape, ?migration, "opened sqlite store");

        Ok(Self {
            path,
            conn: Mutex::new(conn),
            shape,
            migration,
        })
    }

    /// What happened to the table when the store was opened.
    pub fn migration(&self) -> &MigrationOutcome {
        &self.migration
    }

    pub fn shape(&self) -> &TableShape {
        &self.shape
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::unavailable("sqlite connection poisoned"))
    }

    /// Writes are only allowed on the current shape; the old single-rubber
    /// table would drop the back rubber.
    fn ensure_writable(&self) -> Result<(), StoreError> {
        match &self.shape {
            TableShape::Current => Ok(()),
            TableShape::Unreadable { reason } => Err(StoreError::unavailable(format!(
                "cannot read {}: {}",
                self.path.display(),
                reason
            ))),
            _ => Err(StoreError::unavailable(format!(
                "{} has an outdated combinations table that could not be migrated; writes are disabled",
                self.path.display()
            ))),
        }
    }

    fn select_sql(&self, filter: &str) -> Result<String, StoreError> {
        let columns = select_columns(&self.shape).ok_or_else(|| match &self.shape {
            TableShape::Unreadable { reason } => {
                StoreError::unavailable(format!("cannot read {}: {}", self.path.display(), reason))
            }
            _ => StoreError::unavailable(format!(
                "{} has an unsupported combinations table",
                self.path.display()
            )),
        })?;
        Ok(format!("SELECT {columns} FROM {TABLE} {filter}"))
    }
}

fn row_to_combination(row: &Row<'_>) -> rusqlite::Result<Combination> {
    let id: i64 = row.get(0)?;
    let created_at: String = row.get(6)?;
    Ok(Combination {
        id: CombinationId::new(u64::try_from(id).unwrap_or_default()),
        playstyle: row.get(1)?,
        racket: row.get(2)?,
        rubber_front: row.get(3)?,
        rubber_back: row.get(4)?,
        notes: row.get(5)?,
        saved_at: parse_timestamp_or_epoch(&created_at),
    })
}

fn sql_error(context: &str, e: rusqlite::Error) -> StoreError {
    StoreError::unavailable(format!("{context}: {e}"))
}

fn sql_id(id: CombinationId) -> i64 {
    i64::try_from(id.get()).unwrap_or(i64::MAX)
}

impl CombinationStore for SqliteCombinationStore {
    fn list_all(&self) -> Result<Vec<Combination>, StoreError> {
        let sql = self.select_sql("")?;
        let conn = self.conn()?;

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| sql_error("cannot query combinations", e))?;
        let mut combinations = stmt
            .query_map([], row_to_combination)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| sql_error("cannot read combinations", e))?;

        sort_newest_first(&mut combinations);
        tracing::debug!(count = combinations.len(), "loaded combinations from sqlite");
        Ok(combinations)
    }

    fn save(&self, combination: &NewCombination) -> Result<Combination, StoreError> {
        self.ensure_writable()?;
        let conn = self.conn()?;
        let draft = &combination.draft;

        conn.execute(
            "INSERT INTO combinations (playstyle, racket, rubber_front, rubber_back, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.playstyle,
                draft.racket,
                draft.rubber_front,
                draft.rubber_back,
                draft.notes,
                format_timestamp(combination.saved_at),
            ],
        )
        .map_err(|e| sql_error("cannot insert combination", e))?;

        let id = CombinationId::new(u64::try_from(conn.last_insert_rowid()).unwrap_or_default());
        tracing::info!(%id, path = %self.path.display(), "saved combination");
        Ok(Combination::from_new(id, combination))
    }

    fn delete(&self, id: CombinationId) -> Result<bool, StoreError> {
        self.ensure_writable()?;
        let conn = self.conn()?;

        let removed = conn
            .execute("DELETE FROM combinations WHERE id = ?1", params![sql_id(id)])
            .map_err(|e| sql_error("cannot delete combination", e))?;

        if removed > 0 {
            tracing::info!(%id, "deleted combination");
        } else {
            tracing::debug!(%id, "delete: no such combination");
        }
        Ok(removed > 0)
    }

    fn duplicate(&self, id: CombinationId) -> Result<Combination, StoreError> {
        self.ensure_writable()?;
        let sql = self.select_sql("WHERE id = ?1")?;
        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| sql_error("cannot start transaction", e))?;

        let original = tx
            .query_row(&sql, params![sql_id(id)], row_to_combination)
            .optional()
            .map_err(|e| sql_error("cannot read combination", e))?
            .ok_or(StoreError::NotFound { id })?;

        let saved_at = fresh_after(original.saved_at);
        tx.execute(
            "INSERT INTO combinations (playstyle, racket, rubber_front, rubber_back, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                original.playstyle,
                original.racket,
                original.rubber_front,
                original.rubber_back,
                original.notes,
                format_timestamp(saved_at),
            ],
        )
        .map_err(|e| sql_error("cannot insert combination", e))?;
        let new_id = CombinationId::new(u64::try_from(tx.last_insert_rowid()).unwrap_or_default());
        tx.commit()
            .map_err(|e| sql_error("cannot commit duplicate", e))?;

        tracing::info!(from = %id, id = %new_id, "duplicated combination");
        Ok(original.duplicate_as(new_id, saved_at))
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
