//! Table shape detection and in-place migration.
//!
//! The first release stored one merged `rubber` column. The current shape
//! splits it into `rubber_front` and `rubber_back`. Migration runs once when
//! the store opens, inside a single transaction: create the new table, copy
//! every row, drop the old table, rename the new one into place. Any failure
//! rolls back and leaves the old table as it was.

use rusqlite::{params, Connection};

use crate::domain::value_objects::timestamp::{format_timestamp, now};

pub(crate) const TABLE: &str = "combinations";
const STAGING_TABLE: &str = "combinations_new";

fn create_table_sql(name: &str) -> String {
    format!(
        "CREATE TABLE {name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            playstyle TEXT NOT NULL,
            racket TEXT NOT NULL,
            rubber_front TEXT NOT NULL,
            rubber_back TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )"
    )
}

/// Shape of the `combinations` table as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableShape {
    Absent,
    Current,
    /// Single `rubber` column; optional columns recorded for the copy.
    Legacy {
        has_id: bool,
        has_notes: bool,
        has_created_at: bool,
    },
    /// Neither shape; left alone.
    Unrecognized { columns: Vec<String> },
    /// The file could not be inspected at all (not a database, damaged).
    Unreadable { reason: String },
}

/// Result of the open-time migration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// No table existed; the current shape was created.
    Created,
    /// The table already had the current shape.
    UpToDate,
    /// Legacy rows were copied into the current shape.
    Migrated { rows: usize },
    /// Migration was attempted (or impossible) and nothing changed.
    Failed { reason: String },
}

impl MigrationOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, MigrationOutcome::Failed { .. })
    }
}

pub fn detect_shape(conn: &Connection) -> rusqlite::Result<TableShape> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({TABLE})"))?;
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<_>>()?;

    if columns.is_empty() {
        return Ok(TableShape::Absent);
    }

    let has = |name: &str| columns.iter().any(|c| c.eq_ignore_ascii_case(name));

    if has("rubber_front") && has("rubber_back") {
        Ok(TableShape::Current)
    } else if has("rubber") && !has("rubber_front") && !has("rubber_back") {
        Ok(TableShape::Legacy {
            has_id: has("id"),
            has_notes: has("notes"),
            has_created_at: has("created_at"),
        })
    } else {
        Ok(TableShape::Unrecognized { columns })
    }
}

/// Bring the table to the current shape. Never leaves a half-migrated table.
pub fn migrate(conn: &mut Connection) -> MigrationOutcome {
    let shape = match detect_shape(conn) {
        Ok(shape) => shape,
        Err(e) => {
            return MigrationOutcome::Failed {
                reason: format!("cannot inspect table: {e}"),
            }
        }
    };

    match shape {
        TableShape::Current => MigrationOutcome::UpToDate,
        TableShape::Absent => match conn.execute_batch(&create_table_sql(TABLE)) {
            Ok(()) => {
                tracing::info!("created combinations table");
                MigrationOutcome::Created
            }
            Err(e) => MigrationOutcome::Failed {
                reason: format!("cannot create table: {e}"),
            },
        },
        TableShape::Legacy {
            has_id,
            has_notes,
            has_created_at,
        } => match migrate_legacy(conn, has_id, has_notes, has_created_at) {
            Ok(rows) => {
                tracing::info!(rows, "migrated combinations table to split rubber columns");
                MigrationOutcome::Migrated { rows }
            }
            Err(e) => {
                tracing::warn!(error = %e, "combinations table migration failed; rolled back");
                MigrationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        },
        TableShape::Unrecognized { columns } => MigrationOutcome::Failed {
            reason: format!("unrecognized table columns: {}", columns.join(", ")),
        },
        TableShape::Unreadable { reason } => MigrationOutcome::Failed { reason },
    }
}

fn migrate_legacy(
    conn: &mut Connection,
    has_id: bool,
    has_notes: bool,
    has_created_at: bool,
) -> rusqlite::Result<usize> {
    let id = if has_id { "id" } else { "rowid" };
    let notes = if has_notes { "COALESCE(notes, '')" } else { "''" };
    let created_at = if has_created_at {
        "COALESCE(created_at, ?1)"
    } else {
        "?1"
    };

    // Dropping `tx` without commit rolls everything back.
    let tx = conn.transaction()?;
    tx.execute_batch(&create_table_sql(STAGING_TABLE))?;
    let rows = tx.execute(
        &format!(
            "INSERT INTO {STAGING_TABLE}
                (id, playstyle, racket, rubber_front, rubber_back, notes, created_at)
             SELECT {id}, COALESCE(playstyle, ''), COALESCE(racket, ''), COALESCE(rubber, ''),
                    '', {notes}, {created_at}
             FROM {TABLE}"
        ),
        params![format_timestamp(now())],
    )?;
    tx.execute_batch(&format!(
        "DROP TABLE {TABLE};
         ALTER TABLE {STAGING_TABLE} RENAME TO {TABLE};"
    ))?;
    tx.commit()?;

    Ok(rows)
}

/// Column list for reading rows in the given shape, mapped to the current
/// field order.
pub(crate) fn select_columns(shape: &TableShape) -> Option<String> {
    match shape {
        TableShape::Current => {
            Some("id, playstyle, racket, rubber_front, rubber_back, notes, created_at".to_string())
        }
        TableShape::Legacy {
            has_id,
            has_notes,
            has_created_at,
        } => Some(format!(
            "{}, COALESCE(playstyle, ''), COALESCE(racket, ''), COALESCE(rubber, ''), '', {}, {}",
            if *has_id { "id" } else { "rowid" },
            if *has_notes { "COALESCE(notes, '')" } else { "''" },
            if *has_created_at {
                "COALESCE(created_at, '')"
            } else {
                "''"
            },
        )),
        TableShape::Absent | TableShape::Unrecognized { .. } | TableShape::Unreadable { .. } => {
            None
        }
    }
}
