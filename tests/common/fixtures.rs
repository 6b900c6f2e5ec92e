//! Files in the shapes older releases left on disk.

use std::path::Path;

use rusqlite::Connection;

/// Single `rubber` column, no notes, ids present.
pub const LEGACY_TABLE_WITH_IDS: &str = "
    CREATE TABLE combinations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        playstyle TEXT,
        racket TEXT,
        rubber TEXT,
        created_at TEXT
    );
    INSERT INTO combinations (playstyle, racket, rubber, created_at)
        VALUES ('Attacker', 'VISCARIA', 'Tenergy 05', '2024-05-01T10:00:00Z');
    INSERT INTO combinations (playstyle, racket, rubber, created_at)
        VALUES ('Defender', 'Defensive Blade', 'Palio CJ8000', '2024-05-02T10:00:00Z');
";

/// The oldest shape: no id column and no timestamps at all.
pub const LEGACY_TABLE_WITHOUT_IDS: &str = "
    CREATE TABLE combinations (
        playstyle TEXT,
        racket TEXT,
        rubber TEXT,
        notes TEXT
    );
    INSERT INTO combinations VALUES ('All-round', 'Allround Classic', 'Mark V', 'first bat');
    INSERT INTO combinations VALUES ('Counter', NULL, 'Sriver', NULL);
";

pub fn write_sqlite(path: &Path, sql: &str) {
    let conn = Connection::open(path).expect("open fixture db");
    conn.execute_batch(sql).expect("seed fixture db");
}

/// JSON document written before records carried ids or notes.
pub const LEGACY_JSON_DOCUMENT: &str = r#"[
  {
    "playstyle": "Attacker",
    "racket": "VISCARIA",
    "rubber_front": "Tenergy 05",
    "rubber_back": "Tenergy 64",
    "created_at": "2024-06-02T09:30:00Z"
  },
  {
    "playstyle": "Defender",
    "racket": "Defensive Blade",
    "rubber_front": "XIOM Vega Europe",
    "rubber_back": "Palio CJ8000",
    "created_at": "2024-06-01T09:30:00Z"
  }
]
"#;
