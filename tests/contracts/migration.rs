//! Legacy files are upgraded in place, or left untouched when that fails.

use rusqlite::Connection;
use tempfile::tempdir;

use racketbook::domain::entities::NewCombination;
use racketbook::domain::value_objects::timestamp;
use racketbook::infrastructure::repositories::{detect_shape, TableShape};
use racketbook::infrastructure::{
    JsonCombinationStore, MigrationOutcome, SqliteCombinationStore, DEFAULT_SQLITE_FILE,
};
use racketbook::{CombinationDraft, CombinationId, CombinationStore, StoreError};

use crate::common::{
    write_sqlite, LEGACY_JSON_DOCUMENT, LEGACY_TABLE_WITHOUT_IDS, LEGACY_TABLE_WITH_IDS,
};

fn new_combo() -> NewCombination {
    NewCombination::new(
        CombinationDraft::new("Two-Winged", "Carbon Speed", "Dignics 05")
            .with_rubber_back("Rasanter R47"),
        timestamp::now(),
    )
}

#[test]
fn contract_legacy_table_is_split_into_front_and_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SQLITE_FILE);
    write_sqlite(&path, LEGACY_TABLE_WITH_IDS);

    let store = SqliteCombinationStore::open(&path).unwrap();
    assert_eq!(store.migration(), &MigrationOutcome::Migrated { rows: 2 });
    assert_eq!(store.shape(), &TableShape::Current);

    let list = store.list_all().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].racket, "Defensive Blade");
    assert_eq!(list[0].rubber_front, "Palio CJ8000");
    assert_eq!(list[0].rubber_back, "");
    assert_eq!(list[1].id, CombinationId::new(1));

    let next = store.save(&new_combo()).unwrap();
    assert_eq!(next.id, CombinationId::new(3));
}

#[test]
fn contract_migration_runs_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SQLITE_FILE);
    write_sqlite(&path, LEGACY_TABLE_WITH_IDS);

    drop(SqliteCombinationStore::open(&path).unwrap());
    let reopened = SqliteCombinationStore::open(&path).unwrap();
    assert_eq!(reopened.migration(), &MigrationOutcome::UpToDate);
    assert_eq!(reopened.list_all().unwrap().len(), 2);
}

#[test]
fn contract_oldest_table_uses_rowids_and_fills_blanks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SQLITE_FILE);
    write_sqlite(&path, LEGACY_TABLE_WITHOUT_IDS);

    let before = timestamp::now();
    let store = SqliteCombinationStore::open(&path).unwrap();
    assert_eq!(store.migration(), &MigrationOutcome::Migrated { rows: 2 });

    let list = store.list_all().unwrap();
    let ids: Vec<u64> = list.iter().map(|c| c.id.get()).collect();
    assert_eq!(ids, [2, 1]);

    let counter = &list[0];
    assert_eq!(counter.racket, "");
    assert_eq!(counter.rubber_front, "Sriver");
    assert_eq!(counter.notes, "");
    assert!(counter.saved_at >= before - chrono::Duration::seconds(1));

    assert_eq!(list[1].notes, "first bat");
}

#[test]
fn contract_failed_migration_leaves_file_readable_and_read_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SQLITE_FILE);
    write_sqlite(
        &path,
        &format!("{LEGACY_TABLE_WITH_IDS} CREATE TABLE combinations_new (blocker TEXT);"),
    );

    let store = SqliteCombinationStore::open(&path).unwrap();
    assert!(store.migration().is_failed());

    let list = store.list_all().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].rubber_front, "Tenergy 05");

    assert!(matches!(
        store.save(&new_combo()),
        Err(StoreError::Unavailable { .. })
    ));
    assert!(matches!(
        store.delete(CombinationId::new(1)),
        Err(StoreError::Unavailable { .. })
    ));
    drop(store);

    let conn = Connection::open(&path).unwrap();
    assert!(matches!(
        detect_shape(&conn).unwrap(),
        TableShape::Legacy { .. }
    ));
}

#[test]
fn contract_unrecognized_table_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SQLITE_FILE);
    write_sqlite(&path, "CREATE TABLE combinations (name TEXT, colour TEXT);");

    let store = SqliteCombinationStore::open(&path).unwrap();
    assert!(store.migration().is_failed());
    assert!(matches!(
        store.list_all(),
        Err(StoreError::Unavailable { .. })
    ));
}

#[test]
fn contract_legacy_json_document_loads_and_accepts_writes() {
    let dir = tempdir().unwrap();
    let store = JsonCombinationStore::in_dir(dir.path());
    std::fs::write(store.path(), LEGACY_JSON_DOCUMENT).unwrap();

    let list = store.list_all().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].racket, "VISCARIA");
    assert_eq!(list[0].id, CombinationId::new(2));

    let saved = store.save(&new_combo()).unwrap();
    assert_eq!(saved.id, CombinationId::new(3));
    assert_eq!(store.list_all().unwrap()[0], saved);
}

#[test]
fn contract_damaged_database_opens_as_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SQLITE_FILE);
    let garbage = "this was never a sqlite database\n".repeat(64);
    std::fs::write(&path, &garbage).unwrap();

    let store = SqliteCombinationStore::open(&path).unwrap();
    assert!(store.migration().is_failed());
    assert!(matches!(store.shape(), TableShape::Unreadable { .. }));

    assert!(matches!(
        store.list_all(),
        Err(StoreError::Unavailable { .. })
    ));
    assert!(matches!(
        store.save(&new_combo()),
        Err(StoreError::Unavailable { .. })
    ));
    assert!(matches!(
        store.duplicate(CombinationId::new(1)),
        Err(StoreError::Unavailable { .. })
    ));
    drop(store);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), garbage);
}
