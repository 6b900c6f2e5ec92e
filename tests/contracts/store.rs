//! CombinationStore contract, run against both backends.

use std::path::Path;

use tempfile::tempdir;

use racketbook::domain::entities::NewCombination;
use racketbook::domain::ports::decode_snapshot;
use racketbook::domain::value_objects::timestamp;
use racketbook::infrastructure::{JsonCombinationStore, SqliteCombinationStore};
use racketbook::{CombinationDraft, CombinationId, CombinationStore, StoreError};

type Opener = fn(&Path) -> Box<dyn CombinationStore>;

fn open_json(dir: &Path) -> Box<dyn CombinationStore> {
    Box::new(JsonCombinationStore::in_dir(dir))
}

fn open_sqlite(dir: &Path) -> Box<dyn CombinationStore> {
    Box::new(SqliteCombinationStore::in_dir(dir).expect("open sqlite store"))
}

const BACKENDS: [(&str, Opener); 2] = [("json", open_json), ("sqlite", open_sqlite)];

/// Run `check` once per backend, each in its own directory.
fn for_each_backend(check: impl Fn(&str, &Path, Opener)) {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        check(name, dir.path(), open);
    }
}

fn new_combo(racket: &str) -> NewCombination {
    NewCombination::new(
        CombinationDraft::new("Attacker", racket, "Tenergy 05")
            .with_rubber_back("Tenergy 64")
            .with_notes("league night"),
        timestamp::now(),
    )
}

#[test]
fn contract_new_store_is_empty() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        assert!(store.list_all().unwrap().is_empty(), "{name}");
        assert_eq!(store.backend_name(), name);

        let blob = store.export_snapshot().unwrap();
        assert!(decode_snapshot(&blob).unwrap().is_empty(), "{name}");
    });
}

#[test]
fn contract_ids_increase_and_list_is_newest_first() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        let a = store.save(&new_combo("VISCARIA")).unwrap();
        let b = store.save(&new_combo("ALC")).unwrap();
        let c = store.save(&new_combo("ZLC")).unwrap();
        assert!(a.id < b.id && b.id < c.id, "{name}");

        let rackets: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|combo| combo.racket)
            .collect();
        assert_eq!(rackets, ["ZLC", "ALC", "VISCARIA"], "{name}");
    });
}

#[test]
fn contract_saved_fields_round_trip() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        let draft = CombinationDraft::new("攻撃型", "張継科 ALC", "キョウヒョウ")
            .with_rubber_back("")
            .with_notes("裏ソフト");
        let saved = store
            .save(&NewCombination::new(draft.clone(), timestamp::now()))
            .unwrap();

        let listed = store.list_all().unwrap();
        assert_eq!(listed, vec![saved.clone()], "{name}");
        assert_eq!(listed[0].playstyle, draft.playstyle);
        assert_eq!(listed[0].rubber_back, "");
        assert_eq!(listed[0].notes, "裏ソフト");
    });
}

#[test]
fn contract_records_survive_reopen() {
    for_each_backend(|name, dir, open| {
        let saved = open(dir).save(&new_combo("VISCARIA")).unwrap();
        let reopened = open(dir);
        assert_eq!(reopened.list_all().unwrap(), vec![saved], "{name}");
    });
}

#[test]
fn contract_delete_reports_presence() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        let keep = store.save(&new_combo("VISCARIA")).unwrap();
        let gone = store.save(&new_combo("ALC")).unwrap();

        assert!(store.delete(gone.id).unwrap(), "{name}");
        assert!(!store.delete(gone.id).unwrap(), "{name}");
        assert!(!store.delete(CombinationId::new(999)).unwrap(), "{name}");
        assert_eq!(store.list_all().unwrap(), vec![keep], "{name}");
    });
}

#[test]
fn contract_ids_stay_unique_after_delete() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        let first = store.save(&new_combo("VISCARIA")).unwrap();
        let middle = store.save(&new_combo("ALC")).unwrap();
        let last = store.save(&new_combo("ZLC")).unwrap();
        store.delete(middle.id).unwrap();

        let next = store.save(&new_combo("Carbon Speed")).unwrap();
        assert!(next.id > last.id, "{name}");
        assert_ne!(next.id, first.id);

        let mut ids: Vec<CombinationId> = store.list_all().unwrap().iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3, "{name}");
    });
}

#[test]
fn contract_newest_id_is_not_reused_after_delete() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        store.save(&new_combo("VISCARIA")).unwrap();
        let newest = store.save(&new_combo("ALC")).unwrap();
        assert!(store.delete(newest.id).unwrap(), "{name}");

        let next = store.save(&new_combo("Carbon Speed")).unwrap();
        assert!(next.id > newest.id, "{name}: {} reused", next.id);

        drop(store);
        let reopened = open(dir);
        let after = reopened.save(&new_combo("ZLC")).unwrap();
        assert!(after.id > next.id, "{name}");
    });
}

#[test]
fn contract_duplicate_is_a_later_copy() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        let original = store.save(&new_combo("VISCARIA")).unwrap();
        let copy = store.duplicate(original.id).unwrap();

        assert!(copy.id > original.id, "{name}");
        assert!(copy.saved_at > original.saved_at, "{name}");
        assert_eq!(copy.racket, original.racket);
        assert_eq!(copy.rubber_front, original.rubber_front);
        assert_eq!(copy.rubber_back, original.rubber_back);
        assert_eq!(copy.notes, original.notes);

        let listed = store.list_all().unwrap();
        assert_eq!(listed, vec![copy, original], "{name}");
    });
}

#[test]
fn contract_duplicate_of_missing_id_is_not_found() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        let id = CombinationId::new(42);
        assert_eq!(
            store.duplicate(id),
            Err(StoreError::NotFound { id }),
            "{name}"
        );
        assert!(store.list_all().unwrap().is_empty(), "{name}");
    });
}

#[test]
fn contract_export_matches_listing() {
    for_each_backend(|name, dir, open| {
        let store = open(dir);
        store.save(&new_combo("VISCARIA")).unwrap();
        store.save(&new_combo("ALC")).unwrap();

        let blob = store.export_snapshot().unwrap();
        assert!(std::str::from_utf8(&blob).unwrap().contains("\n  "), "{name}: not pretty");
        assert_eq!(decode_snapshot(&blob).unwrap(), store.list_all().unwrap(), "{name}");
    });
}
