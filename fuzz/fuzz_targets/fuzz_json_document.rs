#![no_main]

use libfuzzer_sys::fuzz_target;
use racketbook::domain::entities::NewCombination;
use racketbook::domain::value_objects::timestamp;
use racketbook::infrastructure::JsonCombinationStore;
use racketbook::{CombinationDraft, CombinationStore};

fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let store = JsonCombinationStore::in_dir(dir.path());
    if std::fs::write(store.path(), data).is_err() {
        return;
    }

    // Any document either loads or reads as empty; ids come back unique
    let before = store.list_all().unwrap_or_default();
    let mut ids: Vec<_> = before.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before.len());
    let _ = store.export_snapshot();

    // A write either fails cleanly or adds a record with a fresh id
    let draft = CombinationDraft::new("Attacker", "ALC", "Tenergy 05");
    if let Ok(saved) = store.save(&NewCombination::new(draft, timestamp::now())) {
        assert!(before.iter().all(|c| c.id != saved.id));
        let after = store.list_all().unwrap_or_default();
        assert_eq!(after.iter().filter(|c| c.id == saved.id).count(), 1);
    }
});
