//! Property tests for catalog suggestions.

use std::sync::Arc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use racketbook::infrastructure::JsonCombinationStore;
use racketbook::{CombinationService, EquipmentCatalog, Pick, ServiceError};

fn playstyle_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("attacker".to_string()),
        Just("Defender".to_string()),
        Just("ALL_ROUND".to_string()),
        Just("two winged".to_string()),
        "\\PC{0,16}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any playstyle text yields a suggestion from its catalog list.
    #[test]
    fn property_random_suggestion_is_in_catalog(text in playstyle_text(), seed in any::<u64>()) {
        let dir = tempdir().unwrap();
        let catalog = Arc::new(EquipmentCatalog::builtin());
        let service = CombinationService::new(
            Arc::new(JsonCombinationStore::in_dir(dir.path())),
            Arc::clone(&catalog),
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let suggestion = service.suggest_with_rng(&text, Pick::Random, &mut rng).unwrap();
        let (_, sets) = catalog.lookup(&text);

        prop_assert!(suggestion.index < sets.len());
        prop_assert_eq!(&sets[suggestion.index], &suggestion.equipment);
    }

    /// PROPERTY: an explicit pick succeeds exactly when it is in range.
    #[test]
    fn property_pick_in_range_or_invalid(text in playstyle_text(), index in 0usize..8) {
        let dir = tempdir().unwrap();
        let catalog = Arc::new(EquipmentCatalog::builtin());
        let service = CombinationService::new(
            Arc::new(JsonCombinationStore::in_dir(dir.path())),
            Arc::clone(&catalog),
        );
        let available = catalog.lookup(&text).1.len();

        match service.suggest(&text, Pick::Index(index)) {
            Ok(suggestion) => prop_assert!(index < available && suggestion.index == index),
            Err(ServiceError::InvalidSelection { index: i, available: a }) => {
                prop_assert!(index >= available);
                prop_assert_eq!((i, a), (index, available));
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}
