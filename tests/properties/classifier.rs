//! Property tests for the playstyle classifier.

use proptest::prelude::*;

use racketbook::classify;
use racketbook::domain::services::classifier::{
    CONTROL_TIERS, LABEL_SEPARATOR, SPEED_TIERS, SPIN_TIERS,
};

/// Names built from known tokens mixed with arbitrary text.
fn equipment_name() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("Tenergy 05".to_string()),
        Just("Tenergy 64".to_string()),
        Just("Dignics 09C".to_string()),
        Just("DHS Hurricane 3 Neo".to_string()),
        Just("Palio CJ8000".to_string()),
        Just("Long Pips".to_string()),
        Just("Anti".to_string()),
        Just("VISCARIA".to_string()),
        Just("Defensive Blade".to_string()),
        "[ -~]{0,12}",
        "\\PC{0,8}",
    ];
    proptest::collection::vec(token, 0..3).prop_map(|parts| parts.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every label is three known phrases joined by the separator.
    #[test]
    fn property_label_is_three_known_phrases(
        racket in equipment_name(),
        front in equipment_name(),
        back in equipment_name(),
    ) {
        let label = classify(&racket, &front, &back);
        let parts: Vec<&str> = label.split(LABEL_SEPARATOR).collect();

        prop_assert_eq!(parts.len(), 3, "label was {:?}", label);
        prop_assert!(SPEED_TIERS.contains(&parts[0]));
        prop_assert!(SPIN_TIERS.contains(&parts[1]));
        prop_assert!(CONTROL_TIERS.contains(&parts[2]));
    }

    /// PROPERTY: swapping front and back rubbers never changes the label.
    #[test]
    fn property_rubber_order_does_not_matter(
        racket in equipment_name(),
        front in equipment_name(),
        back in equipment_name(),
    ) {
        prop_assert_eq!(
            classify(&racket, &front, &back),
            classify(&racket, &back, &front)
        );
    }

    /// PROPERTY: matching ignores letter case.
    #[test]
    fn property_case_insensitive(
        racket in equipment_name(),
        front in equipment_name(),
    ) {
        prop_assume!(racket.is_ascii() && front.is_ascii());
        prop_assert_eq!(
            classify(&racket, &front, ""),
            classify(&racket.to_uppercase(), &front.to_lowercase(), "")
        );
    }
}
