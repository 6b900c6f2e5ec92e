//! Equipment Catalog
//!
//! Immutable mapping from playstyle to suggested equipment. Built once at
//! startup; every playstyle resolves to a non-empty list, with `Other` as
//! the fallback for anything that has no entries of its own.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::Playstyle;

/// A suggested racket with front and back rubbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentSet {
    pub racket: String,
    pub front: String,
    pub back: String,
}

impl EquipmentSet {
    pub fn new(racket: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            racket: racket.into(),
            front: front.into(),
            back: back.into(),
        }
    }
}

const BUILTIN: &[(Playstyle, &str, &str, &str)] = &[
    (Playstyle::Attacker, "VISCARIA", "DHS Hurricane 3 Neo", "Tenergy 05"),
    (Playstyle::Attacker, "ALC", "Tenergy 05", "Tenergy 64"),
    (Playstyle::Defender, "Defensive Blade", "XIOM Vega Europe", "Palio CJ8000"),
    (Playstyle::AllRound, "Allround Classic", "Tenergy 64", "Donic Bluefire M2"),
    (Playstyle::Counter, "Allround Classic", "Mark V", "Sriver"),
    (Playstyle::TwoWinged, "Carbon Speed", "Dignics 05", "Rasanter R47"),
    (Playstyle::Other, "Custom", "Custom Rubber", "Custom Rubber"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentCatalog {
    entries: BTreeMap<Playstyle, Vec<EquipmentSet>>,
}

impl EquipmentCatalog {
    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        let mut entries: BTreeMap<Playstyle, Vec<EquipmentSet>> = BTreeMap::new();
        for (style, racket, front, back) in BUILTIN {
            entries
                .entry(*style)
                .or_default()
                .push(EquipmentSet::new(*racket, *front, *back));
        }
        Self { entries }
    }

    /// Replace the entries of every playstyle that appears in `overrides`.
    ///
    /// Playstyles absent from `overrides` keep their current entries.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (Playstyle, EquipmentSet)>,
    {
        let mut grouped: BTreeMap<Playstyle, Vec<EquipmentSet>> = BTreeMap::new();
        for (style, set) in overrides {
            grouped.entry(style).or_default().push(set);
        }
        for (style, sets) in grouped {
            self.entries.insert(style, sets);
        }
        self
    }

    /// Suggestions for a playstyle, using the `Other` bucket when it has none.
    pub fn suggestions_for(&self, playstyle: Playstyle) -> &[EquipmentSet] {
        match self.entries.get(&playstyle) {
            Some(sets) if !sets.is_empty() => sets,
            _ => self.fallback(),
        }
    }

    /// Resolve free text to a playstyle and its suggestions.
    pub fn lookup(&self, playstyle: &str) -> (Playstyle, &[EquipmentSet]) {
        let style = Playstyle::parse_lenient(playstyle);
        (style, self.suggestions_for(style))
    }

    /// Every playstyle with its resolved suggestions, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Playstyle, &[EquipmentSet])> {
        Playstyle::ALL
            .into_iter()
            .map(move |style| (style, self.suggestions_for(style)))
    }

    fn fallback(&self) -> &[EquipmentSet] {
        self.entries
            .get(&Playstyle::Other)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for EquipmentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_playstyle() {
        let catalog = EquipmentCatalog::builtin();
        for (style, sets) in catalog.iter() {
            assert!(!sets.is_empty(), "{} has no suggestions", style);
        }
    }

    #[test]
    fn attacker_has_two_options() {
        let catalog = EquipmentCatalog::builtin();
        let sets = catalog.suggestions_for(Playstyle::Attacker);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].racket, "VISCARIA");
        assert_eq!(sets[1], EquipmentSet::new("ALC", "Tenergy 05", "Tenergy 64"));
    }

    #[test]
    fn unknown_text_falls_back_to_other() {
        let catalog = EquipmentCatalog::builtin();
        let (style, sets) = catalog.lookup("shakehand looper");
        assert_eq!(style, Playstyle::Other);
        assert_eq!(sets[0].racket, "Custom");
    }

    #[test]
    fn overrides_replace_only_named_playstyles() {
        let catalog = EquipmentCatalog::builtin().with_overrides([(
            Playstyle::Defender,
            EquipmentSet::new("Defensive Wood", "Sriver", "Long Pips"),
        )]);

        let defender = catalog.suggestions_for(Playstyle::Defender);
        assert_eq!(defender.len(), 1);
        assert_eq!(defender[0].racket, "Defensive Wood");
        assert_eq!(catalog.suggestions_for(Playstyle::Attacker).len(), 2);
    }

    #[test]
    fn empty_playstyle_entry_uses_fallback() {
        let mut catalog = EquipmentCatalog::builtin();
        catalog.entries.insert(Playstyle::Counter, Vec::new());
        assert_eq!(catalog.suggestions_for(Playstyle::Counter)[0].racket, "Custom");
    }
}
