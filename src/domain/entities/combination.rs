//! Combination entity
//!
//! One saved equipment record: a racket, two rubbers, and the playstyle it
//! was chosen for. Records are never edited after creation; they are only
//! created, duplicated (as a new record) or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CombinationId, Playstyle};

/// User input for a combination that has not been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationDraft {
    pub playstyle: String,
    pub racket: String,
    pub rubber_front: String,
    #[serde(default)]
    pub rubber_back: String,
    #[serde(default)]
    pub notes: String,
}

impl CombinationDraft {
    pub fn new(
        playstyle: impl Into<String>,
        racket: impl Into<String>,
        rubber_front: impl Into<String>,
    ) -> Self {
        Self {
            playstyle: playstyle.into(),
            racket: racket.into(),
            rubber_front: rubber_front.into(),
            rubber_back: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_rubber_back(mut self, rubber_back: impl Into<String>) -> Self {
        self.rubber_back = rubber_back.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// The playstyle text mapped onto the known set (`Other` if unrecognized).
    pub fn resolved_playstyle(&self) -> Playstyle {
        Playstyle::parse_lenient(&self.playstyle)
    }
}

/// A validated draft stamped with its creation time, ready for a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCombination {
    pub draft: CombinationDraft,
    pub saved_at: DateTime<Utc>,
}

impl NewCombination {
    pub fn new(draft: CombinationDraft, saved_at: DateTime<Utc>) -> Self {
        Self { draft, saved_at }
    }
}

/// A persisted combination.
///
/// The serialized field layout is also the export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub id: CombinationId,
    pub playstyle: String,
    pub racket: String,
    pub rubber_front: String,
    pub rubber_back: String,
    pub notes: String,
    pub saved_at: DateTime<Utc>,
}

impl Combination {
    pub fn from_new(id: CombinationId, new: &NewCombination) -> Self {
        let draft = &new.draft;
        Self {
            id,
            playstyle: draft.playstyle.clone(),
            racket: draft.racket.clone(),
            rubber_front: draft.rubber_front.clone(),
            rubber_back: draft.rubber_back.clone(),
            notes: draft.notes.clone(),
            saved_at: new.saved_at,
        }
    }

    /// The user-editable fields of this record.
    pub fn draft(&self) -> CombinationDraft {
        CombinationDraft {
            playstyle: self.playstyle.clone(),
            racket: self.racket.clone(),
            rubber_front: self.rubber_front.clone(),
            rubber_back: self.rubber_back.clone(),
            notes: self.notes.clone(),
        }
    }

    /// A copy of this record under a new id and timestamp.
    pub fn duplicate_as(&self, id: CombinationId, saved_at: DateTime<Utc>) -> Self {
        Self {
            id,
            saved_at,
            ..self.clone()
        }
    }

    /// One-line summary, e.g. `Attacker: VISCARIA + Tenergy 05/Tenergy 64`.
    pub fn summary(&self) -> String {
        if self.rubber_back.is_empty() {
            format!("{}: {} + {}", self.playstyle, self.racket, self.rubber_front)
        } else {
            format!(
                "{}: {} + {}/{}",
                self.playstyle, self.racket, self.rubber_front, self.rubber_back
            )
        }
    }
}

/// Sort newest first: `saved_at` descending, ties broken by id descending.
pub fn sort_newest_first(combinations: &mut [Combination]) {
    combinations.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then(b.id.cmp(&a.id)));
}
