//! Combination Service
//!
//! Stateless between calls: every operation goes straight to the store.
//! A pending suggestion is the caller's to keep.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::domain::entities::{sort_newest_first, Combination, CombinationDraft, NewCombination};
use crate::domain::policies::{DraftPolicy, ValidationError};
use crate::domain::ports::{CombinationStore, StoreError};
use crate::domain::services::{classifier, EquipmentCatalog, EquipmentSet};
use crate::domain::value_objects::{timestamp, CombinationId, Playstyle};

/// How to choose among a playstyle's suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pick {
    #[default]
    Random,
    /// Zero-based position in the catalog list.
    Index(usize),
}

/// An unsaved suggestion ready to be shown or turned into a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Playstyle text as the user gave it.
    pub playstyle: String,
    /// Catalog bucket the text resolved to.
    pub resolved: Playstyle,
    pub index: usize,
    pub equipment: EquipmentSet,
    pub label: String,
}

impl Suggestion {
    pub fn to_draft(&self, notes: impl Into<String>) -> CombinationDraft {
        CombinationDraft::new(
            self.playstyle.clone(),
            self.equipment.racket.clone(),
            self.equipment.front.clone(),
        )
        .with_rubber_back(self.equipment.back.clone())
        .with_notes(notes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// `index` is zero-based; the message counts from one.
    #[error("suggestion {} does not exist ({available} available)", index + 1)]
    InvalidSelection { index: usize, available: usize },
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Store(StoreError::NotFound { .. }))
    }
}

pub struct CombinationService {
    store: Arc<dyn CombinationStore>,
    catalog: Arc<EquipmentCatalog>,
}

impl CombinationService {
    pub fn new(store: Arc<dyn CombinationStore>, catalog: Arc<EquipmentCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &dyn CombinationStore {
        self.store.as_ref()
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    /// Suggest equipment for `playstyle` using the thread-local RNG.
    pub fn suggest(&self, playstyle: &str, pick: Pick) -> Result<Suggestion, ServiceError> {
        self.suggest_with_rng(playstyle, pick, &mut rand::rng())
    }

    pub fn suggest_with_rng<R: Rng>(
        &self,
        playstyle: &str,
        pick: Pick,
        rng: &mut R,
    ) -> Result<Suggestion, ServiceError> {
        let (resolved, sets) = self.catalog.lookup(playstyle);
        let available = sets.len();

        let index = match pick {
            Pick::Random if available > 0 => rng.random_range(0..available),
            Pick::Random => 0,
            Pick::Index(index) => index,
        };
        let equipment = sets
            .get(index)
            .cloned()
            .ok_or(ServiceError::InvalidSelection { index, available })?;

        tracing::debug!(%resolved, index, racket = %equipment.racket, "suggested equipment");
        Ok(Suggestion {
            playstyle: playstyle.to_string(),
            resolved,
            index,
            label: classifier::classify(&equipment.racket, &equipment.front, &equipment.back),
            equipment,
        })
    }

    /// Validate, stamp and persist a draft.
    pub fn save(&self, draft: CombinationDraft) -> Result<Combination, ServiceError> {
        DraftPolicy::validate(&draft)?;
        let saved = self
            .store
            .save(&NewCombination::new(draft, timestamp::now()))?;
        Ok(saved)
    }

    /// The `limit` newest records. A storage failure yields an empty list.
    pub fn list_recent(&self, limit: usize) -> Vec<Combination> {
        match self.store.list_all() {
            Ok(mut combinations) => {
                sort_newest_first(&mut combinations);
                combinations.truncate(limit);
                combinations
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.store.backend_name(),
                    error = %e,
                    "cannot load saved combinations"
                );
                Vec::new()
            }
        }
    }

    /// Remove a record. Deleting an unknown id is not an error.
    pub fn delete(&self, id: CombinationId) -> Result<bool, ServiceError> {
        Ok(self.store.delete(id)?)
    }

    pub fn duplicate(&self, id: CombinationId) -> Result<Combination, ServiceError> {
        Ok(self.store.duplicate(id)?)
    }

    /// Export blob of every record, newest first.
    pub fn export(&self) -> Result<Vec<u8>, ServiceError> {
        Ok(self.store.export_snapshot()?)
    }

    pub fn classify(&self, racket: &str, front: &str, back: &str) -> String {
        classifier::classify(racket, front, back)
    }
}
