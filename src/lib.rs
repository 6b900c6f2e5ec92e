//! racketbook - table-tennis equipment notebook
//!
//! Suggests racket and rubber combinations for a playstyle, labels any
//! combination by speed, spin and control, and keeps a history of saved
//! combinations in a JSON document or a SQLite database.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CombinationService, Pick, ServiceError, Suggestion};
pub use config::{Config, StorageBackend};
pub use domain::entities::{Combination, CombinationDraft};
pub use domain::ports::{CombinationStore, StoreError};
pub use domain::services::{classify, EquipmentCatalog, EquipmentSet};
pub use domain::value_objects::{CombinationId, Playstyle};
pub use error::{RacketbookError, RacketbookResult};
