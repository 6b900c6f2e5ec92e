//! Combinations Use Case
//!
//! Suggest equipment for a playstyle, save drafts, and manage the saved
//! history through whichever store is configured.
//!
//! This module handles:
//! - Picking a suggestion from the catalog (random or by index)
//! - Validating and timestamping drafts before they are stored
//! - Listing, deleting, duplicating and exporting saved records

mod use_case;

pub use use_case::{CombinationService, Pick, ServiceError, Suggestion};
