//! Domain Entities
//!
//! - `Combination` - A saved racket + rubbers record
//! - `CombinationDraft` - User input that has not been saved yet
//! - `NewCombination` - A validated, timestamped draft handed to a store

mod combination;

pub use combination::{sort_newest_first, Combination, CombinationDraft, NewCombination};
