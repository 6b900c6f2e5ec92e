//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod combination_id;
mod config_warning;
mod playstyle;
pub mod timestamp;

pub use combination_id::CombinationId;
pub use config_warning::ConfigWarning;
pub use playstyle::{Playstyle, UnknownPlaystyle};
