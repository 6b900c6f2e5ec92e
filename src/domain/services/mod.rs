//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod catalog;
pub mod classifier;

pub use catalog::{EquipmentCatalog, EquipmentSet};
pub use classifier::{classify, score, PlayScore};
