//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CombinationService` - suggest, save, list, delete, duplicate and export

pub mod combinations;

pub use combinations::{CombinationService, Pick, ServiceError, Suggestion};
