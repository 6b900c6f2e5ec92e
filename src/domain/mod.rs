//! Domain Layer
//!
//! The core of racketbook - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Combination, CombinationDraft)
//! - `value_objects/` - Immutable value types (Playstyle, CombinationId, timestamps)
//! - `services/` - Domain services (classifier, EquipmentCatalog)
//! - `policies/` - Business rules (DraftPolicy)
//! - `ports/` - Interface definitions for infrastructure (CombinationStore)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or database directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
