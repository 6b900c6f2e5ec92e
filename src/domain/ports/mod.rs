//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod combination_store;

pub use combination_store::{decode_snapshot, encode_snapshot, CombinationStore, StoreError};
