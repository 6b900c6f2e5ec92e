//! Domain Policies
//!
//! Business rules that govern what may be persisted.
//! These are pure functions that operate on domain entities.

mod draft_policy;

pub use draft_policy::{DraftPolicy, ValidationError};
