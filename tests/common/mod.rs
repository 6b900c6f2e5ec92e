//! Common test utilities for racketbook integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated data, home and project directories plus CLI helpers
//! - Fixtures: legacy SQLite and JSON files as older versions wrote them

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
