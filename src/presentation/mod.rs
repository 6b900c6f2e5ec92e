//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the service with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates the service with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{BackendArg, Cli, ColorWhen, Commands};
pub use factory::{apply_cli_overrides, create_combination_service, open_store};
