//! Configuration module for racketbook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RACKETBOOK_*)
//! 3. Project config (./racketbook.toml)
//! 4. User config (~/.config/racketbook/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::EnvVarValidator;
pub use loader::{
    discover, parse_with_warnings, user_config_path, LoadedConfig, BACKEND_VAR,
    PROJECT_CONFIG_FILE, RECENT_LIMIT_VAR,
};
pub use types::{
    CatalogConfig, CatalogEntryConfig, Config, DisplayConfig, StorageBackend, StorageConfig,
};
