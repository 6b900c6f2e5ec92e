//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::services::{EquipmentCatalog, EquipmentSet};
use crate::domain::value_objects::{ConfigWarning, Playstyle};
use crate::error::RacketbookResult;
use crate::infrastructure::fs::default_data_dir;
use crate::infrastructure::{DEFAULT_JSON_FILE, DEFAULT_SQLITE_FILE};

use super::loader;

/// Which store keeps saved combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
}

impl StorageBackend {
    pub const NAMES: [&'static str; 2] = ["json", "sqlite"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Json => "json",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StorageBackend::Json),
            "sqlite" | "sqlite3" | "db" => Ok(StorageBackend::Sqlite),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding the data files; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_json_file")]
    pub json_file: String,

    #[serde(default = "default_sqlite_file")]
    pub sqlite_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            json_file: default_json_file(),
            sqlite_file: default_sqlite_file(),
        }
    }
}

fn default_json_file() -> String {
    DEFAULT_JSON_FILE.to_string()
}

fn default_sqlite_file() -> String {
    DEFAULT_SQLITE_FILE.to_string()
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Full path of the file the selected backend uses.
    pub fn store_path(&self) -> PathBuf {
        let file = match self.backend {
            StorageBackend::Json => &self.json_file,
            StorageBackend::Sqlite => &self.sqlite_file,
        };
        self.resolved_data_dir().join(file)
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many saved combinations `list` shows by default
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    5
}

/// One catalog entry in `[[catalog.entries]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryConfig {
    pub playstyle: String,
    pub racket: String,
    pub front: String,
    #[serde(default)]
    pub back: String,
}

/// Catalog overrides
///
/// Every playstyle that appears here has its built-in entries replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub entries: Vec<CatalogEntryConfig>,
}

impl CatalogConfig {
    /// The built-in catalog with these overrides applied.
    ///
    /// Entries with an unknown playstyle or a blank racket/front rubber are
    /// skipped with a warning.
    pub fn build(&self) -> EquipmentCatalog {
        let overrides = self.entries.iter().filter_map(|entry| {
            let style = match entry.playstyle.parse::<Playstyle>() {
                Ok(style) => style,
                Err(e) => {
                    tracing::warn!(error = %e, racket = %entry.racket, "skipping catalog entry");
                    return None;
                }
            };
            if entry.racket.trim().is_empty() || entry.front.trim().is_empty() {
                tracing::warn!(%style, "skipping catalog entry without racket or front rubber");
                return None;
            }
            Some((
                style,
                EquipmentSet::new(&entry.racket, &entry.front, &entry.back),
            ))
        });
        EquipmentCatalog::builtin().with_overrides(overrides)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RacketbookResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RacketbookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (RACKETBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
