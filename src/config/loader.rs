//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{RacketbookError, RacketbookResult};
use crate::infrastructure::fs::DATA_DIR_VAR;

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, StorageBackend};

/// Project config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "racketbook.toml";

pub const BACKEND_VAR: &str = "RACKETBOOK_BACKEND";
pub const RECENT_LIMIT_VAR: &str = "RACKETBOOK_RECENT_LIMIT";

/// Configuration plus where it came from and what looked wrong in it.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the configuration was read from; `None` means defaults.
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RacketbookResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RacketbookError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for reporting.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> RacketbookResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RacketbookError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a run.
///
/// An explicit file must load. Otherwise the project file, then the user
/// file, is used; the first one that parses wins and a broken one is skipped
/// with a warning. Environment overrides are applied last.
pub fn discover(explicit: Option<&Path>, project_dir: &Path) -> RacketbookResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            warnings,
            source: Some(path.to_path_buf()),
        });
    }

    let candidates = [
        Some(project_dir.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                return Ok(LoadedConfig {
                    config: with_env_overrides(config),
                    warnings,
                    source: Some(path),
                });
            }
            Err(e) => tracing::warn!(error = %e, "skipping configuration file"),
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..LoadedConfig::default()
    })
}

/// `$XDG_CONFIG_HOME/racketbook/config.toml`, falling back to `~/.config`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("racketbook").join("config.toml"))
}

/// Apply environment variable overrides (RACKETBOOK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = var(BACKEND_VAR) {
        let validator = EnvVarValidator::new(BACKEND_VAR, &StorageBackend::NAMES);
        if let Some(backend) = validator.parse(&value, |s| s.parse::<StorageBackend>().ok()) {
            config.storage.backend = backend;
        }
    }

    if let Some(dir) = var(DATA_DIR_VAR).filter(|v| !v.is_empty()) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(value) = var(RECENT_LIMIT_VAR) {
        let validator = EnvVarValidator::new(RECENT_LIMIT_VAR, &[]);
        if let Some(limit) = validator.parse(&value, |s| s.parse::<usize>().ok()) {
            config.display.recent_limit = limit;
        }
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "backend",
        "data_dir",
        "json_file",
        "sqlite_file",
        "display",
        "recent_limit",
        "catalog",
        "entries",
        "playstyle",
        "racket",
        "front",
        "back",
    ];

    closest(unknown, CANDIDATES).map(|(candidate, _)| candidate.to_string())
}
