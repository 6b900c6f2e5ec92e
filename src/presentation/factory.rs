//! Service Factory
//!
//! Creates the combination service with its store wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::CombinationService;
use crate::config::{Config, StorageBackend, StorageConfig};
use crate::domain::ports::CombinationStore;
use crate::error::RacketbookResult;
use crate::infrastructure::{JsonCombinationStore, SqliteCombinationStore};

use super::cli::Cli;

/// Apply the global CLI flags on top of loaded configuration.
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(backend) = cli.backend {
        config.storage.backend = backend.into();
    }
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    config
}

/// Open the configured store.
///
/// The JSON store touches nothing until first use. The SQLite store opens
/// (and if needed migrates) its database here, so a failure surfaces now.
pub fn open_store(storage: &StorageConfig) -> RacketbookResult<Arc<dyn CombinationStore>> {
    let path = storage.store_path();
    let store: Arc<dyn CombinationStore> = match storage.backend {
        StorageBackend::Json => Arc::new(JsonCombinationStore::new(path)),
        StorageBackend::Sqlite => Arc::new(SqliteCombinationStore::open(path)?),
    };
    tracing::debug!(
        backend = store.backend_name(),
        location = %store.location().display(),
        "opened combination store"
    );
    Ok(store)
}

/// Create the combination service for a resolved configuration.
pub fn create_combination_service(config: &Config) -> RacketbookResult<CombinationService> {
    let store = open_store(&config.storage)?;
    let catalog = Arc::new(config.catalog.build());
    Ok(CombinationService::new(store, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CombinationDraft;
    use clap::Parser;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path, backend: StorageBackend) -> Config {
        let mut config = Config::default();
        config.storage.backend = backend;
        config.storage.data_dir = Some(dir.to_path_buf());
        config
    }

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::try_parse_from([
            "racketbook",
            "--backend",
            "sqlite",
            "--data-dir",
            "/srv/rb",
            "list",
        ])
        .unwrap();

        let config = apply_cli_overrides(Config::default(), &cli);

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(
            config.storage.store_path(),
            std::path::PathBuf::from("/srv/rb/combinations.db")
        );
    }

    #[test]
    fn json_backend_writes_configured_file() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path(), StorageBackend::Json);
        config.storage.json_file = "mine.json".to_string();

        let service = create_combination_service(&config).unwrap();
        service
            .save(CombinationDraft::new("Attacker", "VISCARIA", "Tenergy 05"))
            .unwrap();

        assert_eq!(service.store().backend_name(), "json");
        assert!(dir.path().join("mine.json").is_file());
    }

    #[test]
    fn sqlite_backend_creates_database() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), StorageBackend::Sqlite);

        let service = create_combination_service(&config).unwrap();

        assert_eq!(service.store().backend_name(), "sqlite");
        assert!(dir.path().join("combinations.db").is_file());
    }
    #[test]
    fn damaged_sqlite_file_still_yields_a_service() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("combinations.db"), "not a database at all").unwrap();
        let config = config_in(dir.path(), StorageBackend::Sqlite);

        let service = create_combination_service(&config).unwrap();

        assert!(service.list_recent(5).is_empty());
        assert!(service
            .save(CombinationDraft::new("Attacker", "VISCARIA", "Tenergy 05"))
            .is_err());
    }
}
