//! Command handlers
//!
//! Each handler takes the shared [`Session`] and prints either text or a
//! single JSON document.

pub mod catalog;
pub mod classify;
pub mod export;
pub mod interactive;
pub mod list;
pub mod manage;
pub mod save;
pub mod suggest;

use anyhow::Result;

use racketbook::config::{self, Config};
use racketbook::presentation::{apply_cli_overrides, create_combination_service, Cli};
use racketbook::CombinationService;

use crate::ui::context::UiContext;
use crate::ui::views::messages::render_config_warning;

/// Resolved configuration and output settings for one invocation.
pub struct Session {
    pub ui: UiContext,
    pub config: Config,
}

impl Session {
    pub fn load(cli: &Cli, ui: UiContext) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = config::discover(cli.config.as_deref(), &cwd)?;
        for warning in &loaded.warnings {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
        if let Some(source) = &loaded.source {
            tracing::info!(path = %source.display(), "using configuration file");
        }

        Ok(Self {
            ui,
            config: apply_cli_overrides(loaded.config, cli),
        })
    }

    /// Open the configured store. Commands that never touch saved data skip this.
    pub fn service(&self) -> Result<CombinationService> {
        Ok(create_combination_service(&self.config)?)
    }
}
