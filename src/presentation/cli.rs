//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --backend, --data-dir)
//!   are inherited by all subcommands
//! - Without a subcommand the interactive form runs when stdin is a terminal

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::StorageBackend;
use crate::domain::value_objects::CombinationId;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    Json,
    Sqlite,
}

impl From<BackendArg> for StorageBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Json => StorageBackend::Json,
            BackendArg::Sqlite => StorageBackend::Sqlite,
        }
    }
}

/// racketbook - table-tennis equipment notebook
#[derive(Parser, Debug)]
#[command(name = "racketbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'racketbook' without arguments for the interactive form.")]
pub struct Cli {
    /// Print one JSON document instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (skips project/user config discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage backend override
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Data directory override
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a racket and rubbers for a playstyle
    Suggest {
        /// Playstyle (attacker, defender, all-round, counter, two-winged, other)
        playstyle: String,

        /// Pick the N-th catalog entry (1-based) instead of a random one
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        pick: Option<u32>,

        /// Save the suggestion right away
        #[arg(long)]
        save: bool,

        /// Notes to store with a saved suggestion
        #[arg(long, requires = "save")]
        notes: Option<String>,
    },

    /// Save a combination
    Save {
        #[arg(long)]
        playstyle: String,

        #[arg(long)]
        racket: String,

        /// Forehand (front) rubber
        #[arg(long)]
        front: String,

        /// Backhand (back) rubber
        #[arg(long, default_value = "")]
        back: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Show the most recently saved combinations
    List {
        /// How many to show (defaults to display.recent_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a saved combination
    Delete {
        id: CombinationId,
    },

    /// Save a copy of an existing combination
    Duplicate {
        id: CombinationId,
    },

    /// Export every saved combination as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Label a racket and rubbers by speed, spin and control
    Classify {
        #[arg(long)]
        racket: String,

        #[arg(long)]
        front: String,

        #[arg(long, default_value = "")]
        back: String,
    },

    /// Show catalog suggestions
    Catalog {
        /// Only this playstyle
        playstyle: Option<String>,
    },
}
