//! racketbook - table-tennis equipment notebook
//!
//! Usage: racketbook [OPTIONS] [COMMAND]
//!
//! Commands:
//!   suggest    Suggest a racket and rubbers for a playstyle
//!   save       Save a combination
//!   list       Show the most recently saved combinations
//!   delete     Delete a saved combination
//!   duplicate  Save a copy of an existing combination
//!   export     Export every saved combination as JSON
//!   classify   Label a racket and rubbers
//!   catalog    Show catalog suggestions

mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use racketbook::presentation::{Cli, Commands};
use racketbook::{CombinationDraft, RacketbookError, ServiceError, StoreError};

use commands::Session;
use ui::context::UiContext;
use ui::views::messages::render_error;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    logging::init_cli_logger(cli.verbose, ui.color);

    if let Err(err) = run(cli, ui) {
        eprint!("{}", render_error(&format!("{:#}", err), ui.color, ui.unicode));
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli, ui: UiContext) -> Result<()> {
    let session = Session::load(&cli, ui)?;

    let Some(command) = cli.command else {
        if ui.interactive {
            return commands::interactive::run(&session);
        }
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Suggest {
            playstyle,
            pick,
            save,
            notes,
        } => commands::suggest::cmd_suggest(&session, &playstyle, pick, save, notes),
        Commands::Save {
            playstyle,
            racket,
            front,
            back,
            notes,
        } => {
            let draft = CombinationDraft::new(playstyle, racket, front)
                .with_rubber_back(back)
                .with_notes(notes);
            commands::save::cmd_save(&session, draft)
        }
        Commands::List { limit } => commands::list::cmd_list(&session, limit),
        Commands::Delete { id } => commands::manage::cmd_delete(&session, id),
        Commands::Duplicate { id } => commands::manage::cmd_duplicate(&session, id),
        Commands::Export { output } => commands::export::cmd_export(&session, output.as_deref()),
        Commands::Classify {
            racket,
            front,
            back,
        } => commands::classify::cmd_classify(&session, &racket, &front, &back),
        Commands::Catalog { playstyle } => {
            commands::catalog::cmd_catalog(&session, playstyle.as_deref())
        }
    }
}

/// 2 for invalid input, 3 for a missing record, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<RacketbookError>() {
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<ServiceError>() {
        return RacketbookError::Service(e.clone()).exit_code();
    }
    if let Some(e) = err.downcast_ref::<StoreError>() {
        return RacketbookError::Store(e.clone()).exit_code();
    }
    1
}
