//! Interactive form
//!
//! Runs when `racketbook` is started without a subcommand on a terminal.

mod menu;
mod state;

use anyhow::Result;
use dialoguer::Select;

use state::{FormState, MenuAction};

use super::Session;

pub fn run(session: &Session) -> Result<()> {
    let ui = session.ui;
    let service = session.service()?;
    let limit = session.config.display.recent_limit;
    let mut state = FormState::default();

    println!(
        "racketbook {} ({} at {})\n",
        env!("CARGO_PKG_VERSION"),
        service.store().backend_name(),
        service.store().location().display()
    );

    loop {
        let has_saved = !service.list_recent(1).is_empty();
        let actions = MenuAction::available(has_saved);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match actions[selection] {
            MenuAction::Suggest => menu::suggest(&service, &mut state, &ui),
            MenuAction::Enter => menu::enter(&service, &ui),
            MenuAction::ShowRecent => {
                menu::show_recent(&service, limit, &ui);
                Ok(())
            }
            MenuAction::Delete => menu::delete(&service, limit, &ui),
            MenuAction::Duplicate => menu::duplicate(&service, limit, &ui),
            MenuAction::Quit => return Ok(()),
        };

        // A failed action is reported and the menu comes back.
        if let Err(e) = outcome {
            if e.downcast_ref::<dialoguer::Error>().is_some() {
                return Err(e);
            }
            eprint!(
                "{}",
                crate::ui::views::messages::render_error(&e.to_string(), ui.color, ui.unicode)
            );
        }
        println!();
    }
}
