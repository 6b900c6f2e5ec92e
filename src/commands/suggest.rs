//! Suggest command handler

use anyhow::Result;
use serde_json::json;

use racketbook::Pick;

use super::Session;
use crate::ui::json::emit;
use crate::ui::views::combinations::{render_suggestion, render_written};

/// `pick` is 1-based as typed on the command line.
pub fn cmd_suggest(
    session: &Session,
    playstyle: &str,
    pick: Option<u32>,
    save: bool,
    notes: Option<String>,
) -> Result<()> {
    let ui = session.ui;
    let service = session.service()?;

    let pick = match pick {
        Some(n) => Pick::Index(n.saturating_sub(1) as usize),
        None => Pick::Random,
    };
    let suggestion = service.suggest(playstyle, pick)?;

    let saved = if save {
        Some(service.save(suggestion.to_draft(notes.unwrap_or_default()))?)
    } else {
        None
    };

    if ui.json {
        emit(json!({
            "command": "suggest",
            "suggestion": suggestion,
            "saved": saved,
        }))?;
        return Ok(());
    }

    print!("{}", render_suggestion(&suggestion, ui.color, ui.unicode));
    if let Some(saved) = &saved {
        print!("{}", render_written("Saved", saved, ui.color, ui.unicode));
    }
    Ok(())
}
