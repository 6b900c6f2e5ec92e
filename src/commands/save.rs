//! Save command handler

use anyhow::Result;
use serde_json::json;

use racketbook::CombinationDraft;

use super::Session;
use crate::ui::json::emit;
use crate::ui::views::combinations::render_written;

pub fn cmd_save(session: &Session, draft: CombinationDraft) -> Result<()> {
    let ui = session.ui;
    let service = session.service()?;

    let saved = service.save(draft)?;
    let label = service.classify(&saved.racket, &saved.rubber_front, &saved.rubber_back);

    if ui.json {
        emit(json!({
            "command": "save",
            "combination": saved,
            "label": label,
        }))?;
        return Ok(());
    }

    print!("{}", render_written("Saved", &saved, ui.color, ui.unicode));
    println!("  {}", label);
    Ok(())
}
