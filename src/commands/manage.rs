//! Delete and duplicate command handlers

use anyhow::Result;
use serde_json::json;

use racketbook::CombinationId;

use super::Session;
use crate::ui::json::emit;
use crate::ui::views::combinations::render_written;
use crate::ui::views::messages::render_notice;

/// Deleting an id that does not exist succeeds and says so.
pub fn cmd_delete(session: &Session, id: CombinationId) -> Result<()> {
    let ui = session.ui;
    let deleted = session.service()?.delete(id)?;

    if ui.json {
        emit(json!({ "command": "delete", "id": id, "deleted": deleted }))?;
    } else if deleted {
        println!("Deleted #{}", id);
    } else {
        print!(
            "{}",
            render_notice(&format!("No combination #{}; nothing deleted.", id), ui.color)
        );
    }
    Ok(())
}

pub fn cmd_duplicate(session: &Session, id: CombinationId) -> Result<()> {
    let ui = session.ui;
    let copy = session.service()?.duplicate(id)?;

    if ui.json {
        emit(json!({ "command": "duplicate", "from": id, "combination": copy }))?;
    } else {
        print!("{}", render_written("Duplicated as", &copy, ui.color, ui.unicode));
    }
    Ok(())
}
