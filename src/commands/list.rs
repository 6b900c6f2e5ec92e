//! List command handler

use anyhow::Result;
use serde_json::json;

use super::Session;
use crate::ui::json::emit;
use crate::ui::text::ColoredText;
use crate::ui::views::combinations::RecentListView;

pub fn cmd_list(session: &Session, limit: Option<usize>) -> Result<()> {
    let ui = session.ui;
    let service = session.service()?;
    let limit = limit.unwrap_or(session.config.display.recent_limit);

    let recent = service.list_recent(limit);
    let store = service.store();

    if ui.json {
        emit(json!({
            "command": "list",
            "backend": store.backend_name(),
            "location": store.location().display().to_string(),
            "combinations": recent,
        }))?;
        return Ok(());
    }

    if ui.verbose > 0 {
        println!(
            "{}",
            ColoredText::dim(format!("backend: {}", store.backend_name())).render(ui.color)
        );
    }
    print!(
        "{}",
        RecentListView::new(&recent, store.location()).render(ui.color, ui.unicode)
    );
    Ok(())
}
