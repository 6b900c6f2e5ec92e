//! Catalog command handler

use anyhow::Result;
use serde_json::json;

use racketbook::{EquipmentSet, Playstyle};

use super::Session;
use crate::ui::json::emit;
use crate::ui::views::catalog::render_catalog;

pub fn cmd_catalog(session: &Session, playstyle: Option<&str>) -> Result<()> {
    let ui = session.ui;
    let catalog = session.config.catalog.build();

    let groups: Vec<(Playstyle, &[EquipmentSet])> = match playstyle {
        Some(text) => vec![catalog.lookup(text)],
        None => catalog.iter().collect(),
    };

    if ui.json {
        let playstyles: Vec<_> = groups
            .iter()
            .map(|(style, sets)| {
                json!({
                    "playstyle": style.key(),
                    "name": style.display_name(),
                    "entries": sets,
                })
            })
            .collect();
        emit(json!({ "command": "catalog", "playstyles": playstyles }))?;
        return Ok(());
    }

    print!("{}", render_catalog(groups, ui.color, ui.unicode));
    Ok(())
}
