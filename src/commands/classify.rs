//! Classify command handler

use anyhow::Result;
use serde_json::json;

use racketbook::domain::services::score;

use super::Session;
use crate::ui::json::emit;
use crate::ui::views::combinations::render_classification;

pub fn cmd_classify(session: &Session, racket: &str, front: &str, back: &str) -> Result<()> {
    let ui = session.ui;
    let score = score(racket, front, back);
    let label = score.label();

    if ui.json {
        emit(json!({
            "command": "classify",
            "racket": racket,
            "front": front,
            "back": back,
            "score": score,
            "label": label,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_classification(racket, front, back, &label, ui.color)
    );
    Ok(())
}
