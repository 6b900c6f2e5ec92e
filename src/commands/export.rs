//! Export command handler
//!
//! The export blob is already JSON, so without `--output` it is written to
//! stdout as-is in both modes.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use racketbook::domain::ports::decode_snapshot;
use racketbook::infrastructure::fs::atomic_write;

use super::Session;
use crate::ui::json::emit;

pub fn cmd_export(session: &Session, output: Option<&Path>) -> Result<()> {
    let ui = session.ui;
    let blob = session.service()?.export()?;

    let Some(path) = output else {
        let mut out = std::io::stdout().lock();
        out.write_all(&blob)?;
        out.flush()?;
        return Ok(());
    };

    atomic_write(path, &blob).with_context(|| format!("cannot write {}", path.display()))?;
    let count = decode_snapshot(&blob)?.len();

    if ui.json {
        emit(json!({
            "command": "export",
            "path": path.display().to_string(),
            "count": count,
        }))?;
    } else {
        println!("Exported {} combination(s) to {}", count, path.display());
    }
    Ok(())
}
