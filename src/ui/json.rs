//! JSON output for `--json`.
//!
//! Every command prints exactly one JSON document on stdout.

use std::io::{self, Write};

/// Write one JSON document followed by a newline.
pub fn write_document(out: &mut impl Write, doc: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(doc).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(doc: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_document(&mut out, &doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_single_line() {
        let mut out = Vec::new();
        write_document(
            &mut out,
            &serde_json::json!({ "command": "list", "combinations": [] }),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }
}
