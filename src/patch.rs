use crate::catalog::{SECTION_KEYS, TOOLTIP_KEY};
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    NoMatch,
    Missing,
}

/// Sets the tooltip key in every recognized section that already carries it.
/// Returns true if at least one field was written.
pub fn apply_translation(doc: &mut Value, translation: &str) -> bool {
    let mut updated = false;
    for section in SECTION_KEYS {
        if let Some(Value::Object(fields)) = doc.get_mut(section) {
            if fields.contains_key(TOOLTIP_KEY) {
                fields.insert(
                    TOOLTIP_KEY.to_string(),
                    Value::String(translation.to_string()),
                );
                updated = true;
            }
        }
    }
    updated
}

/// Reads one language file, applies the translation, and writes the file
/// back only if something changed. A missing file is reported as an
/// outcome; parse and I/O failures propagate to the caller.
pub fn patch_file(path: &Path, translation: &str) -> anyhow::Result<FileOutcome> {
    if !path.exists() {
        return Ok(FileOutcome::Missing);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read language file at {}", path.display()))?;
    let mut doc: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    if !apply_translation(&mut doc, translation) {
        return Ok(FileOutcome::NoMatch);
    }
    let out = serde_json::to_string_pretty(&doc)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    std::fs::write(path, out)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(FileOutcome::Updated)
}
