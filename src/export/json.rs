use super::model::WeekExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write the week document as pretty-printed JSON.
pub fn write_json(path: &Path, doc: &WeekExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
