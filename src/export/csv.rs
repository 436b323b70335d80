use super::model::SegmentExport;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write one CSV row per segment; the header comes from the field names.
pub fn write_csv(path: &Path, rows: &[SegmentExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
