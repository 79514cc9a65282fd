//! CSV export of display-ready tables.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::stats::report::Table;

/// Write one table to a CSV file, header first.
///
/// An empty table still produces a file with the header row, so downstream
/// consumers always see a stable schema.
pub fn write_table_csv(path: &Path, table: &Table) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
