//! CSV assembly for the exported player table.

use std::{fs, path::Path};

use crate::yahoo::types::StatSchema;
use crate::Result;

/// Leading columns shared by every export.
pub const FIXED_COLUMNS: &str = "name,team,position,";

/// Default export path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "out.csv";

/// Header line: fixed columns, then one snake_case column per stat.
pub fn header_row(schema: &StatSchema) -> String {
    let stats: Vec<String> = schema.iter().map(|s| s.column_name()).collect();
    format!("{FIXED_COLUMNS}{}", stats.join(","))
}

/// Header followed by the rows, newline separated, no trailing newline.
pub fn render_csv(schema: &StatSchema, rows: &[String]) -> String {
    std::iter::once(header_row(schema))
        .chain(rows.iter().cloned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the export in one go, replacing any existing file.
pub fn write_csv(path: &Path, schema: &StatSchema, rows: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, render_csv(schema, rows))?;
    Ok(())
}
