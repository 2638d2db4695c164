use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{FormulaEntry, FormulaTable};

/// Load a formula table from a JSON file.
///
/// Expects an array of `{"name", "kcal", "protein"}` objects; order is kept
/// as the display order.
pub fn load_formula_table<P: AsRef<Path>>(path: P) -> Result<FormulaTable> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries: Vec<FormulaEntry> = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), count = entries.len(), "loaded formula table");
    FormulaTable::from_entries(entries)
}

/// Save a formula table to a JSON file.
pub fn save_formula_table<P: AsRef<Path>>(path: P, table: &FormulaTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table.entries())?;
    fs::write(path, json)?;
    Ok(())
}
