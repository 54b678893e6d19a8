//! Column name simplification.

use tracing::debug;

use dclean_model::{Result, Table};

/// Substring identifying a year-range column name eligible for
/// simplification, e.g. `"2014 [YR2014]"`.
pub const YEAR_MARKER: &str = "YR";

/// Renames every column whose name contains [`YEAR_MARKER`] to its
/// first whitespace-delimited token (`"2014 [YR2014]"` -> `"2014"`).
/// Other columns are untouched; cell data and row count never change.
///
/// The whole batch is collision-checked against the final name set
/// before anything is renamed; a duplicate result fails with
/// `NameCollision` and no rename is committed. Returns the number of
/// columns renamed.
pub fn simplify_column_names(table: &mut Table) -> Result<usize> {
    let renames: Vec<(String, String)> = table
        .columns()
        .iter()
        .filter(|column| column.name.contains(YEAR_MARKER))
        .filter_map(|column| {
            let target = column.name.split_whitespace().next()?;
            if target == column.name {
                return None;
            }
            Some((column.name.clone(), target.to_string()))
        })
        .collect();
    if renames.is_empty() {
        return Ok(0);
    }
    table.rename_columns(&renames)?;
    debug!(renamed = renames.len(), "simplified column names");
    Ok(renames.len())
}
