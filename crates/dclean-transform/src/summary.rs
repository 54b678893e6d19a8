//! Missing-value summary.

use std::collections::BTreeMap;

use dclean_model::Table;

/// Read-only map from column name to the number of missing cells in
/// that column. Recompute after any step that changes cell values or
/// table shape.
pub fn missing_summary(table: &Table) -> BTreeMap<String, usize> {
    table
        .columns()
        .iter()
        .map(|column| (column.name.clone(), column.missing_count()))
        .collect()
}
