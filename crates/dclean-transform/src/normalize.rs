//! Placeholder normalization.

use tracing::debug;

use dclean_model::{CellValue, Table};

/// Replaces every text cell exactly equal to `token` with the missing
/// marker, then re-runs column type inference (a column that was text
/// only because of placeholder tokens becomes numeric once they are
/// gone). Returns the number of cells replaced; zero occurrences is a
/// no-op.
///
/// This must run before any missing-value analysis.
pub fn normalize_placeholders(table: &mut Table, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    let mut replaced = 0usize;
    for column in table.columns_mut() {
        for cell in &mut column.cells {
            if matches!(cell, CellValue::Text(text) if text.as_str() == token) {
                *cell = CellValue::Missing;
                replaced += 1;
            }
        }
    }
    if replaced > 0 {
        table.retype();
        debug!(token, replaced, "normalized placeholder cells");
    }
    replaced
}
