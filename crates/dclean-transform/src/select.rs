//! Explicit row retention.

use std::collections::BTreeSet;

use tracing::warn;

use dclean_model::Table;

/// Outcome of a row selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelection {
    /// The table now holds exactly the selected rows.
    Applied { kept: usize },
    /// No valid row was selected; the table was left unchanged.
    EmptySelection,
}

/// Keeps exactly the rows at the given 1-based positions (valid at
/// selection time), preserving their relative order and renumbering
/// positions contiguously from 1. Out-of-range positions are ignored.
///
/// An empty (or entirely out-of-range) selection is a non-fatal
/// warning: the table is left unchanged rather than cleared.
pub fn select_rows(table: &mut Table, positions: &[usize]) -> RowSelection {
    let row_count = table.row_count();
    let valid: BTreeSet<usize> = positions
        .iter()
        .copied()
        .filter(|&pos| pos >= 1 && pos <= row_count)
        .collect();
    if valid.is_empty() {
        warn!("no rows selected, table left unchanged");
        return RowSelection::EmptySelection;
    }
    let keep: Vec<usize> = valid.into_iter().map(|pos| pos - 1).collect();
    table.retain_rows(&keep);
    RowSelection::Applied { kept: keep.len() }
}
