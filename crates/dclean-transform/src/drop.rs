//! Removal of rows or columns containing missing cells.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dclean_model::Table;

/// Mode for dropping data with missing cells. The modes are mutually
/// exclusive by construction; `Skip` is the no-op state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DropMode {
    /// Do not drop anything.
    #[default]
    Skip,
    /// Remove every row containing at least one missing cell.
    Rows,
    /// Remove every column containing at least one missing cell.
    Columns,
}

/// Applies the drop mode and returns the number of rows or columns
/// removed. Remaining row positions are contiguous from 1 afterwards.
pub fn drop_missing(table: &mut Table, mode: DropMode) -> usize {
    match mode {
        DropMode::Skip => 0,
        DropMode::Rows => {
            let keep: Vec<usize> = (0..table.row_count())
                .filter(|&row| {
                    table
                        .columns()
                        .iter()
                        .all(|column| !column.cells[row].is_missing())
                })
                .collect();
            let dropped = table.row_count() - keep.len();
            if dropped > 0 {
                table.retain_rows(&keep);
                debug!(dropped, "dropped rows with missing values");
            }
            dropped
        }
        DropMode::Columns => {
            let before = table.column_count();
            table.retain_columns(|column| column.missing_count() == 0);
            let dropped = before - table.column_count();
            if dropped > 0 {
                debug!(dropped, "dropped columns with missing values");
            }
            dropped
        }
    }
}
