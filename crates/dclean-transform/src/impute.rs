//! Row-mean imputation for missing numeric cells.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dclean_model::{CellValue, Table};

/// Mode for filling missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImputeMode {
    /// Leave missing values as-is.
    #[default]
    Skip,
    /// Fill missing numeric cells with the mean of the row's other
    /// numeric cells.
    RowMean,
}

/// Fills each missing cell in a numeric column with the arithmetic mean
/// of that row's non-missing numeric cells. Returns the number of cells
/// filled.
///
/// Columns are partitioned by type tag first; text columns are never
/// read or written. A row with no non-missing numeric cell has an
/// undefined mean and its missing cells stay missing (no division by
/// zero).
pub fn impute_row_mean(table: &mut Table) -> usize {
    let numeric: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, column)| column.is_numeric())
        .map(|(idx, _)| idx)
        .collect();
    if numeric.is_empty() {
        return 0;
    }
    let mut filled = 0usize;
    let mut undefined = 0usize;
    for row in 0..table.row_count() {
        let mut sum = 0.0;
        let mut count = 0usize;
        for &idx in &numeric {
            if let Some(value) = table.columns()[idx].cells[row].as_number() {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            if numeric
                .iter()
                .any(|&idx| table.columns()[idx].cells[row].is_missing())
            {
                undefined += 1;
            }
            continue;
        }
        let mean = sum / count as f64;
        for &idx in &numeric {
            let cell = &mut table.columns_mut()[idx].cells[row];
            if cell.is_missing() {
                *cell = CellValue::Number(mean);
                filled += 1;
            }
        }
    }
    debug!(
        numeric_columns = numeric.len(),
        filled, undefined, "row-mean imputation complete"
    );
    filled
}
