//! Pipeline driver: fixed-order composition of the cleaning steps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use dclean_model::{Result, Table};

use crate::drop::{DropMode, drop_missing};
use crate::impute::{ImputeMode, impute_row_mean};
use crate::normalize::normalize_placeholders;
use crate::rename::simplify_column_names;
use crate::select::{RowSelection, select_rows};
use crate::summary::missing_summary;

/// Default placeholder token marking missing values in raw data.
pub const DEFAULT_PLACEHOLDER: &str = "..";

/// Explicit configuration for one cleaning run. Every step except
/// placeholder normalization is optional; the defaults leave the table
/// untouched apart from normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Token to replace with the missing marker before any analysis.
    pub placeholder: String,
    /// How to fill missing values.
    pub impute: ImputeMode,
    /// Whether to drop rows or columns containing missing values.
    pub drop: DropMode,
    /// Columns to remove by name (strict: unknown names fail).
    pub remove_columns: Vec<String>,
    /// 1-based row positions to keep. `None` skips selection entirely;
    /// `Some` with no valid position is a non-fatal empty selection.
    pub keep_rows: Option<Vec<usize>>,
    /// Simplify year-marker column names.
    pub simplify_names: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            impute: ImputeMode::default(),
            drop: DropMode::default(),
            remove_columns: Vec::new(),
            keep_rows: None,
            simplify_names: false,
        }
    }
}

/// What one cleaning run did to the table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    pub rows_before: usize,
    pub columns_before: usize,
    pub rows_after: usize,
    pub columns_after: usize,
    pub placeholders_replaced: usize,
    pub cells_imputed: usize,
    pub rows_dropped: usize,
    pub columns_dropped: usize,
    pub columns_removed: usize,
    pub rows_kept: Option<usize>,
    pub columns_renamed: usize,
    pub warnings: Vec<String>,
    /// Missing cells per column after all steps ran.
    pub missing_after: BTreeMap<String, usize>,
}

/// Runs the cleaning steps in their fixed order: normalize
/// placeholders, impute, drop, remove columns, select rows, simplify
/// names. Steps validate before mutating, so a failing step leaves the
/// table as the previous step produced it.
pub fn clean(table: &mut Table, config: &CleanConfig) -> Result<CleanReport> {
    let mut report = CleanReport {
        rows_before: table.row_count(),
        columns_before: table.column_count(),
        ..CleanReport::default()
    };

    report.placeholders_replaced = normalize_placeholders(table, &config.placeholder);

    if config.impute == ImputeMode::RowMean {
        report.cells_imputed = impute_row_mean(table);
    }

    match config.drop {
        DropMode::Skip => {}
        DropMode::Rows => report.rows_dropped = drop_missing(table, DropMode::Rows),
        DropMode::Columns => report.columns_dropped = drop_missing(table, DropMode::Columns),
    }

    if !config.remove_columns.is_empty() {
        table.remove_columns(&config.remove_columns)?;
        report.columns_removed = config.remove_columns.len();
    }

    if let Some(positions) = &config.keep_rows {
        match select_rows(table, positions) {
            RowSelection::Applied { kept } => report.rows_kept = Some(kept),
            RowSelection::EmptySelection => report
                .warnings
                .push("no rows selected; row selection skipped".to_string()),
        }
    }

    if config.simplify_names {
        report.columns_renamed = simplify_column_names(table)?;
    }

    report.rows_after = table.row_count();
    report.columns_after = table.column_count();
    report.missing_after = missing_summary(table);
    info!(
        rows_before = report.rows_before,
        rows_after = report.rows_after,
        columns_before = report.columns_before,
        columns_after = report.columns_after,
        cells_imputed = report.cells_imputed,
        "cleaning complete"
    );
    Ok(report)
}
