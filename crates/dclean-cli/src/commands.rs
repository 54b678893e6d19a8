//! Command implementations for the `dclean` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dclean_ingest::{read_table, write_table};
use dclean_transform::{
    CleanConfig, CleanReport, DropMode, ImputeMode, clean, normalize_placeholders,
};

use crate::cli::{CleanArgs, DropArg, ImputeArg, InspectArgs};

/// Per-column facts reported by `inspect`.
pub struct ColumnInfo {
    pub name: String,
    pub numeric: bool,
    pub missing: usize,
}

/// Result of the `inspect` command.
pub struct InspectReport {
    pub input: PathBuf,
    pub rows: usize,
    pub placeholders_replaced: usize,
    pub columns: Vec<ColumnInfo>,
}

/// Result of the `clean` command.
pub struct CleanOutcome {
    pub input: PathBuf,
    /// Where the cleaned table was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: CleanReport,
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectReport> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();
    let mut table = read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let placeholders_replaced = normalize_placeholders(&mut table, &args.placeholder);
    let columns = table
        .columns()
        .iter()
        .map(|column| ColumnInfo {
            name: column.name.clone(),
            numeric: column.is_numeric(),
            missing: column.missing_count(),
        })
        .collect();
    Ok(InspectReport {
        input: args.input.clone(),
        rows: table.row_count(),
        placeholders_replaced,
        columns,
    })
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let mut table = read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let config = clean_config(args);
    let report = clean(&mut table, &config).context("run cleaning pipeline")?;
    let output = if args.dry_run {
        info!("dry run, skipping export");
        None
    } else {
        write_table(&args.output, &table)
            .with_context(|| format!("write {}", args.output.display()))?;
        Some(args.output.clone())
    };
    Ok(CleanOutcome {
        input: args.input.clone(),
        output,
        report,
    })
}

fn clean_config(args: &CleanArgs) -> CleanConfig {
    CleanConfig {
        placeholder: args.placeholder.clone(),
        impute: match args.impute {
            ImputeArg::None => ImputeMode::Skip,
            ImputeArg::RowMean => ImputeMode::RowMean,
        },
        drop: match args.drop_missing {
            DropArg::None => DropMode::Skip,
            DropArg::Rows => DropMode::Rows,
            DropArg::Columns => DropMode::Columns,
        },
        remove_columns: args.remove_columns.clone(),
        keep_rows: args.keep_rows.clone(),
        simplify_names: args.simplify_names,
    }
}
