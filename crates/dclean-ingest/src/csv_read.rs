use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use dclean_model::{CellValue, CleanError, Column, Result, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn csv_error(err: csv::Error) -> CleanError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => CleanError::Io(io),
        other => CleanError::Load(format!("malformed csv: {other:?}")),
    }
}

/// Loads a table from a CSV file. See [`read_table_from`].
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let table = read_table_from(file)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded csv table"
    );
    Ok(table)
}

/// Parses a CSV byte stream into a table.
///
/// The first record is the header row; header names must be unique and
/// non-empty. Cells are trimmed and BOM-stripped; empty cells load as
/// `Missing`. After loading, columns whose non-missing cells all parse
/// as `f64` are retyped to numeric. Any structural problem (ragged
/// records, duplicate headers) is a load failure and no table is
/// produced.
pub fn read_table_from<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.len() != headers.len() {
            return Err(CleanError::Load(format!(
                "record has {} fields, expected {}",
                record.len(),
                headers.len()
            )));
        }
        for (idx, raw) in record.iter().enumerate() {
            let value = normalize_cell(raw);
            cells[idx].push(if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value)
            });
        }
    }
    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    let mut table = Table::new(columns)?;
    table.retype();
    Ok(table)
}
