use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use dclean_model::{CellValue, CleanError, Result, Table};

/// Formats a number without trailing zeros ("10.50" -> "10.5").
pub fn format_number(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(value) => format_number(*value),
        CellValue::Text(text) => text.clone(),
        // Empty string is the stable export sentinel for Missing.
        CellValue::Missing => String::new(),
    }
}

fn csv_error(err: csv::Error) -> CleanError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => CleanError::Io(io),
        other => CleanError::Load(format!("csv write failure: {other:?}")),
    }
}

/// Serializes the table to a CSV file. See [`write_table_to`].
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let writer = Writer::from_path(path).map_err(csv_error)?;
    write_records(writer, table)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "wrote csv table"
    );
    Ok(())
}

/// Serializes the table as CSV: one header row of column names followed
/// by the data rows. Row ordinals are display-only and are not written.
pub fn write_table_to<W: Write>(writer: W, table: &Table) -> Result<()> {
    write_records(Writer::from_writer(writer), table)
}

fn write_records<W: Write>(mut writer: Writer<W>, table: &Table) -> Result<()> {
    writer.write_record(table.column_names()).map_err(csv_error)?;
    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| render_cell(&column.cells[row]))
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}
