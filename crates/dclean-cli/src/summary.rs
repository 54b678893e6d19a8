//! Human-readable summaries for the `dclean` commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CleanOutcome, InspectReport};

pub fn print_inspect(report: &InspectReport) {
    println!("Input: {}", report.input.display());
    println!(
        "Shape: {} rows x {} columns",
        report.rows,
        report.columns.len()
    );
    if report.placeholders_replaced > 0 {
        println!(
            "Placeholders normalized to missing: {}",
            report.placeholders_replaced
        );
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &report.columns {
        let kind = if column.numeric { "numeric" } else { "text" };
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(kind),
            missing_cell(column.missing),
        ]);
    }
    println!("{table}");
}

pub fn print_clean_summary(outcome: &CleanOutcome) {
    let report = &outcome.report;
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Effect"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Shape"),
        Cell::new(format!(
            "{}x{} -> {}x{}",
            report.rows_before, report.columns_before, report.rows_after, report.columns_after
        )),
    ]);
    table.add_row(count_row("Placeholders normalized", report.placeholders_replaced));
    table.add_row(count_row("Cells imputed", report.cells_imputed));
    table.add_row(count_row("Rows dropped", report.rows_dropped));
    table.add_row(count_row("Columns dropped", report.columns_dropped));
    table.add_row(count_row("Columns removed", report.columns_removed));
    table.add_row(vec![
        Cell::new("Rows kept by selection"),
        match report.rows_kept {
            Some(kept) => Cell::new(kept),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(count_row("Columns renamed", report.columns_renamed));
    println!("{table}");
    print_missing_table(outcome);
    if !report.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &report.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn print_missing_table(outcome: &CleanOutcome) {
    let remaining: Vec<(&String, &usize)> = outcome
        .report
        .missing_after
        .iter()
        .filter(|&(_, &count)| count > 0)
        .collect();
    if remaining.is_empty() {
        println!("No missing values remain.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in remaining {
        table.add_row(vec![Cell::new(name), missing_cell(*count)]);
    }
    println!();
    println!("Remaining missing values:");
    println!("{table}");
}

fn count_row(label: &str, count: usize) -> Vec<Cell> {
    let cell = if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    };
    vec![Cell::new(label), cell]
}

fn missing_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
