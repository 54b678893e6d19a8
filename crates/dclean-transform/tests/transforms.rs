//! Tests for the individual cleaning steps.

use dclean_model::{CellValue, CleanError, Column, Table};
use dclean_transform::{
    DropMode, RowSelection, drop_missing, impute_row_mean, missing_summary,
    normalize_placeholders, select_rows, simplify_column_names,
};

fn number(value: f64) -> CellValue {
    CellValue::Number(value)
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn table(columns: Vec<Column>) -> Table {
    Table::new(columns).expect("build table")
}

#[test]
fn normalize_replaces_exact_token_matches_only() {
    let mut t = table(vec![Column::new(
        "A",
        vec![text(".."), text("..."), text("x..")],
    )]);
    let replaced = normalize_placeholders(&mut t, "..");
    assert_eq!(replaced, 1);
    let cells = &t.column("A").unwrap().cells;
    assert_eq!(cells[0], CellValue::Missing);
    assert_eq!(cells[1], text("..."));
    assert_eq!(cells[2], text("x.."));
}

#[test]
fn normalize_retypes_columns_freed_of_placeholders() {
    // "1.5", "..", "3" loads as text; once ".." is gone the column is numeric.
    let mut t = table(vec![Column::new(
        "Score",
        vec![text("1.5"), text(".."), text("3")],
    )]);
    assert!(!t.column("Score").unwrap().is_numeric());
    normalize_placeholders(&mut t, "..");
    let column = t.column("Score").unwrap();
    assert!(column.is_numeric());
    assert_eq!(
        column.cells,
        vec![number(1.5), CellValue::Missing, number(3.0)]
    );
}

#[test]
fn normalize_without_occurrences_is_a_noop() {
    let mut t = table(vec![Column::new("A", vec![text("x"), number(1.0)])]);
    let before = t.clone();
    assert_eq!(normalize_placeholders(&mut t, ".."), 0);
    assert_eq!(t, before);
}

#[test]
fn summary_counts_missing_per_column() {
    let t = table(vec![
        Column::new("A", vec![number(1.0), CellValue::Missing]),
        Column::new("B", vec![CellValue::Missing, CellValue::Missing]),
        Column::new("C", vec![text("x"), text("y")]),
    ]);
    let summary = missing_summary(&t);
    assert_eq!(summary.get("A"), Some(&1));
    assert_eq!(summary.get("B"), Some(&2));
    assert_eq!(summary.get("C"), Some(&0));
}

#[test]
fn summary_does_not_mutate_the_table() {
    let t = table(vec![Column::new("A", vec![CellValue::Missing])]);
    let before = t.clone();
    let _ = missing_summary(&t);
    assert_eq!(t, before);
}

#[test]
fn impute_fills_missing_with_row_mean() {
    // Row of numeric cells [2, missing, 4] imputes the middle to 3.
    let mut t = table(vec![
        Column::new("A", vec![number(2.0)]),
        Column::new("B", vec![CellValue::Missing]),
        Column::new("C", vec![number(4.0)]),
    ]);
    let filled = impute_row_mean(&mut t);
    assert_eq!(filled, 1);
    assert_eq!(t.column("B").unwrap().cells[0], number(3.0));
}

#[test]
fn impute_propagates_undefined_mean() {
    // A row with no numeric value available keeps its missing cells.
    let mut t = table(vec![
        Column::new("A", vec![CellValue::Missing, number(1.0)]),
        Column::new("B", vec![CellValue::Missing, number(3.0)]),
    ]);
    let filled = impute_row_mean(&mut t);
    assert_eq!(filled, 0);
    assert_eq!(t.column("A").unwrap().cells[0], CellValue::Missing);
    assert_eq!(t.column("B").unwrap().cells[0], CellValue::Missing);
}

#[test]
fn impute_never_touches_text_columns() {
    let mut t = table(vec![
        Column::new("Country", vec![text("NL"), CellValue::Missing]),
        Column::new("2014", vec![number(2.0), number(1.0)]),
        Column::new("2015", vec![CellValue::Missing, number(3.0)]),
    ]);
    impute_row_mean(&mut t);
    // The text column's missing cell is left alone; it is not a fill target.
    assert_eq!(t.column("Country").unwrap().cells[1], CellValue::Missing);
    assert_eq!(t.column("Country").unwrap().cells[0], text("NL"));
    // The numeric gap is filled from numeric cells only.
    assert_eq!(t.column("2015").unwrap().cells[0], number(2.0));
}

#[test]
fn impute_mean_ignores_missing_values_in_the_row() {
    let mut t = table(vec![
        Column::new("A", vec![number(10.0)]),
        Column::new("B", vec![CellValue::Missing]),
        Column::new("C", vec![CellValue::Missing]),
    ]);
    impute_row_mean(&mut t);
    // Mean of the single present value, not a divide over three cells.
    assert_eq!(t.column("B").unwrap().cells[0], number(10.0));
    assert_eq!(t.column("C").unwrap().cells[0], number(10.0));
}

#[test]
fn drop_rows_removes_every_row_with_a_missing_cell() {
    let mut t = table(vec![
        Column::new("A", vec![number(1.0), CellValue::Missing, number(3.0)]),
        Column::new("B", vec![text("x"), text("y"), CellValue::Missing]),
    ]);
    let dropped = drop_missing(&mut t, DropMode::Rows);
    assert_eq!(dropped, 2);
    assert_eq!(t.row_count(), 1);
    assert_eq!(missing_summary(&t).values().sum::<usize>(), 0);
}

#[test]
fn drop_columns_removes_every_column_with_a_missing_cell() {
    let mut t = table(vec![
        Column::new("A", vec![number(1.0), CellValue::Missing]),
        Column::new("B", vec![text("x"), text("y")]),
    ]);
    let dropped = drop_missing(&mut t, DropMode::Columns);
    assert_eq!(dropped, 1);
    assert_eq!(t.column_names(), vec!["B"]);
    assert_eq!(missing_summary(&t).values().sum::<usize>(), 0);
}

#[test]
fn drop_skip_is_a_noop() {
    let mut t = table(vec![Column::new("A", vec![CellValue::Missing])]);
    let before = t.clone();
    assert_eq!(drop_missing(&mut t, DropMode::Skip), 0);
    assert_eq!(t, before);
}

#[test]
fn select_rows_keeps_order_and_renumbers() {
    // Selecting [2, 4] from a 5-row table yields rows renumbered 1..2.
    let mut t = table(vec![Column::new(
        "A",
        vec![
            number(1.0),
            number(2.0),
            number(3.0),
            number(4.0),
            number(5.0),
        ],
    )]);
    let outcome = select_rows(&mut t, &[2, 4]);
    assert_eq!(outcome, RowSelection::Applied { kept: 2 });
    assert_eq!(t.row_count(), 2);
    assert_eq!(
        t.column("A").unwrap().cells,
        vec![number(2.0), number(4.0)]
    );
}

#[test]
fn select_rows_empty_selection_leaves_table_unchanged() {
    let mut t = table(vec![Column::new("A", vec![number(1.0), number(2.0)])]);
    let before = t.clone();
    assert_eq!(select_rows(&mut t, &[]), RowSelection::EmptySelection);
    assert_eq!(t, before);
}

#[test]
fn select_rows_ignores_out_of_range_positions() {
    let mut t = table(vec![Column::new("A", vec![number(1.0), number(2.0)])]);
    let outcome = select_rows(&mut t, &[2, 9]);
    assert_eq!(outcome, RowSelection::Applied { kept: 1 });
    assert_eq!(t.column("A").unwrap().cells, vec![number(2.0)]);

    // All positions out of range behaves like an empty selection.
    let mut t2 = table(vec![Column::new("A", vec![number(1.0)])]);
    let before = t2.clone();
    assert_eq!(select_rows(&mut t2, &[0, 7]), RowSelection::EmptySelection);
    assert_eq!(t2, before);
}

#[test]
fn simplify_renames_year_marker_columns_only() {
    let mut t = table(vec![
        Column::new("Country", vec![text("NL")]),
        Column::new("2014 [YR2014]", vec![number(1.0)]),
        Column::new("2015 [YR2015]", vec![number(2.0)]),
    ]);
    let renamed = simplify_column_names(&mut t).expect("simplify");
    assert_eq!(renamed, 2);
    assert_eq!(t.column_names(), vec!["Country", "2014", "2015"]);
}

#[test]
fn simplify_rejects_collisions_without_renaming() {
    let mut t = table(vec![
        Column::new("2014", vec![number(0.0)]),
        Column::new("2014 [YR2014]", vec![number(1.0)]),
    ]);
    let result = simplify_column_names(&mut t);
    assert!(matches!(
        result,
        Err(CleanError::NameCollision { ref name }) if name == "2014"
    ));
    assert_eq!(t.column_names(), vec!["2014", "2014 [YR2014]"]);
}

#[test]
fn simplify_leaves_cell_data_untouched() {
    let mut t = table(vec![Column::new(
        "2014 [YR2014]",
        vec![number(1.0), CellValue::Missing],
    )]);
    simplify_column_names(&mut t).expect("simplify");
    assert_eq!(
        t.column("2014").unwrap().cells,
        vec![number(1.0), CellValue::Missing]
    );
}
