//! Behavioral tests for the table model.

use dclean_model::{CellValue, CleanError, Column, Table};

fn number(value: f64) -> CellValue {
    CellValue::Number(value)
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn sample_table() -> Table {
    Table::new(vec![
        Column::new("Country", vec![text("NL"), text("BE"), text("DE")]),
        Column::new("2014", vec![number(1.0), CellValue::Missing, number(3.0)]),
        Column::new("2015", vec![number(4.0), number(5.0), CellValue::Missing]),
    ])
    .expect("build table")
}

#[test]
fn new_rejects_duplicate_column_names() {
    let result = Table::new(vec![
        Column::new("A", vec![number(1.0)]),
        Column::new("A", vec![number(2.0)]),
    ]);
    assert!(matches!(result, Err(CleanError::Load(_))));
}

#[test]
fn new_rejects_unequal_column_lengths() {
    let result = Table::new(vec![
        Column::new("A", vec![number(1.0)]),
        Column::new("B", vec![number(2.0), number(3.0)]),
    ]);
    assert!(matches!(result, Err(CleanError::Load(_))));
}

#[test]
fn new_rejects_empty_column_name() {
    let result = Table::new(vec![Column::new("  ", vec![number(1.0)])]);
    assert!(matches!(result, Err(CleanError::Load(_))));
}

#[test]
fn column_is_numeric_requires_a_number_and_no_text() {
    let numeric = Column::new("A", vec![number(1.0), CellValue::Missing]);
    assert!(numeric.is_numeric());

    let mixed = Column::new("B", vec![number(1.0), text("x")]);
    assert!(!mixed.is_numeric());

    let all_missing = Column::new("C", vec![CellValue::Missing, CellValue::Missing]);
    assert!(!all_missing.is_numeric());
}

#[test]
fn retype_converts_parseable_text_columns() {
    let mut column = Column::new("A", vec![text("1.5"), CellValue::Missing, text(" 3 ")]);
    column.retype();
    assert_eq!(
        column.cells,
        vec![number(1.5), CellValue::Missing, number(3.0)]
    );
    assert!(column.is_numeric());
}

#[test]
fn retype_leaves_mixed_columns_as_text() {
    let mut column = Column::new("A", vec![text("1.5"), text("abc")]);
    column.retype();
    assert_eq!(column.cells, vec![text("1.5"), text("abc")]);
}

#[test]
fn retype_leaves_all_missing_columns_untyped() {
    let mut column = Column::new("A", vec![CellValue::Missing, CellValue::Missing]);
    column.retype();
    assert!(!column.is_numeric());
}

#[test]
fn remove_columns_is_strict_and_atomic() {
    let mut table = sample_table();
    let result = table.remove_columns(&["2014".to_string(), "Nope".to_string()]);
    assert!(matches!(
        result,
        Err(CleanError::ColumnNotFound { ref name }) if name == "Nope"
    ));
    // Nothing was removed.
    assert_eq!(table.column_count(), 3);

    table
        .remove_columns(&["2014".to_string()])
        .expect("remove existing column");
    assert_eq!(table.column_names(), vec!["Country", "2015"]);
}

#[test]
fn retain_rows_preserves_given_order() {
    let mut table = sample_table();
    table.retain_rows(&[2, 0]);
    assert_eq!(table.row_count(), 2);
    let country = table.column("Country").expect("country column");
    assert_eq!(country.cells, vec![text("DE"), text("NL")]);
}

#[test]
fn rename_columns_detects_collision_before_commit() {
    let mut table = sample_table();
    let result = table.rename_columns(&[("2015".to_string(), "2014".to_string())]);
    assert!(matches!(
        result,
        Err(CleanError::NameCollision { ref name }) if name == "2014"
    ));
    // The rename was rejected wholesale.
    assert_eq!(table.column_names(), vec!["Country", "2014", "2015"]);
}

#[test]
fn rename_columns_applies_batch() {
    let mut table = sample_table();
    table
        .rename_columns(&[
            ("2014".to_string(), "Y14".to_string()),
            ("2015".to_string(), "Y15".to_string()),
        ])
        .expect("rename");
    assert_eq!(table.column_names(), vec!["Country", "Y14", "Y15"]);
}

#[test]
fn missing_count_counts_only_missing() {
    let table = sample_table();
    assert_eq!(table.column("Country").unwrap().missing_count(), 0);
    assert_eq!(table.column("2014").unwrap().missing_count(), 1);
}
