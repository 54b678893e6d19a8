use std::collections::BTreeSet;

use crate::error::{CleanError, Result};

/// A single cell: numeric, text, or absent.
///
/// `Missing` is a distinguished marker, never the number zero or the
/// empty string. Numeric/text partitioning reads this tag, not the
/// runtime contents.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// True when the column holds at least one number and no text.
    pub fn is_numeric(&self) -> bool {
        let mut has_number = false;
        for cell in &self.cells {
            match cell {
                CellValue::Number(_) => has_number = true,
                CellValue::Text(_) => return false,
                CellValue::Missing => {}
            }
        }
        has_number
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }

    /// Converts text cells to numbers when every non-missing cell parses
    /// as `f64` and at least one non-missing cell exists. Leaves mixed or
    /// all-missing columns untouched.
    pub fn retype(&mut self) {
        let mut parsed = Vec::with_capacity(self.cells.len());
        let mut non_missing = 0usize;
        for cell in &self.cells {
            match cell {
                CellValue::Number(value) => {
                    non_missing += 1;
                    parsed.push(CellValue::Number(*value));
                }
                CellValue::Text(text) => match text.trim().parse::<f64>() {
                    Ok(value) => {
                        non_missing += 1;
                        parsed.push(CellValue::Number(value));
                    }
                    Err(_) => return,
                },
                CellValue::Missing => parsed.push(CellValue::Missing),
            }
        }
        if non_missing > 0 {
            self.cells = parsed;
        }
    }
}

/// An in-memory table: an ordered sequence of named, equal-length columns.
///
/// Rows are addressed by 1-based ordinal position. Removal and selection
/// operate on column storage directly, so positions stay contiguous
/// without a separate reindex pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table, validating that column names are unique and
    /// non-empty and that all columns have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if column.name.trim().is_empty() {
                return Err(CleanError::Load("empty column name".to_string()));
            }
            if !seen.insert(column.name.clone()) {
                return Err(CleanError::Load(format!(
                    "duplicate column name: {}",
                    column.name
                )));
            }
        }
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for column in &columns {
                if column.cells.len() != expected {
                    return Err(CleanError::Load(format!(
                        "column {} has {} cells, expected {expected}",
                        column.name,
                        column.cells.len()
                    )));
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    /// Re-runs per-column type inference over every column.
    pub fn retype(&mut self) {
        for column in &mut self.columns {
            column.retype();
        }
    }

    /// Removes exactly the named columns, preserving the order of the
    /// rest. Strict policy: any unknown name fails with `ColumnNotFound`
    /// and the table is left unmodified.
    pub fn remove_columns(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            if self.column(name).is_none() {
                return Err(CleanError::ColumnNotFound { name: name.clone() });
            }
        }
        self.columns.retain(|column| !names.contains(&column.name));
        Ok(())
    }

    /// Keeps only the columns matching the predicate, preserving order.
    pub fn retain_columns<F>(&mut self, predicate: F)
    where
        F: FnMut(&Column) -> bool,
    {
        self.columns.retain(predicate);
    }

    /// Keeps only the rows at the given 0-based positions, in the order
    /// given. Positions must be in range.
    pub fn retain_rows(&mut self, keep: &[usize]) {
        for column in &mut self.columns {
            column.cells = keep.iter().map(|&idx| column.cells[idx].clone()).collect();
        }
    }

    /// Applies a batch of column renames atomically. The full post-rename
    /// name set is checked for duplicates first; on collision nothing is
    /// renamed.
    pub fn rename_columns(&mut self, renames: &[(String, String)]) -> Result<()> {
        for (source, _) in renames {
            if self.column(source).is_none() {
                return Err(CleanError::ColumnNotFound {
                    name: source.clone(),
                });
            }
        }
        let mut final_names = BTreeSet::new();
        for column in &self.columns {
            let name = renames
                .iter()
                .find(|(source, _)| *source == column.name)
                .map_or(column.name.as_str(), |(_, target)| target.as_str());
            if !final_names.insert(name.to_string()) {
                return Err(CleanError::NameCollision {
                    name: name.to_string(),
                });
            }
        }
        for column in &mut self.columns {
            if let Some((_, target)) = renames.iter().find(|(source, _)| *source == column.name) {
                column.name = target.clone();
            }
        }
        Ok(())
    }
}
