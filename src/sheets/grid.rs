// src/sheets/grid.rs

use crate::errors::StockError;
use serde_json::Value;

/// A grid of cells as the remote range API hands them back: rows of strings,
/// possibly ragged, possibly with trailing blanks. Missing cells read as
/// empty strings, so field access downstream defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        SheetGrid { rows }
    }

    /// Decodes a JSON range payload into a grid.
    ///
    /// This is the one place structural failure surfaces: a null or
    /// non-array payload means no grid was provided at all, which is a
    /// caller error, not "no data". An empty array is fine (empty grid).
    /// Inside the grid everything degrades: a non-array row becomes an empty
    /// row, non-string cells are stringified.
    pub fn from_value(value: &Value) -> Result<Self, StockError> {
        let arr = value.as_array().ok_or_else(|| {
            StockError::InvalidInput(format!(
                "range payload is not an array of rows (got {})",
                json_kind(value)
            ))
        })?;

        let rows = arr
            .iter()
            .map(|row| match row.as_array() {
                Some(cells) => cells.iter().map(cell_text).collect(),
                None => Vec::new(),
            })
            .collect();

        Ok(SheetGrid { rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row plus data rows, or `None` for an empty grid.
    pub fn split_header(&self) -> Option<(&[String], &[Vec<String>])> {
        let (header, data) = self.rows.split_first()?;
        Some((header.as_slice(), data))
    }
}

/// Cell at `idx`, or `""` when the row is too short.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// A row is blank when every cell is empty or whitespace.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Number of non-blank cells in a row.
pub fn populated_cells(row: &[String]) -> usize {
    row.iter().filter(|c| !c.trim().is_empty()).count()
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
