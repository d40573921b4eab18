//! In-memory tabular data model
//!
//! A [`Table`] is an ordered set of named columns and an ordered sequence of
//! rows of string cells. All values are carried as text - the pipeline never
//! coerces numbers or dates, so a billing unit code like `4158` round-trips
//! exactly as it appeared in the uploaded file.

use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered, string-valued table decoded from an uploaded spreadsheet
///
/// Rows are stored positionally against `columns`; a cell may be empty when
/// the source sheet had a blank or missing value there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in sheet order
    columns: Vec<String>,

    /// Rows of cells, each the same length as `columns`
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from column names and rows
    ///
    /// Short rows are padded with empty cells; long rows are truncated to the
    /// column count so positional lookups stay in bounds.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Column names, in sheet order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows of cells
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (excluding the header)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a required column
    ///
    /// # Errors
    ///
    /// Returns a `Schema` error if the column is not present.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| {
            BusplitError::Schema(format!("'{name}' column not found in input file"))
        })
    }

    /// Sorted distinct non-empty values of a column
    ///
    /// Empty cells are treated as missing and never reported, so they are
    /// never offered as selector values.
    pub fn distinct_values(&self, column: usize) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Creates a new table with the same columns and a subset of rows
    pub(crate) fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}
