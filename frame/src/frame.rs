//! FILENAME: frame/src/frame.rs
//! PURPOSE: Defines the dense, column-ordered table model.
//! CONTEXT: This file contains the `Column` and `Frame` structs. A frame
//! is the working representation of a pre-aggregated table: a flat list
//! of named columns whose values line up row by row. Column order is
//! significant and is preserved by every operation.

use serde::{Deserialize, Serialize};

use crate::value::Datum;

/// A named, ordered list of cell values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Datum>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Datum>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Datum> {
        self.values.get(row)
    }

    /// Overwrites the value at `row`. Returns false if the row is out of range.
    pub fn set(&mut self, row: usize, value: Datum) -> bool {
        match self.values.get_mut(row) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Rewrites every value as its text display form.
    /// Empty cells stay empty so missing data remains distinguishable.
    pub fn coerce_text(&mut self) {
        for value in self.values.iter_mut() {
            match value {
                Datum::Empty | Datum::Text(_) => {}
                other => *other = Datum::Text(other.display()),
            }
        }
    }

    /// Returns the display form of every value, in row order.
    pub fn display_values(&self) -> Vec<String> {
        self.values.iter().map(Datum::display).collect()
    }
}

/// A dense columnar table. All columns are expected to share one length;
/// `is_rectangular` checks that expectation without enforcing it, so
/// callers decide whether a ragged frame is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            columns: Vec::new(),
        }
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        Frame { columns }
    }

    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column. Zero for an empty frame.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of the named column in frame order.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Renames the first column called `from`. Returns false when absent,
    /// which lets callers skip renames for columns a table never had.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.columns.iter_mut().find(|c| c.name == from) {
            Some(column) => {
                column.name = to.to_string();
                true
            }
            None => false,
        }
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Datum> {
        self.column(column).and_then(|c| c.get(row))
    }

    /// True when every column holds the same number of rows.
    pub fn is_rectangular(&self) -> bool {
        let mut lengths = self.columns.iter().map(Column::len);
        match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        }
    }
}
