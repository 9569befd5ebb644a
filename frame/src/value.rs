//! FILENAME: frame/src/value.rs
//! PURPOSE: Defines the fundamental value type for a single table cell.
//! CONTEXT: This file contains the `Datum` enum, the atomic unit of a
//! column. It is designed to be lightweight as tables may hold many
//! thousands of these instances.

use serde::{Deserialize, Serialize};

/// Represents the raw data within a single cell of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl Datum {
    pub fn text(value: impl Into<String>) -> Self {
        Datum::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Datum::Empty)
    }

    /// Returns the display form of the value as a String.
    /// This is what renderers and text coercion show for the cell.
    pub fn display(&self) -> String {
        match self {
            Datum::Empty => String::new(),
            Datum::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            Datum::Text(s) => s.clone(),
            Datum::Boolean(b) => {
                if *b { "TRUE" } else { "FALSE" }.to_string()
            }
        }
    }

    /// Reinterprets the value as a number where possible.
    /// Text is trimmed and parsed; booleans and empties are not numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Number(n) => Some(*n),
            Datum::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl Default for Datum {
    fn default() -> Self {
        Datum::Empty
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Number(value)
    }
}

impl From<bool> for Datum {
    fn from(value: bool) -> Self {
        Datum::Boolean(value)
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Datum::Text(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Text(value.to_string())
    }
}
