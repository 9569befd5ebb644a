//! FILENAME: style-engine/src/table.rs
//! Pivot Table Input - The pre-aggregated table and its metadata.
//!
//! This module contains all the types needed to DESCRIBE what arrived
//! from the aggregation step. These structures are designed to be:
//! - Serializable (for saving/loading sessions)
//! - Sent across a process or IPC boundary
//! - Immutable snapshots of the aggregation output
//!
//! The engine never re-aggregates: everything here is already computed,
//! and the metadata is the only record of which columns mean what.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use frame::Frame;

// ============================================================================
// STAT KEYS
// ============================================================================

/// Identifies which statistic a row or cell reports.
///
/// The wire names (`n`, `p`, `p_col`, `p_row`) are the markers the
/// aggregation step writes into the stats column or uses as column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    /// Weighted count.
    N,
    /// Percentage of the total.
    P,
    /// Percentage within the column group.
    PCol,
    /// Percentage within the row group.
    PRow,
}

impl StatKey {
    /// All stat keys, in their fixed processing order.
    pub const ALL: [StatKey; 4] = [StatKey::N, StatKey::P, StatKey::PCol, StatKey::PRow];

    /// The internal marker name for this stat.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::N => "n",
            StatKey::P => "p",
            StatKey::PCol => "p_col",
            StatKey::PRow => "p_row",
        }
    }

    /// Parses an internal marker. Anything unrecognized yields None so
    /// callers can skip cells that do not carry a stat marker.
    pub fn parse(s: &str) -> Option<StatKey> {
        match s {
            "n" => Some(StatKey::N),
            "p" => Some(StatKey::P),
            "p_col" => Some(StatKey::PCol),
            "p_row" => Some(StatKey::PRow),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PIVOT METADATA
// ============================================================================

/// Side-channel metadata describing the grouping structure of a pivot
/// table. The table itself is just named columns; this is the only
/// record of which columns group rows, which variable was spread into
/// wide columns, and where the stats markers live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotMeta {
    /// Names of the row-grouping columns, leftmost first.
    pub rows: Vec<String>,

    /// Names of the column-grouping variables that were spread into the
    /// wide layout. Empty means the table stayed long: one statistic per
    /// column, no cross-tabulation.
    pub cols: Vec<String>,

    /// Ordered distinct values each column-grouping variable took during
    /// aggregation. Every value corresponds 1:1 with a generated wide
    /// column, so this is the authoritative list of value columns.
    pub cols_values: FxHashMap<String, Vec<String>>,

    /// Name of the column whose cells mark which statistic each row
    /// reports. Present whenever `cols` is non-empty.
    pub stat_column: Option<String>,
}

impl PivotMeta {
    /// Metadata for a long table: stats live in their own columns.
    pub fn long(rows: Vec<String>) -> Self {
        PivotMeta {
            rows,
            ..Default::default()
        }
    }

    /// Metadata for a wide table spread over one grouping variable.
    pub fn wide(
        rows: Vec<String>,
        variable: impl Into<String>,
        values: Vec<String>,
        stat_column: impl Into<String>,
    ) -> Self {
        let variable = variable.into();
        let mut cols_values = FxHashMap::default();
        cols_values.insert(variable.clone(), values);
        PivotMeta {
            rows,
            cols: vec![variable],
            cols_values,
            stat_column: Some(stat_column.into()),
        }
    }

    /// True when no column-grouping variable exists.
    pub fn is_long(&self) -> bool {
        self.cols.is_empty()
    }

    /// The single column-grouping variable, when there is exactly one.
    pub fn single_variable(&self) -> Option<&str> {
        match self.cols.as_slice() {
            [variable] => Some(variable.as_str()),
            _ => None,
        }
    }

    /// The generated value columns for `variable`, in aggregation order.
    pub fn values_of(&self, variable: &str) -> &[String] {
        self.cols_values
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// ============================================================================
// PIVOT TABLE
// ============================================================================

/// A pre-aggregated table paired with the metadata that explains it.
/// This is the engine's input; the engine works on its own copy and the
/// caller's original is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotTable {
    pub frame: Frame,
    pub meta: PivotMeta,
}

impl PivotTable {
    pub fn new(frame: Frame, meta: PivotMeta) -> Self {
        PivotTable { frame, meta }
    }

    pub fn row_count(&self) -> usize {
        self.frame.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.frame.column_count()
    }
}
