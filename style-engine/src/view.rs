//! FILENAME: style-engine/src/view.rs
//! Styled Table View - Renderable output for a cell-grid renderer.
//!
//! This module defines the fully specified description of a styled
//! table: display columns, one or two header rows, the body as display
//! strings, and an ordered list of paint directives. A renderer applies
//! the directives front to back, and a later directive wins wherever it
//! overlaps an earlier one on the same cells. The engine leans on that
//! rule, so a renderer must not reorder the list.

use serde::{Deserialize, Serialize};

use frame::{BorderStyle, Color, TextAlign};

use crate::table::PivotTable;

// ============================================================================
// REGION ADDRESSING
// ============================================================================

/// Which band of the table a region addresses. Header rows and body rows
/// are numbered independently, both from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TablePart {
    Header,
    Body,
}

/// A rectangular block of cells within one table part.
/// All bounds are 0-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRegion {
    pub part: TablePart,
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl CellRegion {
    pub fn new(
        part: TablePart,
        start_row: usize,
        end_row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Self {
        CellRegion {
            part,
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// One full-width header row.
    pub fn header_row(row: usize, col_count: usize) -> Self {
        CellRegion::new(TablePart::Header, row, row, 0, col_count.saturating_sub(1))
    }

    /// The whole header band.
    pub fn header_all(header_rows: usize, col_count: usize) -> Self {
        CellRegion::new(
            TablePart::Header,
            0,
            header_rows.saturating_sub(1),
            0,
            col_count.saturating_sub(1),
        )
    }

    /// One full-width body row.
    pub fn body_row(row: usize, col_count: usize) -> Self {
        CellRegion::new(TablePart::Body, row, row, 0, col_count.saturating_sub(1))
    }

    /// A contiguous band of full-width body rows.
    pub fn body_rows(start_row: usize, end_row: usize, col_count: usize) -> Self {
        CellRegion::new(
            TablePart::Body,
            start_row,
            end_row,
            0,
            col_count.saturating_sub(1),
        )
    }

    /// The whole body band.
    pub fn body_all(body_rows: usize, col_count: usize) -> Self {
        CellRegion::body_rows(0, body_rows.saturating_sub(1), col_count)
    }

    pub fn contains(&self, part: TablePart, row: usize, col: usize) -> bool {
        self.part == part
            && (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }

    pub fn row_count(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn col_count(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

// ============================================================================
// HEADER STRUCTURE
// ============================================================================

/// A single header cell with its horizontal span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub label: String,
    /// How many display columns this cell covers.
    pub col_span: u16,
    pub align: TextAlign,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>, col_span: u16, align: TextAlign) -> Self {
        HeaderCell {
            label: label.into(),
            col_span,
            align,
        }
    }

    /// A spacer cell with no label.
    pub fn blank(col_span: u16) -> Self {
        HeaderCell::new("", col_span, TextAlign::Center)
    }

    pub fn is_blank(&self) -> bool {
        self.label.is_empty()
    }
}

/// One header row as an ordered run of spanned cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub cells: Vec<HeaderCell>,
}

impl HeaderRow {
    pub fn new(cells: Vec<HeaderCell>) -> Self {
        HeaderRow { cells }
    }

    /// Total number of display columns the row covers.
    pub fn span_width(&self) -> usize {
        self.cells.iter().map(|c| c.col_span as usize).sum()
    }

    /// The display-column offset where `cell_index` starts.
    pub fn col_offset(&self, cell_index: usize) -> usize {
        self.cells
            .iter()
            .take(cell_index)
            .map(|c| c.col_span as usize)
            .sum()
    }
}

// ============================================================================
// PAINT DIRECTIVES
// ============================================================================

/// A single paint instruction for a region of the styled table.
///
/// Directives are deliberately small and renderer-agnostic: a renderer
/// needs nothing beyond the table geometry to apply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Fill the region's background.
    Background { region: CellRegion, color: Color },
    /// Set the region's text color.
    Foreground { region: CellRegion, color: Color },
    /// Render the region's text bold.
    Bold { region: CellRegion },
    /// Set the region's font size in points.
    FontSize { region: CellRegion, size: u8 },
    /// Set the region's font family.
    FontFamily { region: CellRegion, family: String },
    /// Apply uniform inner cell padding, in pixels.
    Padding { region: CellRegion, padding: u8 },
    /// Suggest one uniform width, in pixels, for every display column.
    ColumnWidth { width: u16 },
    /// Paint every edge of every cell in the region.
    AllBorders {
        region: CellRegion,
        border: BorderStyle,
    },
    /// Draw a rule along the top edge of the region's first row.
    TopBorder {
        region: CellRegion,
        border: BorderStyle,
    },
    /// Merge a vertical run of body cells in one column into a single
    /// cell showing the first value.
    MergeRows {
        col: usize,
        start_row: usize,
        end_row: usize,
    },
}

// ============================================================================
// STYLED TABLE
// ============================================================================

/// The complete renderable description of a styled table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledTable {
    /// Names of the display columns, in order.
    pub col_keys: Vec<String>,
    /// One or two header rows, top row first.
    pub header_rows: Vec<HeaderRow>,
    /// Body cells as display strings, row-major, one entry per col_key.
    pub body: Vec<Vec<String>>,
    /// Paint directives in application order.
    pub paints: Vec<Paint>,
    /// The formatted working table, retained on request.
    pub source: Option<PivotTable>,
}

impl StyledTable {
    pub fn column_count(&self) -> usize {
        self.col_keys.len()
    }

    pub fn header_row_count(&self) -> usize {
        self.header_rows.len()
    }

    pub fn body_row_count(&self) -> usize {
        self.body.len()
    }

    pub fn body_cell(&self, row: usize, col: usize) -> Option<&str> {
        self.body.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// All vertical merge runs, as (col, start_row, end_row) triples.
    pub fn merge_runs(&self) -> Vec<(usize, usize, usize)> {
        self.paints
            .iter()
            .filter_map(|paint| match paint {
                Paint::MergeRows {
                    col,
                    start_row,
                    end_row,
                } => Some((*col, *start_row, *end_row)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_bounds() {
        let region = CellRegion::body_rows(2, 3, 4);
        assert!(region.contains(TablePart::Body, 2, 0));
        assert!(region.contains(TablePart::Body, 3, 3));
        assert!(!region.contains(TablePart::Body, 4, 0));
        assert!(!region.contains(TablePart::Header, 2, 0));
        assert_eq!(region.row_count(), 2);
        assert_eq!(region.col_count(), 4);
    }

    #[test]
    fn test_header_row_geometry() {
        let row = HeaderRow::new(vec![
            HeaderCell::blank(2),
            HeaderCell::new("treatment", 2, TextAlign::Center),
        ]);
        assert_eq!(row.span_width(), 4);
        assert_eq!(row.col_offset(0), 0);
        assert_eq!(row.col_offset(1), 2);
        assert!(row.cells[0].is_blank());
        assert!(!row.cells[1].is_blank());
    }

    #[test]
    fn test_merge_run_extraction() {
        let table = StyledTable {
            paints: vec![
                Paint::ColumnWidth { width: 100 },
                Paint::MergeRows {
                    col: 0,
                    start_row: 0,
                    end_row: 1,
                },
            ],
            ..StyledTable::default()
        };
        assert_eq!(table.merge_runs(), vec![(0, 0, 1)]);
    }
}
