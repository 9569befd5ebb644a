//! FILENAME: style-engine/src/engine.rs
//! Style Engine - The derivation core that turns a pivot table into a
//! renderable styled-table description.
//!
//! This module takes a PivotTable (data plus metadata), Labels,
//! a StatFormatter and StyleOptions, and produces a StyledTable.
//!
//! Algorithm:
//! 1. Validate the structural shape and select the header strategy
//! 2. Format stat values and apply display labels on the working copy
//! 3. Select the display columns
//! 4. Build header rows and body display strings
//! 5. Accumulate paint directives: zebra bands, row-label styling,
//!    header paint, the global pass, then group separators

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use frame::{BorderStyle, Color, Column, Datum, TextAlign};

use crate::definition::{Labels, StyleOptions, ZebraStyle};
use crate::error::LayoutError;
use crate::format::StatFormatter;
use crate::table::{PivotTable, StatKey};
use crate::view::{CellRegion, HeaderCell, HeaderRow, Paint, StyledTable, TablePart};

/// Uniform inner cell padding, in pixels.
const CELL_PADDING: u8 = 3;

/// Uniform column width hint, in pixels.
const COLUMN_WIDTH_HINT: u16 = 100;

/// Rule color for group separators when no border color is configured.
const SEPARATOR_RULE_COLOR: Color = Color::new(120, 120, 120);

// ============================================================================
// HEADER SHAPE
// ============================================================================

/// How the header region is laid out. Selected once during validation;
/// every later styling step dispatches on it instead of re-testing the
/// metadata.
#[derive(Debug, Clone, PartialEq)]
enum HeaderShape {
    /// No column-grouping variable: a single header row.
    Flat,
    /// Exactly one column-grouping variable: a two-row header with the
    /// variable label merged over its generated value columns.
    Grouped { variable: String },
    /// More than one column-grouping variable: flat styling fallback.
    Degraded,
}

// ============================================================================
// STYLE CALCULATOR
// ============================================================================

/// The main derivation engine for styled tables.
pub struct StyleCalculator<'a> {
    labels: &'a Labels,
    formatter: &'a StatFormatter,
    options: &'a StyleOptions,

    /// The working copy, formatted and relabeled in place.
    table: PivotTable,

    /// Header strategy, selected during validation.
    shape: HeaderShape,

    /// Current name of the stats marker column, tracked across relabeling.
    /// None for long tables.
    stat_column: Option<String>,
}

impl<'a> StyleCalculator<'a> {
    /// Creates a new calculator instance. The table is taken by value and
    /// becomes the working copy; the caller's original is untouched.
    pub fn new(
        table: PivotTable,
        labels: &'a Labels,
        formatter: &'a StatFormatter,
        options: &'a StyleOptions,
    ) -> Self {
        StyleCalculator {
            labels,
            formatter,
            options,
            table,
            shape: HeaderShape::Flat,
            stat_column: None,
        }
    }

    /// Executes the full derivation and returns the styled table.
    pub fn calculate(mut self) -> Result<StyledTable, LayoutError> {
        // Step 1: Structural validation; nothing is mutated before it passes
        self.shape = self.validate()?;

        // Step 2: Format stat values and apply display labels in place
        self.format_stats()?;

        // Step 3: Select the display columns
        let col_keys = self.select_col_keys();

        // Step 4: Build header rows and body display strings
        let header_rows = self.build_headers(&col_keys);
        let body = self.build_body(&col_keys);

        log::debug!(
            "styling pivot: {} body rows, {} display columns, shape {:?}",
            body.len(),
            col_keys.len(),
            self.shape
        );

        // Step 5: Accumulate paint directives. The order is part of the
        // renderer contract: zebra bands, row-label styling, header paint,
        // the global pass, then group separators.
        let mut paints = Vec::new();
        self.paint_zebra(&mut paints, body.len(), col_keys.len());
        self.paint_row_labels(&mut paints, &body);
        self.paint_header(&mut paints, &header_rows, col_keys.len());
        self.paint_global(&mut paints, header_rows.len(), body.len(), col_keys.len());
        self.paint_separators(&mut paints, body.len(), col_keys.len());

        let source = if self.options.keep_source {
            Some(self.table)
        } else {
            None
        };

        Ok(StyledTable {
            col_keys,
            header_rows,
            body,
            paints,
            source,
        })
    }

    // ------------------------------------------------------------------
    // Step 1: validation and header strategy selection
    // ------------------------------------------------------------------

    fn validate(&mut self) -> Result<HeaderShape, LayoutError> {
        let frame = &self.table.frame;
        let meta = &self.table.meta;

        if frame.column_count() == 0 {
            return Err(LayoutError::InvalidInput("table has no columns".to_string()));
        }
        if !frame.is_rectangular() {
            return Err(LayoutError::InvalidInput(
                "columns have unequal lengths".to_string(),
            ));
        }
        for name in &meta.rows {
            if frame.column_index(name).is_none() {
                return Err(LayoutError::InvalidInput(format!(
                    "row-grouping column `{}` not found",
                    name
                )));
            }
        }
        if let Some(labels) = &self.labels.rows {
            if labels.len() != meta.rows.len() {
                return Err(LayoutError::InvalidInput(format!(
                    "{} row labels supplied for {} row-grouping columns",
                    labels.len(),
                    meta.rows.len()
                )));
            }
        }
        if let Some(labels) = &self.labels.cols {
            if labels.len() != meta.cols.len() {
                return Err(LayoutError::InvalidInput(format!(
                    "{} column labels supplied for {} column-grouping variables",
                    labels.len(),
                    meta.cols.len()
                )));
            }
        }

        if meta.is_long() {
            return Ok(HeaderShape::Flat);
        }

        let stat_column = match &meta.stat_column {
            Some(name) => name.clone(),
            None => {
                return Err(LayoutError::InvalidInput(
                    "stat column metadata missing for a wide table".to_string(),
                ))
            }
        };
        if frame.column_index(&stat_column).is_none() {
            return Err(LayoutError::InvalidInput(format!(
                "stat column `{}` not found",
                stat_column
            )));
        }
        self.stat_column = Some(stat_column);

        let variable = match self.table.meta.single_variable() {
            Some(variable) => variable.to_string(),
            None => {
                log::warn!(
                    "{} column-grouping variables present; styling falls back to the flat layout",
                    self.table.meta.cols.len()
                );
                return Ok(HeaderShape::Degraded);
            }
        };

        let values = self.table.meta.values_of(&variable);
        if values.is_empty() {
            return Err(LayoutError::InvalidInput(format!(
                "no value set recorded for column variable `{}`",
                variable
            )));
        }
        let mut indices: SmallVec<[usize; 8]> = SmallVec::new();
        for value in values {
            match self.table.frame.column_index(value) {
                Some(index) => indices.push(index),
                None => {
                    return Err(LayoutError::InvalidInput(format!(
                        "generated column `{}` for variable `{}` not found",
                        value, variable
                    )))
                }
            }
        }
        if indices.windows(2).any(|pair| pair[1] != pair[0] + 1) {
            return Err(LayoutError::InvalidInput(format!(
                "generated columns for variable `{}` are not contiguous",
                variable
            )));
        }

        Ok(HeaderShape::Grouped { variable })
    }

    // ------------------------------------------------------------------
    // Step 2: stat formatting and relabeling
    // ------------------------------------------------------------------

    fn format_stats(&mut self) -> Result<(), LayoutError> {
        match self.stat_column.clone() {
            Some(stat_column) => self.format_wide(&stat_column)?,
            None => self.format_flat()?,
        }
        self.apply_row_renames();
        Ok(())
    }

    /// Wide layout: value cells are formatted per the stat marker of
    /// their row, then the markers themselves become display labels and
    /// the stat column is renamed.
    fn format_wide(&mut self, stat_column: &str) -> Result<(), LayoutError> {
        let markers: Vec<Option<StatKey>> = match self.table.frame.column(stat_column) {
            Some(column) => column
                .values
                .iter()
                .map(|d| StatKey::parse(&d.display()))
                .collect(),
            None => return Ok(()),
        };

        let value_cols: Vec<String> = self
            .table
            .frame
            .columns()
            .iter()
            .map(|c| c.name.clone())
            .filter(|name| name != stat_column && !self.table.meta.rows.contains(name))
            .collect();

        for name in &value_cols {
            if let Some(column) = self.table.frame.column_mut(name) {
                column.coerce_text();
                for (row, marker) in markers.iter().enumerate() {
                    if let Some(key) = marker {
                        // Cells that do not reinterpret as numbers keep
                        // their coerced text.
                        if let Some(value) = column.get(row).and_then(|d| d.as_f64()) {
                            match (self.formatter.for_stat(*key))(value) {
                                Ok(text) => {
                                    column.set(row, Datum::text(text));
                                }
                                Err(reason) => {
                                    return Err(LayoutError::Format {
                                        stat: *key,
                                        value,
                                        reason,
                                    })
                                }
                            }
                        }
                    }
                }
            }
        }

        // Unrecognized markers are skipped, so relabeled input passes
        // through unchanged.
        if let Some(column) = self.table.frame.column_mut(stat_column) {
            for row in 0..column.len() {
                let marker = column
                    .get(row)
                    .map(Datum::display)
                    .and_then(|s| StatKey::parse(&s));
                if let Some(key) = marker {
                    let label = self.labels.stat_label(key);
                    column.set(row, Datum::text(label));
                }
            }
        }

        self.table.frame.rename_column(stat_column, &self.labels.stats);
        let renamed = self.labels.stats.clone();
        self.table.meta.stat_column = Some(renamed.clone());
        self.stat_column = Some(renamed);

        Ok(())
    }

    /// Long layout: stats live in their own columns. Only the literal
    /// `n` and `p` columns pass through the formatter; `p_col` and
    /// `p_row` keep their coerced text and are renamed like the rest.
    fn format_flat(&mut self) -> Result<(), LayoutError> {
        let value_cols: Vec<String> = self
            .table
            .frame
            .columns()
            .iter()
            .map(|c| c.name.clone())
            .filter(|name| !self.table.meta.rows.contains(name))
            .collect();

        for name in &value_cols {
            if let Some(column) = self.table.frame.column_mut(name) {
                column.coerce_text();
            }
        }

        for key in [StatKey::N, StatKey::P] {
            if let Some(column) = self.table.frame.column_mut(key.as_str()) {
                for row in 0..column.len() {
                    if let Some(value) = column.get(row).and_then(|d| d.as_f64()) {
                        match (self.formatter.for_stat(key))(value) {
                            Ok(text) => {
                                column.set(row, Datum::text(text));
                            }
                            Err(reason) => {
                                return Err(LayoutError::Format { stat: key, value, reason })
                            }
                        }
                    }
                }
            }
        }

        for key in StatKey::ALL {
            self.table
                .frame
                .rename_column(key.as_str(), self.labels.stat_label(key));
        }

        Ok(())
    }

    /// Positional renames of the row-grouping columns, mirrored into the
    /// metadata so the retained source stays coherent.
    fn apply_row_renames(&mut self) {
        let renames = match &self.labels.rows {
            Some(renames) => renames.clone(),
            None => return,
        };
        for (index, to) in renames.iter().enumerate() {
            let from = self.table.meta.rows[index].clone();
            self.table.frame.rename_column(&from, to);
            self.table.meta.rows[index] = to.clone();
        }
    }

    // ------------------------------------------------------------------
    // Steps 3 and 4: display columns, headers, body
    // ------------------------------------------------------------------

    fn select_col_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .table
            .frame
            .columns()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        if self.options.drop_stats {
            if let Some(stat) = &self.stat_column {
                keys.retain(|key| key != stat);
            }
        }
        keys
    }

    fn build_headers(&self, col_keys: &[String]) -> Vec<HeaderRow> {
        match &self.shape {
            HeaderShape::Grouped { variable } => {
                let value_set: FxHashSet<&str> = self
                    .table
                    .meta
                    .values_of(variable)
                    .iter()
                    .map(String::as_str)
                    .collect();
                let spanned: SmallVec<[usize; 8]> = col_keys
                    .iter()
                    .enumerate()
                    .filter(|(_, key)| value_set.contains(key.as_str()))
                    .map(|(index, _)| index)
                    .collect();

                let bottom = HeaderRow::new(
                    col_keys
                        .iter()
                        .map(|key| HeaderCell::new(key.clone(), 1, TextAlign::Right))
                        .collect(),
                );

                let mut cells: Vec<HeaderCell> = Vec::with_capacity(3);
                if spanned.is_empty() {
                    cells.push(HeaderCell::blank(col_keys.len() as u16));
                } else {
                    let first = spanned[0];
                    if first > 0 {
                        cells.push(HeaderCell::blank(first as u16));
                    }
                    cells.push(HeaderCell::new(
                        self.labels.col_label(0, variable),
                        spanned.len() as u16,
                        TextAlign::Center,
                    ));
                    let trailing = col_keys.len() - first - spanned.len();
                    if trailing > 0 {
                        cells.push(HeaderCell::blank(trailing as u16));
                    }
                }

                vec![HeaderRow::new(cells), bottom]
            }
            _ => {
                let cells = col_keys
                    .iter()
                    .map(|key| HeaderCell::new(key.clone(), 1, TextAlign::General))
                    .collect();
                vec![HeaderRow::new(cells)]
            }
        }
    }

    fn build_body(&self, col_keys: &[String]) -> Vec<Vec<String>> {
        let columns: Vec<&Column> = col_keys
            .iter()
            .filter_map(|key| self.table.frame.column(key))
            .collect();
        (0..self.table.frame.row_count())
            .map(|row| {
                columns
                    .iter()
                    .map(|column| column.get(row).map(Datum::display).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Step 5: paint passes
    // ------------------------------------------------------------------

    fn paint_zebra(&self, paints: &mut Vec<Paint>, body_rows: usize, col_count: usize) {
        if body_rows == 0 || col_count == 0 {
            return;
        }
        let mut style = self.options.zebra;
        if style == ZebraStyle::Stats && self.shape == HeaderShape::Flat {
            log::debug!("stats banding requested without a column-grouping variable; using classic");
            style = ZebraStyle::Classic;
        }
        match style {
            ZebraStyle::None => {}
            ZebraStyle::Classic => {
                let mut row = 1;
                while row < body_rows {
                    paints.push(Paint::Background {
                        region: CellRegion::body_row(row, col_count),
                        color: self.options.zebra_color,
                    });
                    row += 2;
                }
            }
            ZebraStyle::Stats => {
                let block = self.distinct_stat_labels();
                if block == 0 {
                    return;
                }
                let mut start = block;
                while start < body_rows {
                    let end = (start + block - 1).min(body_rows - 1);
                    paints.push(Paint::Background {
                        region: CellRegion::body_rows(start, end, col_count),
                        color: self.options.zebra_color,
                    });
                    start += block * 2;
                }
            }
        }
    }

    /// Number of distinct display values in the stats column.
    fn distinct_stat_labels(&self) -> usize {
        let name = match &self.stat_column {
            Some(name) => name,
            None => return 0,
        };
        match self.table.frame.column(name) {
            Some(column) => {
                let labels: FxHashSet<String> =
                    column.values.iter().map(Datum::display).collect();
                labels.len()
            }
            None => 0,
        }
    }

    /// Vertical merges plus emphasis paint over the row-label columns.
    fn paint_row_labels(&self, paints: &mut Vec<Paint>, body: &[Vec<String>]) {
        if body.is_empty() {
            return;
        }
        let label_cols = self.table.meta.rows.len().min(body[0].len());
        if label_cols == 0 {
            return;
        }

        for col in 0..label_cols {
            let mut run_start = 0;
            for row in 1..=body.len() {
                let extends = row < body.len() && body[row][col] == body[run_start][col];
                if !extends {
                    if row - run_start >= 2 {
                        paints.push(Paint::MergeRows {
                            col,
                            start_row: run_start,
                            end_row: row - 1,
                        });
                    }
                    run_start = row;
                }
            }
        }

        let region = CellRegion::new(TablePart::Body, 0, body.len() - 1, 0, label_cols - 1);
        paints.push(Paint::Background {
            region,
            color: self.options.background,
        });
        paints.push(Paint::Foreground {
            region,
            color: self.options.foreground,
        });
        paints.push(Paint::Bold { region });
    }

    /// Header emphasis. The grouped shape paints its bottom row fully
    /// and, in the top row, only the merged variable cell; blank filler
    /// cells stay unpainted.
    fn paint_header(&self, paints: &mut Vec<Paint>, header_rows: &[HeaderRow], col_count: usize) {
        if header_rows.is_empty() || col_count == 0 {
            return;
        }
        match &self.shape {
            HeaderShape::Grouped { .. } => {
                let bottom = CellRegion::header_row(header_rows.len() - 1, col_count);
                paints.push(Paint::Background {
                    region: bottom,
                    color: self.options.background,
                });
                paints.push(Paint::Foreground {
                    region: bottom,
                    color: self.options.foreground,
                });

                let top = &header_rows[0];
                for (index, cell) in top.cells.iter().enumerate() {
                    if cell.is_blank() {
                        continue;
                    }
                    let start = top.col_offset(index);
                    let end = start + cell.col_span as usize - 1;
                    let region = CellRegion::new(TablePart::Header, 0, 0, start, end);
                    paints.push(Paint::Background {
                        region,
                        color: self.options.background,
                    });
                    paints.push(Paint::Foreground {
                        region,
                        color: self.options.foreground,
                    });
                }
            }
            _ => {
                let region = CellRegion::header_all(header_rows.len(), col_count);
                paints.push(Paint::Background {
                    region,
                    color: self.options.background,
                });
                paints.push(Paint::Foreground {
                    region,
                    color: self.options.foreground,
                });
            }
        }
    }

    /// The global pass: header bold, font size, optional family, uniform
    /// padding, the column width hint, then the full-grid borders.
    fn paint_global(
        &self,
        paints: &mut Vec<Paint>,
        header_count: usize,
        body_rows: usize,
        col_count: usize,
    ) {
        if col_count == 0 {
            return;
        }
        let header = CellRegion::header_all(header_count, col_count);
        let body = if body_rows > 0 {
            Some(CellRegion::body_all(body_rows, col_count))
        } else {
            None
        };

        paints.push(Paint::Bold { region: header });
        paints.push(Paint::FontSize {
            region: header,
            size: self.options.font_size,
        });
        if let Some(body) = body {
            paints.push(Paint::FontSize {
                region: body,
                size: self.options.font_size,
            });
        }
        if let Some(family) = &self.options.font_name {
            paints.push(Paint::FontFamily {
                region: header,
                family: family.clone(),
            });
            if let Some(body) = body {
                paints.push(Paint::FontFamily {
                    region: body,
                    family: family.clone(),
                });
            }
        }
        paints.push(Paint::Padding {
            region: header,
            padding: CELL_PADDING,
        });
        if let Some(body) = body {
            paints.push(Paint::Padding {
                region: body,
                padding: CELL_PADDING,
            });
        }
        paints.push(Paint::ColumnWidth {
            width: COLUMN_WIDTH_HINT,
        });
        if let Some(color) = self.options.border_color {
            let border = BorderStyle::thin(color);
            paints.push(Paint::AllBorders {
                region: header,
                border,
            });
            if let Some(body) = body {
                paints.push(Paint::AllBorders { region: body, border });
            }
        }
    }

    /// Group separator rules above every row that starts a new stat
    /// block. Emitted last so the global border pass cannot override
    /// them.
    fn paint_separators(&self, paints: &mut Vec<Paint>, body_rows: usize, col_count: usize) {
        if self.shape == HeaderShape::Flat || body_rows == 0 || col_count == 0 {
            return;
        }
        let name = match &self.stat_column {
            Some(name) => name,
            None => return,
        };
        let column = match self.table.frame.column(name) {
            Some(column) => column,
            None => return,
        };
        let first = match column.get(0) {
            Some(datum) => datum.display(),
            None => return,
        };
        let color = self.options.border_color.unwrap_or(SEPARATOR_RULE_COLOR);
        let border = BorderStyle::medium(color);
        for row in 0..body_rows {
            if column.get(row).map(Datum::display).as_deref() == Some(first.as_str()) {
                paints.push(Paint::TopBorder {
                    region: CellRegion::body_row(row, col_count),
                    border,
                });
            }
        }
    }
}

/// Derives a styled table in one call. This is the main entry point.
pub fn style_pivot(
    table: PivotTable,
    labels: &Labels,
    formatter: &StatFormatter,
    options: &StyleOptions,
) -> Result<StyledTable, LayoutError> {
    let calculator = StyleCalculator::new(table, labels, formatter, options);
    calculator.calculate()
}
