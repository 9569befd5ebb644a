//! FILENAME: tests/common/mod.rs
//! Shared fixtures and helpers for style-engine integration tests.

use frame::{Column, Frame};
use style_engine::{Paint, PivotMeta, PivotTable, StyledTable, TablePart};

/// A sex-by-treatment crosstab spread over one grouping variable.
/// Two groups (M, F), two stats per group (n, p), two value columns.
pub fn crosstab() -> PivotTable {
    let frame = Frame::from_columns(vec![
        Column::new(
            "sex",
            vec!["M".into(), "M".into(), "F".into(), "F".into()],
        ),
        Column::new(
            "stats",
            vec!["n".into(), "p".into(), "n".into(), "p".into()],
        ),
        Column::new(
            "A",
            vec![12.0.into(), 42.345.into(), 9.0.into(), 33.2.into()],
        ),
        Column::new(
            "B",
            vec![30.0.into(), 57.7.into(), 14.0.into(), 66.8.into()],
        ),
    ]);
    let meta = PivotMeta::wide(
        vec!["sex".to_string()],
        "treatment",
        vec!["A".to_string(), "B".to_string()],
        "stats",
    );
    PivotTable::new(frame, meta)
}

/// A crosstab like `crosstab`, with one (n, p) row pair per level.
pub fn crosstab_with_levels(levels: &[&str]) -> PivotTable {
    let mut sex = Vec::new();
    let mut stats = Vec::new();
    let mut a = Vec::new();
    let mut b = Vec::new();
    for (i, level) in levels.iter().enumerate() {
        sex.push((*level).into());
        sex.push((*level).into());
        stats.push("n".into());
        stats.push("p".into());
        a.push((10.0 + i as f64).into());
        a.push((20.0 + i as f64).into());
        b.push((30.0 + i as f64).into());
        b.push((40.0 + i as f64).into());
    }
    let frame = Frame::from_columns(vec![
        Column::new("sex", sex),
        Column::new("stats", stats),
        Column::new("A", a),
        Column::new("B", b),
    ]);
    let meta = PivotMeta::wide(
        vec!["sex".to_string()],
        "treatment",
        vec!["A".to_string(), "B".to_string()],
        "stats",
    );
    PivotTable::new(frame, meta)
}

/// A long single-variable frequency table: stats live in their own
/// columns, no cross-tabulation.
pub fn flat_table() -> PivotTable {
    let frame = Frame::from_columns(vec![
        Column::new(
            "level",
            vec!["Low".into(), "Mid".into(), "High".into()],
        ),
        Column::new("n", vec![10.0.into(), 20.0.into(), 30.0.into()]),
        Column::new("p", vec![16.7.into(), 33.3.into(), 50.0.into()]),
        Column::new("p_row", vec![16.7.into(), 33.3.into(), 50.0.into()]),
    ]);
    PivotTable::new(frame, PivotMeta::long(vec!["level".to_string()]))
}

/// Full-width body Background directives, as (start_row, end_row) bands.
/// Zebra shading is the only source of these in the fixtures here.
pub fn body_bands(table: &StyledTable) -> Vec<(usize, usize)> {
    let last_col = table.column_count().saturating_sub(1);
    table
        .paints
        .iter()
        .filter_map(|paint| match paint {
            Paint::Background { region, .. }
                if region.part == TablePart::Body
                    && region.start_col == 0
                    && region.end_col == last_col =>
            {
                Some((region.start_row, region.end_row))
            }
            _ => None,
        })
        .collect()
}

/// Body rows that carry a group-separator rule along their top edge.
pub fn separator_rows(table: &StyledTable) -> Vec<usize> {
    table
        .paints
        .iter()
        .filter_map(|paint| match paint {
            Paint::TopBorder { region, .. } if region.part == TablePart::Body => {
                Some(region.start_row)
            }
            _ => None,
        })
        .collect()
}
