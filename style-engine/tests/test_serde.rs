//! FILENAME: tests/test_serde.rs
//! Round-trip tests for the serializable boundary types.

mod common;

use common::crosstab;
use style_engine::{
    style_pivot, Labels, PivotMeta, StatFormatter, StatKey, StyleOptions, StyledTable, ZebraStyle,
};

#[test]
fn test_stat_key_wire_names() {
    assert_eq!(serde_json::to_string(&StatKey::N).unwrap(), "\"n\"");
    assert_eq!(serde_json::to_string(&StatKey::PCol).unwrap(), "\"p_col\"");
    assert_eq!(
        serde_json::from_str::<StatKey>("\"p_row\"").unwrap(),
        StatKey::PRow
    );
}

#[test]
fn test_labels_roundtrip() {
    let labels = Labels {
        stats: "Measure".to_string(),
        rows: Some(vec!["Sex".to_string()]),
        ..Labels::default()
    };
    let json = serde_json::to_string(&labels).unwrap();
    let back: Labels = serde_json::from_str(&json).unwrap();
    assert_eq!(back, labels);
}

#[test]
fn test_options_roundtrip() {
    let options = StyleOptions {
        zebra: ZebraStyle::Stats,
        font_name: Some("Inter".to_string()),
        drop_stats: true,
        ..StyleOptions::default()
    };
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"stats\""));

    let back: StyleOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn test_meta_roundtrip() {
    let meta = PivotMeta::wide(
        vec!["sex".to_string()],
        "treatment",
        vec!["A".to_string(), "B".to_string()],
        "stats",
    );
    let json = serde_json::to_string(&meta).unwrap();
    let back: PivotMeta = serde_json::from_str(&json).unwrap();
    assert_eq!(back, meta);
}

#[test]
fn test_styled_table_roundtrip() {
    let labels = Labels::default();
    let formatter = StatFormatter::default();
    let options = StyleOptions {
        keep_source: true,
        ..StyleOptions::default()
    };
    let styled = style_pivot(crosstab(), &labels, &formatter, &options).unwrap();

    let json = serde_json::to_string(&styled).unwrap();
    let back: StyledTable = serde_json::from_str(&json).unwrap();

    assert_eq!(back, styled);
    assert_eq!(back.body_cell(1, 2), Some("42.3%"));
    assert!(back.source.is_some());
}
