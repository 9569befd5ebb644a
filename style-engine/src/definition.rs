//! FILENAME: style-engine/src/definition.rs
//! Presentation Definition - The serializable styling configuration.
//!
//! This module contains all the types needed to DESCRIBE how a styled
//! table should look. These structures are designed to be:
//! - Serializable (for saving/loading presentation presets)
//! - Sent across a process or IPC boundary
//! - Immutable snapshots of user intent
//!
//! Nothing here performs any work; the engine reads these and emits
//! paint directives accordingly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use frame::Color;

use crate::error::LayoutError;
use crate::table::StatKey;

// ============================================================================
// LABELS
// ============================================================================

/// Display labels substituted for internal names during layout.
///
/// `rows` and `cols` are positional: entry `i` relabels the `i`-th
/// row-grouping column or column-grouping variable. When absent, the
/// internal names show through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    /// Header label for the stats marker column.
    pub stats: String,
    /// Display label for the weighted count stat.
    pub n: String,
    /// Display label for the total percentage stat.
    pub p: String,
    /// Display label for the column percentage stat.
    pub p_col: String,
    /// Display label for the row percentage stat.
    pub p_row: String,
    /// Positional labels for the row-grouping columns.
    pub rows: Option<Vec<String>>,
    /// Positional labels for the column-grouping variables.
    pub cols: Option<Vec<String>>,
}

impl Labels {
    /// The display label for a stat key.
    pub fn stat_label(&self, key: StatKey) -> &str {
        match key {
            StatKey::N => &self.n,
            StatKey::P => &self.p,
            StatKey::PCol => &self.p_col,
            StatKey::PRow => &self.p_row,
        }
    }

    /// The label for the `index`-th column-grouping variable, falling
    /// back to the variable's own name.
    pub fn col_label<'a>(&'a self, index: usize, name: &'a str) -> &'a str {
        self.cols
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
            .unwrap_or(name)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            stats: "Statistic".to_string(),
            n: "N".to_string(),
            p: "%".to_string(),
            p_col: "Col %".to_string(),
            p_row: "Row %".to_string(),
            rows: None,
            cols: None,
        }
    }
}

// ============================================================================
// ZEBRA BANDING
// ============================================================================

/// Alternating-row shading strategies for the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZebraStyle {
    /// No banding.
    None,
    /// Every other body row is shaded, starting unshaded.
    #[default]
    Classic,
    /// Rows are banded in blocks of one-per-statistic, so each block
    /// covers the stat rows of a single group. Falls back to `Classic`
    /// when the table has no column-grouping variable.
    Stats,
}

impl FromStr for ZebraStyle {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ZebraStyle::None),
            "classic" => Ok(ZebraStyle::Classic),
            "stats" => Ok(ZebraStyle::Stats),
            other => Err(LayoutError::InvalidInput(format!(
                "unknown zebra style `{}` (expected none, classic or stats)",
                other
            ))),
        }
    }
}

// ============================================================================
// STYLE OPTIONS
// ============================================================================

/// Visual options for a styled table.
///
/// All fields have working defaults; a `StyleOptions::default()` is a
/// complete, renderable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Fill for header cells and row-label cells.
    pub background: Color,
    /// Text color paired with `background`.
    pub foreground: Color,
    /// Grid border color. None disables the global border pass.
    pub border_color: Option<Color>,
    /// Font size in points, applied to the whole table.
    pub font_size: u8,
    /// Font family. None leaves the renderer's default.
    pub font_name: Option<String>,
    /// Body banding strategy.
    pub zebra: ZebraStyle,
    /// Fill for shaded zebra rows.
    pub zebra_color: Color,
    /// Exclude the stats marker column from the display columns.
    pub drop_stats: bool,
    /// Attach the formatted working table to the output.
    pub keep_source: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            background: Color::new(70, 130, 180),
            foreground: Color::white(),
            border_color: Some(Color::new(217, 217, 217)),
            font_size: 11,
            font_name: None,
            zebra: ZebraStyle::Classic,
            zebra_color: Color::new(239, 239, 239),
            drop_stats: false,
            keep_source: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = Labels::default();
        assert_eq!(labels.stat_label(StatKey::N), "N");
        assert_eq!(labels.stat_label(StatKey::P), "%");
        assert_eq!(labels.stat_label(StatKey::PCol), "Col %");
        assert_eq!(labels.stat_label(StatKey::PRow), "Row %");
        assert_eq!(labels.stats, "Statistic");
    }

    #[test]
    fn test_col_label_fallback() {
        let mut labels = Labels::default();
        assert_eq!(labels.col_label(0, "treatment"), "treatment");

        labels.cols = Some(vec!["Treatment arm".to_string()]);
        assert_eq!(labels.col_label(0, "treatment"), "Treatment arm");
        assert_eq!(labels.col_label(1, "dose"), "dose");
    }

    #[test]
    fn test_zebra_from_str() {
        assert_eq!("none".parse::<ZebraStyle>().ok(), Some(ZebraStyle::None));
        assert_eq!(
            "classic".parse::<ZebraStyle>().ok(),
            Some(ZebraStyle::Classic)
        );
        assert_eq!("stats".parse::<ZebraStyle>().ok(), Some(ZebraStyle::Stats));
        assert!("Stats".parse::<ZebraStyle>().is_err());
        assert!("banded".parse::<ZebraStyle>().is_err());
    }

    #[test]
    fn test_default_options_are_complete() {
        let options = StyleOptions::default();
        assert_eq!(options.background, Color::new(70, 130, 180));
        assert_eq!(options.foreground, Color::white());
        assert_eq!(options.border_color, Some(Color::new(217, 217, 217)));
        assert_eq!(options.font_size, 11);
        assert_eq!(options.zebra, ZebraStyle::Classic);
        assert!(!options.drop_stats);
        assert!(!options.keep_source);
    }
}
