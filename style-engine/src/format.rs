//! FILENAME: style-engine/src/format.rs
//! Stat Formatters - Per-statistic numeric display transforms.
//!
//! Formatting happens exactly once, on the engine's working copy, before
//! any layout decisions are made. Everything downstream deals in display
//! strings.

use frame::number_format;

use crate::table::StatKey;

/// A unary numeric-to-string transform for one statistic.
///
/// Returning `Err` aborts the derivation; the engine wraps the reason
/// together with the stat key and the offending value into a
/// `LayoutError::Format`.
pub type FormatFn = Box<dyn Fn(f64) -> Result<String, String> + Send + Sync>;

/// The per-stat transforms applied during stat formatting.
pub struct StatFormatter {
    pub n: FormatFn,
    pub p: FormatFn,
    pub p_col: FormatFn,
    pub p_row: FormatFn,
}

impl StatFormatter {
    /// The transform for a stat key.
    pub fn for_stat(&self, key: StatKey) -> &FormatFn {
        match key {
            StatKey::N => &self.n,
            StatKey::P => &self.p,
            StatKey::PCol => &self.p_col,
            StatKey::PRow => &self.p_row,
        }
    }
}

impl Default for StatFormatter {
    /// Counts get thousands separators; percentages get one decimal.
    /// Percentages arrive already on the 0..100 scale and are never
    /// rescaled here.
    fn default() -> Self {
        StatFormatter {
            n: Box::new(|v| Ok(number_format::format_count(v))),
            p: Box::new(|v| Ok(number_format::format_percent(v, 1))),
            p_col: Box::new(|v| Ok(number_format::format_percent(v, 1))),
            p_row: Box::new(|v| Ok(number_format::format_percent(v, 1))),
        }
    }
}

impl std::fmt::Debug for StatFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatFormatter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transforms() {
        let formatter = StatFormatter::default();
        assert_eq!(formatter.for_stat(StatKey::N)(1234.0), Ok("1,234".to_string()));
        assert_eq!(formatter.for_stat(StatKey::P)(42.345), Ok("42.3%".to_string()));
        assert_eq!(formatter.for_stat(StatKey::PCol)(0.5), Ok("0.5%".to_string()));
        assert_eq!(formatter.for_stat(StatKey::PRow)(100.0), Ok("100.0%".to_string()));
    }

    #[test]
    fn test_custom_transform_can_fail() {
        let formatter = StatFormatter {
            p: Box::new(|v| {
                if (0.0..=100.0).contains(&v) {
                    Ok(number_format::format_percent(v, 1))
                } else {
                    Err("out of range".to_string())
                }
            }),
            ..StatFormatter::default()
        };
        assert!(formatter.for_stat(StatKey::P)(150.0).is_err());
        assert_eq!(formatter.for_stat(StatKey::P)(50.0), Ok("50.0%".to_string()));
    }
}
