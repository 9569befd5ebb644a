//! FILENAME: frame/src/number_format.rs
//! PURPOSE: Number formatting utilities for displaying cell values.
//! CONTEXT: This module handles the conversion of raw numeric values to
//! formatted display strings. Aggregation pipelines feed these helpers
//! through per-statistic formatter tables.

/// Format a number in general format (auto-detect best representation).
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_value = value.abs();

    // Use scientific notation for very large or very small numbers
    if abs_value >= 1e10 || (abs_value < 1e-4 && abs_value > 0.0) {
        return format!("{:.5e}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    // For integers, don't show decimal point
    if value.fract() == 0.0 && abs_value < 1e15 {
        return format!("{:.0}", value);
    }

    // For decimals, show up to 10 significant digits but trim trailing zeros
    let formatted = format!("{:.10}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a number with specified decimal places and optional thousands separator.
pub fn format_decimal(value: f64, decimal_places: u8, use_thousands_separator: bool) -> String {
    let rounded = format!("{:.prec$}", value, prec = decimal_places as usize);

    if use_thousands_separator {
        add_thousands_separator(&rounded)
    } else {
        rounded
    }
}

/// Format a count: no decimals, thousands separators.
pub fn format_count(value: f64) -> String {
    format_decimal(value, 0, true)
}

/// Format a percentage that is already on the 0..100 scale.
/// The value is rounded, never rescaled.
pub fn format_percent(value: f64, decimal_places: u8) -> String {
    format!("{:.prec$}%", value, prec = decimal_places as usize)
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_format() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(42.0), "42");
        assert_eq!(format_general(42.345), "42.345");
        assert_eq!(format_general(-3.14), "-3.14");
    }

    #[test]
    fn test_decimal_format() {
        assert_eq!(format_decimal(1234.5, 2, false), "1234.50");
        assert_eq!(format_decimal(1234.5, 2, true), "1,234.50");
        assert_eq!(format_decimal(-1234567.0, 0, true), "-1,234,567");
    }

    #[test]
    fn test_count_format() {
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(1234.0), "1,234");
        assert_eq!(format_count(1234.6), "1,235");
    }

    #[test]
    fn test_percent_is_not_rescaled() {
        assert_eq!(format_percent(42.345, 1), "42.3%");
        assert_eq!(format_percent(100.0, 1), "100.0%");
        assert_eq!(format_percent(0.5, 1), "0.5%");
        assert_eq!(format_percent(66.66, 0), "67%");
    }
}
