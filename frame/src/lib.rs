//! FILENAME: frame/src/lib.rs
//! PURPOSE: Main library entry point for the shared table model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod frame;
pub mod number_format;
pub mod style;
pub mod value;

// Re-export commonly used types at the crate root
pub use frame::{Column, Frame};
pub use number_format::{format_count, format_decimal, format_general, format_percent};
pub use style::{BorderLineStyle, BorderStyle, Color, TextAlign};
pub use value::Datum;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_values() {
        let value = Datum::from(42.0);
        assert_eq!(value, Datum::Number(42.0));
        assert_eq!(value.display(), "42");
    }

    #[test]
    fn it_manages_frames() {
        let mut frame = Frame::new();
        frame.push(Column::new("stats", vec!["n".into(), "p".into()]));
        frame.push(Column::new("A", vec![12.0.into(), 42.345.into()]));

        assert_eq!(frame.row_count(), 2);
        assert!(frame.is_rectangular());

        let retrieved = frame.cell(1, "A");
        assert!(retrieved.is_some());
        if let Some(d) = retrieved {
            assert_eq!(d.as_f64(), Some(42.345));
        }
    }

    #[test]
    fn integration_test_coerce_and_format() {
        let mut frame = Frame::from_columns(vec![Column::new(
            "p",
            vec![42.345.into(), 57.7.into()],
        )]);

        if let Some(column) = frame.column_mut("p") {
            column.coerce_text();
            for row in 0..column.len() {
                if let Some(value) = column.get(row).and_then(|d| d.as_f64()) {
                    column.set(row, Datum::text(format_percent(value, 1)));
                }
            }
        }

        assert_eq!(
            frame.column("p").map(|c| c.display_values()),
            Some(vec!["42.3%".to_string(), "57.7%".to_string()])
        );
    }
}
