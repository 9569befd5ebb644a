//! FILENAME: style-engine/src/error.rs
//! Error types for layout derivation.

use thiserror::Error;

use crate::table::StatKey;

/// Errors that can occur while deriving a styled table.
///
/// `InvalidInput` is raised by the structural checks that run before the
/// working table is touched; a failed derivation never leaves a partially
/// formatted result behind.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid pivot input: {0}")]
    InvalidInput(String),

    #[error("formatter for `{stat}` failed on value {value}: {reason}")]
    Format {
        stat: StatKey,
        value: f64,
        reason: String,
    },
}
