//! FILENAME: style-engine/src/lib.rs
//! Styled-table layout subsystem.
//!
//! This crate turns a pre-aggregated pivot table plus its side-channel
//! metadata into a fully specified styled-table description for an
//! external cell-grid renderer. It depends on `frame` only for shared
//! types (Datum, Frame, Color, BorderStyle).
//!
//! Layers:
//! - `table`: Serializable input (what arrived from aggregation)
//! - `definition`: Serializable configuration (what the caller wants)
//! - `format`: Per-stat display transforms (how values print)
//! - `view`: Renderable output for the frontend (what we display)
//! - `engine`: Derivation engine (how the description is computed)
//! - `error`: The failure taxonomy

pub mod table;
pub mod definition;
pub mod format;
pub mod view;
pub mod engine;
pub mod error;

pub use table::*;
pub use definition::*;
pub use format::*;
pub use view::*;
pub use error::LayoutError;
pub use engine::{style_pivot, StyleCalculator};
