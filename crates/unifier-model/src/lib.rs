//! Shared data model for the tabular unifier.
//!
//! - [`CellValue`] / [`RawGrid`] / [`Sheet`]: cells as delivered by the readers
//! - [`Table`]: named columns with length-normalized rows
//! - [`ColumnRole`] / [`ContextLabel`]: classification and sheet context
//! - [`NormalizeOptions`]: column names and thresholds used by the pipeline

pub mod cell;
pub mod error;
pub mod options;
pub mod role;
pub mod table;

pub use cell::{CellValue, RawGrid, Sheet, format_numeric};
pub use error::{ModelError, Result};
pub use options::NormalizeOptions;
pub use role::{ColumnRole, ContextLabel, ContextMap};
pub use table::Table;
