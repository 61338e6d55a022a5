//! Normalization of loosely structured spreadsheets into long-format tables.
//!
//! The pipeline for one sheet is:
//!
//! 1. [`locate`]: find the header row, the data block below it and the
//!    `Customer` / `Period` / `Event` lines above it
//! 2. [`dedupe`]: make header names unique
//! 3. [`classify`]: assign identifier, location and total roles
//! 4. [`reshape`]: melt location columns into `(location, value)` records
//!
//! [`SheetAggregator`] runs the pipeline over every sheet of a workbook and
//! concatenates the results.

pub mod aggregate;
pub mod classify;
pub mod dedupe;
pub mod error;
pub mod locate;
pub mod reshape;

pub use aggregate::{Aggregated, SheetAggregator, SheetReport};
pub use classify::{
    Classification, ColumnClassifier, ROLE_RULES, RoleRule, classify_column, value_name_from_total,
};
pub use dedupe::{DedupedColumns, dedupe_columns, dedupe_header};
pub use error::{NormalizeError, Result};
pub use locate::{BlockLocator, TableBlock, extract_context, parse_context_line};
pub use reshape::{MIN_RESHAPE_COLUMNS, Reshape, reshape};
