//! Error types for sheet normalization.

use thiserror::Error;

/// Conditions raised while recovering and reshaping tables.
///
/// A sheet without a table is skipped by the aggregator; only an entirely
/// empty workbook fails the file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// No row qualified as a header row.
    #[error("no table found in sheet '{sheet}'")]
    NoTableFound { sheet: String },

    /// None of the sheets produced a single row.
    #[error("workbook produced no rows ({sheets} sheets scanned, {skipped} without a table)")]
    EmptyResult { sheets: usize, skipped: usize },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
