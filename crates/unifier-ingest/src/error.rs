//! Error types for input discovery and reading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Neither the content nor the extension identify a supported format.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType { path: PathBuf },

    /// Detected format without a reader.
    #[error("no reader for {file_type} files: {path}")]
    NoReader {
        file_type: &'static str,
        path: PathBuf,
    },

    // === Parsing Errors ===
    /// Failed to parse a delimited file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Delimited file has no header record.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Workbook could not be opened.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no sheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },
}

impl IngestError {
    /// Maps an I/O error on `path`, keeping "not found" distinct.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
