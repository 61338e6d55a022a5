//! Reader dispatch by file type.

use std::path::Path;

use unifier_model::{Sheet, Table};

use crate::delimited::read_delimited;
use crate::detect::FileType;
use crate::error::{IngestError, Result};
use crate::workbook::read_workbook;

/// Content of an input file as handed to normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceData {
    /// Already tabular; the first record was the header.
    Flat(Table),
    /// Raw sheets that still need table recovery.
    Sheets(Vec<Sheet>),
}

/// Reads `path` with the reader for `file_type`.
pub fn read_source(path: &Path, file_type: FileType) -> Result<SourceData> {
    match file_type {
        FileType::Csv => read_delimited(path).map(SourceData::Flat),
        FileType::Excel => read_workbook(path).map(SourceData::Sheets),
        FileType::PdfTable => Err(IngestError::NoReader {
            file_type: file_type.as_str(),
            path: path.to_path_buf(),
        }),
    }
}
