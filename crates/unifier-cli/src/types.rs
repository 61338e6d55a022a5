use std::path::PathBuf;

use unifier_core::SheetReport;
use unifier_ingest::FileType;
use unifier_model::{NormalizeOptions, Table};

/// Number of output rows kept for the console sample.
pub const DEFAULT_PREVIEW_ROWS: usize = 3;

/// Settings for a batch run.
#[derive(Debug, Clone)]
pub struct ProcessSettings {
    pub options: NormalizeOptions,
    /// Directory receiving `<stem>.csv` per input; nothing is written when `None`.
    pub output_dir: Option<PathBuf>,
    /// Process and report without writing outputs.
    pub dry_run: bool,
    /// Rows of each unified table kept in [`FileResult::preview`].
    pub preview_rows: usize,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            options: NormalizeOptions::default(),
            output_dir: None,
            dry_run: false,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Success,
    Failed,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Outcome for a single input file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub file_name: String,
    pub file_type: Option<FileType>,
    pub status: FileStatus,
    pub rows: usize,
    pub output_path: Option<PathBuf>,
    pub error: Option<String>,
    /// Per-sheet outcome for workbooks; empty for flat files.
    pub sheets: Vec<SheetReport>,
    /// First rows of the unified table.
    pub preview: Option<Table>,
}

impl FileResult {
    pub fn failed(path: PathBuf, file_type: Option<FileType>, error: String) -> Self {
        Self {
            file_name: file_name(&path),
            path,
            file_type,
            status: FileStatus::Failed,
            rows: 0,
            output_path: None,
            error: Some(error),
            sheets: Vec::new(),
            preview: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Success
    }
}

/// Results of a batch, in processing order.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub input: PathBuf,
    pub files: Vec<FileResult>,
}

impl BatchResult {
    pub fn success_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|f| !f.is_success())
    }

    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|f| f.rows).sum()
    }
}

pub(crate) fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
