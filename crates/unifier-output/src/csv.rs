//! Delimited output.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;
use unifier_model::Table;

use crate::error::{OutputError, Result};
use crate::frame::table_to_dataframe;

/// Output path for a processed input: `<output_dir>/<stem>.csv`.
pub fn output_path_for(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    output_dir.join(format!("{stem}.csv"))
}

/// Writes `table` as CSV with a header row, creating parent directories.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut df = table_to_dataframe(table)?;
    let file = File::create(path).map_err(|e| OutputError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(file).include_header(true).finish(&mut df)?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote output"
    );
    Ok(())
}
