//! Delimited (CSV) file reading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;
use unifier_model::{CellValue, Table};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str, idx: usize) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        format!("Unnamed: {idx}")
    } else {
        trimmed.to_string()
    }
}

/// Types a raw field: blank is empty, a finite number is numeric, else text.
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::text(trimmed),
    }
}

/// Reads a delimited file whose first record is the header.
///
/// Rows are padded or truncated to the header width and fully blank records
/// are skipped.
pub fn read_delimited(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut records = reader.records();
    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|e| csv_error(path, e))?;
                if record.iter().any(|field| !field.trim().is_empty()) {
                    break record;
                }
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: path.to_path_buf(),
                });
            }
        }
    };
    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, raw)| normalize_header(raw, idx))
        .collect();

    let mut table = Table::new(columns);
    let mut skipped = 0usize;
    for record in records {
        let record = record.map_err(|e| csv_error(path, e))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        table.push_row(record.iter().map(parse_cell).collect());
    }

    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        blank_rows = skipped,
        "read delimited file"
    );
    Ok(table)
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    match err.kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    }
}
