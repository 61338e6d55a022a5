//! Batch processing of input files.
//!
//! Each file is detected, read, normalized and optionally written on its own;
//! a failure is recorded in that file's [`FileResult`] and never stops the
//! batch.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use unifier_core::{SheetAggregator, SheetReport};
use unifier_ingest::{FileType, SourceData, collect_inputs, detect_file_type, read_source};
use unifier_model::Table;
use unifier_output::{output_path_for, write_csv};

use crate::types::{BatchResult, FileResult, FileStatus, ProcessSettings, file_name};

/// Reads and normalizes one file of a known type.
pub fn normalize_file(
    path: &Path,
    file_type: FileType,
    aggregator: &SheetAggregator,
) -> Result<(Table, Vec<SheetReport>)> {
    let data = read_source(path, file_type).with_context(|| format!("read {}", path.display()))?;
    match data {
        SourceData::Flat(table) => {
            let source = file_name(path);
            let table = aggregator.normalize_flat(table, &source).into_table();
            Ok((table, Vec::new()))
        }
        SourceData::Sheets(sheets) => {
            let aggregated = aggregator
                .aggregate(&sheets)
                .with_context(|| format!("normalize {}", path.display()))?;
            Ok((aggregated.table, aggregated.sheets))
        }
    }
}

/// Processes a single file. Never fails; errors are captured in the result.
pub fn process_file(path: &Path, settings: &ProcessSettings) -> FileResult {
    let name = file_name(path);
    let span = info_span!("process_file", file = %name);
    let _guard = span.enter();
    let start = Instant::now();

    let Some(file_type) = detect_file_type(path) else {
        let message = format!("unsupported file type: {name}");
        error!(file = %name, "{message}");
        return FileResult::failed(path.to_path_buf(), None, message);
    };
    info!(file = %name, %file_type, "processing file");

    match run_file(path, file_type, settings) {
        Ok(result) => {
            info!(
                file = %name,
                rows = result.rows,
                duration_ms = start.elapsed().as_millis(),
                "processed file"
            );
            result
        }
        Err(err) => {
            let message = format!("{err:#}");
            error!(file = %name, error = %message, "failed to process file");
            FileResult::failed(path.to_path_buf(), Some(file_type), message)
        }
    }
}

fn run_file(path: &Path, file_type: FileType, settings: &ProcessSettings) -> Result<FileResult> {
    let aggregator = SheetAggregator::new(settings.options.clone());
    let (table, sheets) = normalize_file(path, file_type, &aggregator)?;

    let output_path = match &settings.output_dir {
        Some(dir) if !settings.dry_run => {
            let output_path = output_path_for(dir, path);
            write_csv(&table, &output_path)
                .with_context(|| format!("write {}", output_path.display()))?;
            Some(output_path)
        }
        _ => None,
    };

    Ok(FileResult {
        path: path.to_path_buf(),
        file_name: file_name(path),
        file_type: Some(file_type),
        status: FileStatus::Success,
        rows: table.height(),
        output_path,
        error: None,
        sheets,
        preview: Some(table.head(settings.preview_rows)),
    })
}

/// Processes a file, or every file of a directory in name order.
///
/// Fails only when `input` does not exist or cannot be listed.
pub fn process_path(input: &Path, settings: &ProcessSettings) -> Result<BatchResult> {
    let span = info_span!("batch", input = %input.display());
    let _guard = span.enter();

    let inputs = collect_inputs(input).context("collect input files")?;
    info!(files = inputs.len(), dry_run = settings.dry_run, "starting batch");

    let files: Vec<FileResult> = inputs
        .iter()
        .map(|path| process_file(path, settings))
        .collect();

    let batch = BatchResult {
        input: input.to_path_buf(),
        files,
    };
    info!(
        files = batch.files.len(),
        succeeded = batch.success_count(),
        rows = batch.total_rows(),
        "batch complete"
    );
    Ok(batch)
}
