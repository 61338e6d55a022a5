use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info_span;

use unifier_cli::processor::process_path;
use unifier_cli::types::{BatchResult, ProcessSettings};
use unifier_core::{BlockLocator, SheetAggregator};
use unifier_ingest::{SourceData, detect_file_type, read_source};
use unifier_model::{ColumnRole, NormalizeOptions};

use crate::cli::{InspectArgs, ProcessArgs};
use crate::summary::{apply_table_style, data_table};

fn load_options(path: Option<&Path>) -> Result<NormalizeOptions> {
    match path {
        Some(path) => NormalizeOptions::from_json_file(path).context("load options"),
        None => Ok(NormalizeOptions::default()),
    }
}

/// Options file first, then explicit flags on top.
pub fn build_settings(args: &ProcessArgs) -> Result<ProcessSettings> {
    let mut options = load_options(args.options.as_deref())?;
    if let Some(name) = &args.sheet_column {
        options = options.with_sheet_column(name.clone());
    }
    if let Some(name) = &args.locations_column {
        options = options.with_locations_column(name.clone());
    }
    if let Some(name) = &args.value_column {
        options = options.with_default_value_column(name.clone());
    }
    if args.keep_zero_values {
        options = options.with_drop_zero_values(false);
    }
    Ok(ProcessSettings {
        options,
        output_dir: Some(args.output_dir.clone()),
        dry_run: args.dry_run,
        preview_rows: args.sample_rows,
    })
}

pub fn run_process(args: &ProcessArgs) -> Result<BatchResult> {
    let settings = build_settings(args)?;
    process_path(&args.input, &settings)
        .with_context(|| format!("process {}", args.input.display()))
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let path = &args.file;
    let span = info_span!("inspect", file = %path.display());
    let _guard = span.enter();

    let options = load_options(args.options.as_deref())?;
    let Some(file_type) = detect_file_type(path) else {
        bail!("unsupported file type: {}", path.display());
    };
    let aggregator = SheetAggregator::new(options.clone());
    println!("File: {} ({file_type})", path.display());

    match read_source(path, file_type).with_context(|| format!("read {}", path.display()))? {
        SourceData::Flat(table) => {
            println!("\nTable: {} columns, {} rows", table.width(), table.height());
            println!("{}", roles_table(&aggregator, &table.columns));
        }
        SourceData::Sheets(sheets) => {
            let locator = BlockLocator::new(options.min_row_cells);
            for sheet in &sheets {
                println!("\nSheet: {}", sheet.name);
                let Some((block, context)) = locator.locate(&sheet.grid) else {
                    println!("  no table found");
                    continue;
                };
                println!(
                    "  header row {}, {} data rows",
                    block.header_row + 1,
                    block.rows.len()
                );
                for (label, value) in &context {
                    println!("  {label}: {value}");
                }
                println!("{}", roles_table(&aggregator, &block.columns));
                if !block.rows.is_empty() {
                    println!("{}", data_table(&block.into_table().head(3)));
                }
            }
        }
    }
    Ok(())
}

fn roles_table(aggregator: &SheetAggregator, columns: &[String]) -> Table {
    let classification = aggregator.classify(columns);
    let mut table = Table::new();
    table.set_header(vec!["Column", "Role"]);
    apply_table_style(&mut table);
    for (name, role) in &classification.roles {
        table.add_row(vec![name.clone(), role.to_string()]);
    }
    let value = match &classification.value_column {
        Some(name) => name.clone(),
        None => format!("none (no {} columns)", ColumnRole::Location),
    };
    table.add_row(vec!["=> value column".to_string(), value]);
    table
}
