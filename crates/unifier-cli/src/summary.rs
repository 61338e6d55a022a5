use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use unifier_cli::types::{BatchResult, FileResult, FileStatus};
use unifier_model::Table as DataTable;

pub fn print_summary(batch: &BatchResult) {
    println!("Input: {}", batch.input.display());
    println!(
        "Processed {} files ({} successful)",
        batch.files.len(),
        batch.success_count()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Sheets"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for file in &batch.files {
        table.add_row(vec![
            Cell::new(&file.file_name),
            file.file_type.map_or_else(|| dim_cell("-"), Cell::new),
            status_cell(file.status),
            count_cell(file),
            sheets_cell(file),
            output_cell(file.output_path.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(batch.total_rows()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let failures: Vec<&FileResult> = batch.files.iter().filter(|f| !f.is_success()).collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for file in failures {
            eprintln!(
                "- {}: {}",
                file.file_name,
                file.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

/// Prints the first rows of every successful, non-empty result.
pub fn print_samples(batch: &BatchResult) {
    for file in batch.files.iter().filter(|f| f.is_success()) {
        let Some(preview) = file.preview.as_ref().filter(|p| !p.is_empty()) else {
            continue;
        };
        println!("\nSample data: {}", file.file_name);
        println!("{}", data_table(preview));
    }
}

/// Renders unified rows as a condensed table.
pub fn data_table(data: &DataTable) -> Table {
    let mut table = Table::new();
    table.set_header(data.columns.iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in &data.rows {
        table.add_row(row.iter().map(|cell| {
            if cell.is_empty() {
                dim_cell("")
            } else {
                Cell::new(cell)
            }
        }));
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: FileStatus) -> Cell {
    let color = match status {
        FileStatus::Success => Color::Green,
        FileStatus::Failed => Color::Red,
    };
    Cell::new(status.as_str().to_uppercase())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn count_cell(file: &FileResult) -> Cell {
    if file.is_success() {
        Cell::new(file.rows)
    } else {
        dim_cell("-")
    }
}

fn sheets_cell(file: &FileResult) -> Cell {
    if file.sheets.is_empty() {
        return dim_cell("-");
    }
    let used = file.sheets.iter().filter(|s| s.rows.is_some()).count();
    let label = format!("{used}/{}", file.sheets.len());
    if used < file.sheets.len() {
        Cell::new(label).fg(Color::Yellow)
    } else {
        Cell::new(label)
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
