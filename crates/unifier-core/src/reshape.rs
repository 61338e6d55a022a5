//! Wide-to-long reshaping.
//!
//! Each source row is expanded into one record per location column, in
//! left-to-right column order, before moving to the next row. The sheet tag
//! travels with the row that produced the record, so dropping empty or zero
//! values never shifts tags onto other rows.

use tracing::debug;
use unifier_model::{CellValue, ColumnRole, NormalizeOptions, Table};

use crate::classify::Classification;
use crate::dedupe::dedupe_columns;

/// Tables narrower than this are never melted.
pub const MIN_RESHAPE_COLUMNS: usize = 3;

/// Outcome of a reshape attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Reshape {
    /// The table was melted into long records.
    Melted(Table),
    /// No location column (or too few columns); the input is returned unchanged.
    PassThrough(Table),
}

impl Reshape {
    pub fn into_table(self) -> Table {
        match self {
            Self::Melted(table) | Self::PassThrough(table) => table,
        }
    }

    pub fn is_melted(&self) -> bool {
        matches!(self, Self::Melted(_))
    }
}

/// Melts the location columns of `table` into `(location, value)` records.
///
/// Identifier columns are copied onto every record and total columns are
/// dropped. Records with a missing value are always dropped; zero values are
/// dropped when `options.drop_zero_values` is set.
pub fn reshape(table: Table, classification: &Classification, options: &NormalizeOptions) -> Reshape {
    if table.width() < MIN_RESHAPE_COLUMNS {
        return Reshape::PassThrough(table);
    }
    let Some(value_column) = classification.value_column.as_deref() else {
        return Reshape::PassThrough(table);
    };

    let mut identifiers = Vec::new();
    let mut locations = Vec::new();
    for (idx, name) in table.columns.iter().enumerate() {
        if *name == options.sheet_column {
            continue;
        }
        match classification.role_of(name).unwrap_or(ColumnRole::Identifier) {
            ColumnRole::Identifier => identifiers.push(idx),
            ColumnRole::Location => locations.push(idx),
            ColumnRole::Total => {}
        }
    }
    if locations.is_empty() {
        return Reshape::PassThrough(table);
    }

    let sheet_idx = table.column_index(&options.sheet_column);
    let mut header: Vec<String> = identifiers
        .iter()
        .map(|&idx| table.columns[idx].clone())
        .collect();
    header.push(options.locations_column.clone());
    header.push(value_column.to_string());
    if sheet_idx.is_some() {
        header.push(options.sheet_column.clone());
    }
    let deduped = dedupe_columns(&header);
    if !deduped.duplicates.is_empty() {
        debug!(duplicates = ?deduped.duplicates, "renamed colliding output columns");
    }

    let input_rows = table.height();
    let mut output = Table::new(deduped.columns);
    for row in &table.rows {
        for &loc in &locations {
            let value = &row[loc];
            if value.is_missing() || (options.drop_zero_values && value.is_zero()) {
                continue;
            }
            let mut record: Vec<CellValue> = identifiers.iter().map(|&idx| row[idx].clone()).collect();
            record.push(CellValue::text(table.columns[loc].clone()));
            record.push(value.clone());
            if let Some(sheet_idx) = sheet_idx {
                record.push(row[sheet_idx].clone());
            }
            output.push_row(record);
        }
    }

    debug!(
        input_rows,
        locations = locations.len(),
        output_rows = output.height(),
        value_column,
        "melted wide table"
    );
    Reshape::Melted(output)
}
