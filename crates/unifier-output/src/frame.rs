//! Table to DataFrame conversion.

use polars::prelude::{Column, DataFrame};
use unifier_model::{CellValue, Table};

use crate::error::Result;

fn is_numeric_column(table: &Table, idx: usize) -> bool {
    table
        .rows
        .iter()
        .map(|row| &row[idx])
        .filter(|cell| !cell.is_empty())
        .all(|cell| matches!(cell, CellValue::Number(_)))
}

fn numeric_column(name: &str, table: &Table, idx: usize) -> Column {
    let values: Vec<Option<f64>> = table
        .rows
        .iter()
        .map(|row| row[idx].as_number().filter(|v| !v.is_nan()))
        .collect();
    Column::new(name.into(), values)
}

fn text_column(name: &str, table: &Table, idx: usize) -> Column {
    let rendered: Vec<Option<String>> = table
        .rows
        .iter()
        .map(|row| {
            let cell = &row[idx];
            (!cell.is_missing()).then(|| cell.to_string())
        })
        .collect();
    let values: Vec<Option<&str>> = rendered.iter().map(Option::as_deref).collect();
    Column::new(name.into(), values)
}

/// Builds a DataFrame with one column per table column.
///
/// Columns whose non-empty cells are all numbers become `Float64`; every other
/// column is `String`. Empty cells are null.
pub fn table_to_dataframe(table: &Table) -> Result<DataFrame> {
    let columns: Vec<Column> = table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if is_numeric_column(table, idx) && !table.rows.is_empty() {
                numeric_column(name, table, idx)
            } else {
                text_column(name, table, idx)
            }
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}
