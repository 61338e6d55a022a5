//! Workbook-level normalization.
//!
//! Each sheet is processed independently: locate the table block, attach the
//! preamble context and the sheet tag, deduplicate the header, classify the
//! columns and reshape. Results are concatenated in sheet order.

use tracing::{debug, info, info_span, warn};
use unifier_model::{CellValue, NormalizeOptions, Sheet, Table};

use crate::classify::{Classification, ColumnClassifier};
use crate::dedupe::dedupe_header;
use crate::error::{NormalizeError, Result};
use crate::locate::BlockLocator;
use crate::reshape::{Reshape, reshape};

/// Per-sheet outcome, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub sheet: String,
    /// `None` when the sheet had no table.
    pub rows: Option<usize>,
    pub melted: bool,
}

/// Rows from every usable sheet plus a report per sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated {
    pub table: Table,
    pub sheets: Vec<SheetReport>,
}

/// Drives table recovery, classification and reshaping across sheets.
#[derive(Debug, Clone, Default)]
pub struct SheetAggregator {
    options: NormalizeOptions,
}

impl SheetAggregator {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    fn locator(&self) -> BlockLocator {
        BlockLocator::new(self.options.min_row_cells)
    }

    fn classifier(&self) -> ColumnClassifier {
        ColumnClassifier::new(self.options.default_value_column.clone())
    }

    /// Normalizes one sheet.
    ///
    /// Fails with [`NormalizeError::NoTableFound`] when no header row exists.
    pub fn normalize_sheet(&self, sheet: &Sheet) -> Result<Reshape> {
        let span = info_span!("sheet", sheet = %sheet.name);
        let _guard = span.enter();

        let Some((block, context)) = self.locator().locate(&sheet.grid) else {
            return Err(NormalizeError::NoTableFound {
                sheet: sheet.name.clone(),
            });
        };
        debug!(
            header_row = block.header_row,
            columns = block.columns.len(),
            rows = block.rows.len(),
            context_labels = context.len(),
            "located table block"
        );

        let mut table = block.into_table();
        for (label, value) in &context {
            table.push_constant_column(label.as_str(), CellValue::text(value.clone()));
        }
        self.tag_rows(&mut table, &sheet.name);

        Ok(self.reshape_table(table))
    }

    /// Classifies and reshapes an already-tabular source.
    ///
    /// Used for flat delimited files, which skip table recovery. Every row is
    /// tagged with `source` in the sheet column.
    pub fn normalize_flat(&self, mut table: Table, source: &str) -> Reshape {
        let span = info_span!("table", source = %source);
        let _guard = span.enter();

        self.tag_rows(&mut table, source);
        self.reshape_table(table)
    }

    /// Deduplicates the header and appends the sheet column holding `source`.
    ///
    /// The sheet column keeps its configured name; a data column already
    /// carrying that name is renamed like any other repeat.
    fn tag_rows(&self, table: &mut Table, source: &str) {
        let sheet_column = &self.options.sheet_column;
        let mut names = Vec::with_capacity(table.width() + 1);
        names.push(sheet_column.clone());
        names.extend(table.columns.iter().cloned());
        let mut deduped = dedupe_header(source, &names);
        deduped.remove(0);
        table.columns = deduped;
        table.push_constant_column(sheet_column, CellValue::text(source));
    }

    /// Column roles for a header as the aggregator would assign them.
    pub fn classify(&self, columns: &[String]) -> Classification {
        self.classifier().classify(columns)
    }

    fn reshape_table(&self, table: Table) -> Reshape {
        let classification = self.classify(&table.columns);
        if classification.is_not_reshapable() {
            debug!("no location columns; keeping table as is");
        }
        reshape(table, &classification, &self.options)
    }

    /// Normalizes every sheet and concatenates the results in sheet order.
    ///
    /// Sheets without a table are skipped. Fails with
    /// [`NormalizeError::EmptyResult`] when no sheet yields a row.
    pub fn aggregate(&self, sheets: &[Sheet]) -> Result<Aggregated> {
        let mut combined = Table::default();
        let mut reports = Vec::with_capacity(sheets.len());
        let mut skipped = 0usize;

        for sheet in sheets {
            match self.normalize_sheet(sheet) {
                Ok(result) => {
                    let melted = result.is_melted();
                    let table = result.into_table();
                    info!(
                        sheet = %sheet.name,
                        rows = table.height(),
                        melted,
                        "normalized sheet"
                    );
                    reports.push(SheetReport {
                        sheet: sheet.name.clone(),
                        rows: Some(table.height()),
                        melted,
                    });
                    combined.append(table);
                }
                Err(error) => {
                    warn!(sheet = %sheet.name, %error, "skipping sheet");
                    skipped += 1;
                    reports.push(SheetReport {
                        sheet: sheet.name.clone(),
                        rows: None,
                        melted: false,
                    });
                }
            }
        }

        if combined.is_empty() {
            return Err(NormalizeError::EmptyResult {
                sheets: sheets.len(),
                skipped,
            });
        }
        Ok(Aggregated {
            table: combined,
            sheets: reports,
        })
    }
}
