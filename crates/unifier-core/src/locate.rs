//! Table block recovery for raw sheets.
//!
//! A sheet is scanned once from the top: the first row whose non-empty cells
//! are all text becomes the header, the rows below it form the data block until
//! the first sparse row, and the free text above it is mined for context.

use std::sync::LazyLock;

use regex::Regex;
use unifier_model::{CellValue, ContextLabel, ContextMap, Table};

static CONTEXT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(customer|period|event)\s*[:\-]?\s*(.+)").expect("Invalid context regex")
});

/// Header row plus the contiguous data rows beneath it.
///
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    /// Zero-based index of the header row in the source grid.
    pub header_row: usize,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TableBlock {
    pub fn into_table(self) -> Table {
        Table::with_rows(self.columns, self.rows)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    non_empty: usize,
    textual: usize,
}

fn row_stats(row: &[CellValue]) -> RowStats {
    let mut stats = RowStats::default();
    for cell in row {
        if cell.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if cell.is_text() {
            stats.textual += 1;
        }
    }
    stats
}

/// Finds the header row, data block and context block of a sheet.
#[derive(Debug, Clone, Copy)]
pub struct BlockLocator {
    min_row_cells: usize,
}

impl Default for BlockLocator {
    fn default() -> Self {
        Self { min_row_cells: 2 }
    }
}

impl BlockLocator {
    /// `min_row_cells` is the number of non-empty cells a header or data row needs.
    pub fn new(min_row_cells: usize) -> Self {
        Self {
            min_row_cells: min_row_cells.max(1),
        }
    }

    fn is_header_like(&self, stats: RowStats) -> bool {
        stats.non_empty >= self.min_row_cells && stats.textual == stats.non_empty
    }

    fn is_data_like(&self, stats: RowStats) -> bool {
        stats.non_empty >= self.min_row_cells
    }

    /// Index of the first row whose non-empty cells are all text.
    pub fn detect_header_row(&self, grid: &[Vec<CellValue>]) -> Option<usize> {
        grid.iter()
            .position(|row| self.is_header_like(row_stats(row)))
    }

    /// Returns `None` when the grid has no header row.
    pub fn locate(&self, grid: &[Vec<CellValue>]) -> Option<(TableBlock, ContextMap)> {
        let header_row = self.detect_header_row(grid)?;
        let columns = header_names(&grid[header_row]);
        let width = columns.len();

        let rows = grid[header_row + 1..]
            .iter()
            .take_while(|row| self.is_data_like(row_stats(row)))
            .map(|row| {
                let mut cells: Vec<CellValue> = row.iter().take(width).cloned().collect();
                cells.resize(width, CellValue::Empty);
                cells
            })
            .collect();

        let context = extract_context(&grid[..header_row]);
        Some((
            TableBlock {
                header_row,
                columns,
                rows,
            },
            context,
        ))
    }
}

/// Header names from a header row.
///
/// Names are trimmed; blank cells inside the row become `Unnamed: <idx>` and
/// trailing blank cells are dropped.
fn header_names(row: &[CellValue]) -> Vec<String> {
    let mut names: Vec<String> = row
        .iter()
        .map(|cell| cell.as_text().map(str::trim).unwrap_or_default().to_string())
        .collect();
    while names.last().is_some_and(String::is_empty) {
        names.pop();
    }
    for (idx, name) in names.iter_mut().enumerate() {
        if name.is_empty() {
            *name = format!("Unnamed: {idx}");
        }
    }
    names
}

/// Collects `Label: value` lines from the rows above the header.
///
/// Rows are scanned top to bottom and left to right; a label seen twice keeps
/// its last value.
pub fn extract_context(rows: &[Vec<CellValue>]) -> ContextMap {
    let mut context = ContextMap::new();
    for cell in rows.iter().flatten() {
        let Some(text) = cell.as_text() else {
            continue;
        };
        if let Some((label, value)) = parse_context_line(text) {
            context.insert(label, value);
        }
    }
    context
}

/// Parses a single preamble cell such as `Customer: Acme Corp`.
pub fn parse_context_line(text: &str) -> Option<(ContextLabel, String)> {
    let captures = CONTEXT_LINE.captures(text)?;
    let label = ContextLabel::parse(captures.get(1)?.as_str())?;
    let value = captures.get(2)?.as_str().trim().to_string();
    Some((label, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::text(value)
    }

    fn num(value: f64) -> CellValue {
        CellValue::Number(value)
    }

    #[test]
    fn header_is_first_all_text_row() {
        let grid = vec![
            vec![text("Inventory report"), CellValue::Empty, CellValue::Empty],
            vec![text("Printed"), num(45000.0), CellValue::Empty],
            vec![text("Item"), text("A"), text("B")],
            vec![text("X"), num(1.0), num(2.0)],
        ];
        let locator = BlockLocator::default();
        assert_eq!(locator.detect_header_row(&grid), Some(2));
    }

    #[test]
    fn data_block_stops_at_sparse_row() {
        let grid = vec![
            vec![text("Item"), text("A"), text("B")],
            vec![text("X"), num(1.0), num(2.0)],
            vec![text("Y"), num(3.0), CellValue::Empty],
            vec![text("Footer"), CellValue::Empty, CellValue::Empty],
            vec![text("Z"), num(9.0), num(9.0)],
        ];
        let (block, context) = BlockLocator::default().locate(&grid).expect("table");
        assert_eq!(block.header_row, 0);
        assert_eq!(block.rows.len(), 2);
        assert_eq!(block.rows[1], vec![text("Y"), num(3.0), CellValue::Empty]);
        assert!(context.is_empty());
    }

    #[test]
    fn rows_are_truncated_and_padded_to_header() {
        let grid = vec![
            vec![text("Item"), text("A")],
            vec![text("X"), num(1.0), num(99.0)],
            vec![text("Y"), num(2.0)],
        ];
        let (block, _) = BlockLocator::default().locate(&grid).expect("table");
        assert!(block.rows.iter().all(|row| row.len() == 2));
        assert_eq!(block.rows[0], vec![text("X"), num(1.0)]);
    }

    #[test]
    fn blank_header_cells_are_named_and_trailing_dropped() {
        let grid = vec![
            vec![
                text(" Item "),
                CellValue::Empty,
                text("A"),
                CellValue::Empty,
                CellValue::Empty,
            ],
            vec![text("X"), text("note"), num(1.0), CellValue::Empty, CellValue::Empty],
        ];
        let (block, _) = BlockLocator::default().locate(&grid).expect("table");
        assert_eq!(block.columns, vec!["Item", "Unnamed: 1", "A"]);
        assert_eq!(block.rows[0].len(), 3);
    }

    #[test]
    fn no_text_row_means_no_table() {
        let grid = vec![
            vec![num(1.0), num(2.0)],
            vec![text("only"), CellValue::Empty],
            vec![],
        ];
        assert!(BlockLocator::default().locate(&grid).is_none());
        assert!(BlockLocator::default().locate(&[]).is_none());
    }

    #[test]
    fn context_lines_above_header() {
        let grid = vec![
            vec![text("Customer: Acme Corp")],
            vec![text("period - Q1 2024"), text("Event:Spring Sale")],
            vec![text("Item"), text("A")],
            vec![text("X"), num(1.0)],
        ];
        let (_, context) = BlockLocator::default().locate(&grid).expect("table");
        assert_eq!(context.get(&ContextLabel::Customer).map(String::as_str), Some("Acme Corp"));
        assert_eq!(context.get(&ContextLabel::Period).map(String::as_str), Some("Q1 2024"));
        assert_eq!(context.get(&ContextLabel::Event).map(String::as_str), Some("Spring Sale"));
    }

    #[test]
    fn repeated_context_label_keeps_last() {
        let rows = vec![
            vec![text("Period: January")],
            vec![text("Period: February")],
        ];
        let context = extract_context(&rows);
        assert_eq!(context.get(&ContextLabel::Period).map(String::as_str), Some("February"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn context_requires_label_at_start() {
        assert!(parse_context_line("Report for Customer: Acme").is_none());
        assert!(parse_context_line("Store: 12").is_none());
        assert_eq!(
            parse_context_line("CUSTOMER   Globex"),
            Some((ContextLabel::Customer, "Globex".to_string()))
        );
    }

    #[test]
    fn rows_below_header_are_not_context() {
        let grid = vec![
            vec![text("Item"), text("A")],
            vec![text("Customer: Late"), num(1.0)],
        ];
        let (_, context) = BlockLocator::default().locate(&grid).expect("table");
        assert!(context.is_empty());
    }
}
