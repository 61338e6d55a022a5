use crate::cell::CellValue;

/// A named-column table of cells.
///
/// Every row holds exactly `columns.len()` cells; rows pushed with a different
/// length are truncated or padded with [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table, normalizing every row to the header length.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(idx))
    }

    /// Appends a column holding `value` in every row.
    ///
    /// The column is added even when `name` already exists; callers
    /// deduplicate the header afterwards.
    pub fn push_constant_column(&mut self, name: &str, value: CellValue) {
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(value.clone());
        }
    }

    /// Copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Appends the rows of `other`, aligning by column name.
    ///
    /// Columns unknown so far are added at the end; cells missing from either
    /// side are left empty.
    pub fn append(&mut self, other: Table) {
        let mut mapping = Vec::with_capacity(other.columns.len());
        for column in &other.columns {
            let idx = match self.column_index(column) {
                Some(idx) => idx,
                None => {
                    self.columns.push(column.clone());
                    for row in &mut self.rows {
                        row.push(CellValue::Empty);
                    }
                    self.columns.len() - 1
                }
            };
            mapping.push(idx);
        }
        for row in other.rows {
            let mut aligned = vec![CellValue::Empty; self.columns.len()];
            for (cell, &idx) in row.into_iter().zip(&mapping) {
                aligned[idx] = cell;
            }
            self.rows.push(aligned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn push_row_pads_and_truncates() {
        let mut table = Table::new(names(&["A", "B"]));
        table.push_row(vec![CellValue::from("x")]);
        table.push_row(vec![1.0.into(), 2.0.into(), 3.0.into()]);
        assert_eq!(table.rows[0], vec![CellValue::from("x"), CellValue::Empty]);
        assert_eq!(table.rows[1].len(), 2);
    }

    #[test]
    fn constant_column_is_always_appended() {
        let mut table = Table::with_rows(names(&["A"]), vec![vec!["x".into()], vec!["y".into()]]);
        table.push_constant_column("A", "S1".into());
        assert_eq!(table.columns, names(&["A", "A"]));
        assert_eq!(table.rows[0], vec![CellValue::from("x"), CellValue::from("S1")]);
        assert_eq!(table.rows[1], vec![CellValue::from("y"), CellValue::from("S1")]);
    }

    #[test]
    fn append_aligns_by_name() {
        let mut left = Table::with_rows(names(&["A", "B"]), vec![vec!["a1".into(), "b1".into()]]);
        let right = Table::with_rows(names(&["B", "C"]), vec![vec!["b2".into(), "c2".into()]]);
        left.append(right);
        assert_eq!(left.columns, names(&["A", "B", "C"]));
        assert_eq!(left.rows[0][2], CellValue::Empty);
        assert_eq!(
            left.rows[1],
            vec![CellValue::Empty, "b2".into(), "c2".into()]
        );
    }
}
