//! Header deduplication.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

/// Header names after deduplication, plus the names that repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupedColumns {
    pub columns: Vec<String>,
    /// Each repeated name once, in first-repeat order.
    pub duplicates: Vec<String>,
}

/// Makes every header name unique.
///
/// The first occurrence of a name is kept; the k-th repeat becomes
/// `<name>_<k>`. A suffix already used by another column is skipped, so the
/// result never contains a repeat.
pub fn dedupe_columns<S: AsRef<str>>(names: &[S]) -> DedupedColumns {
    let mut taken: BTreeSet<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut counters: BTreeMap<&str, usize> = BTreeMap::new();
    let mut columns = Vec::with_capacity(names.len());
    let mut duplicates: Vec<String> = Vec::new();

    for name in names {
        let name = name.as_ref();
        if seen.insert(name) {
            columns.push(name.to_string());
            continue;
        }
        if !duplicates.iter().any(|dup| dup == name) {
            duplicates.push(name.to_string());
        }
        let counter = counters.entry(name).or_insert(0);
        let renamed = loop {
            *counter += 1;
            let candidate = format!("{name}_{counter}");
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        taken.insert(renamed.clone());
        columns.push(renamed);
    }

    DedupedColumns {
        columns,
        duplicates,
    }
}

/// Deduplicates a sheet header, logging the repeated names.
pub fn dedupe_header(sheet: &str, names: &[String]) -> Vec<String> {
    let deduped = dedupe_columns(names);
    if !deduped.duplicates.is_empty() {
        warn!(
            sheet = %sheet,
            duplicates = ?deduped.duplicates,
            "renamed duplicate column names"
        );
    }
    deduped.columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_repeats_with_counter() {
        let deduped = dedupe_columns(&["Code", "Code", "Qty"]);
        assert_eq!(deduped.columns, vec!["Code", "Code_1", "Qty"]);
        assert_eq!(deduped.duplicates, vec!["Code"]);
    }

    #[test]
    fn counts_each_name_separately() {
        let deduped = dedupe_columns(&["A", "B", "A", "B", "A"]);
        assert_eq!(deduped.columns, vec!["A", "B", "A_1", "B_1", "A_2"]);
        assert_eq!(deduped.duplicates, vec!["A", "B"]);
    }

    #[test]
    fn unique_header_is_unchanged() {
        let deduped = dedupe_columns(&["Item", "A", "B"]);
        assert_eq!(deduped.columns, vec!["Item", "A", "B"]);
        assert!(deduped.duplicates.is_empty());
    }

    #[test]
    fn skips_suffixes_taken_by_real_columns() {
        let deduped = dedupe_columns(&["Code", "Code", "Code_1"]);
        assert_eq!(deduped.columns, vec!["Code", "Code_2", "Code_1"]);
    }

    #[test]
    fn header_helper_returns_columns() {
        let names = vec!["X".to_string(), "X".to_string()];
        assert_eq!(dedupe_header("Sheet1", &names), vec!["X", "X_1"]);
    }
}
