//! Column role classification.
//!
//! Roles come from an ordered rule table: the first rule whose predicate matches
//! a column name decides its role, and names no rule matches are identifiers.

use std::sync::LazyLock;

use regex::Regex;
use unifier_model::ColumnRole;

static TOTAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^total").expect("Invalid total regex"));

static TOTAL_VALUE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^total\s+(.*)").expect("Invalid total value regex"));

static LETTER_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]*$").expect("Invalid location code regex"));

const LOCATION_PREFIXES: &[&str] = &[
    "location",
    "loc",
    "store",
    "warehouse",
    "branch",
    "region",
    "site",
    "facility",
];

const IDENTIFIER_FRAGMENTS: &[&str] = &["code", "id", "descr", "item", "product", "sku"];

const SUMMARY_NAMES: &[&str] = &["Total", "Sum", "Grand Total"];

/// A single classification rule.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub name: &'static str,
    pub role: ColumnRole,
    predicate: fn(&str) -> bool,
}

impl RoleRule {
    pub fn matches(&self, column: &str) -> bool {
        (self.predicate)(column)
    }
}

/// Rules in priority order.
pub const ROLE_RULES: [RoleRule; 4] = [
    RoleRule {
        name: "total-prefix",
        role: ColumnRole::Total,
        predicate: is_total_column,
    },
    RoleRule {
        name: "location",
        role: ColumnRole::Location,
        predicate: is_location_column,
    },
    RoleRule {
        name: "identifier",
        role: ColumnRole::Identifier,
        predicate: is_identifier_column,
    },
    RoleRule {
        name: "summary",
        role: ColumnRole::Total,
        predicate: is_summary_column,
    },
];

/// Names starting with `Total`, in any case.
pub fn is_total_column(column: &str) -> bool {
    TOTAL_PREFIX.is_match(column)
}

/// A capital letter with optional digits (`A`, `B12`) or a location-like prefix.
pub fn is_location_column(column: &str) -> bool {
    if LETTER_CODE.is_match(column) {
        return true;
    }
    let lower = column.to_lowercase();
    LOCATION_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

pub fn is_identifier_column(column: &str) -> bool {
    let lower = column.to_lowercase();
    IDENTIFIER_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

pub fn is_summary_column(column: &str) -> bool {
    SUMMARY_NAMES.contains(&column)
}

/// Role of a single column name.
pub fn classify_column(column: &str) -> ColumnRole {
    ROLE_RULES
        .iter()
        .find(|rule| rule.matches(column))
        .map_or(ColumnRole::Identifier, |rule| rule.role)
}

/// Roles for every column of a header, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub roles: Vec<(String, ColumnRole)>,
    /// Name of the melted value column; `None` when there is nothing to melt.
    pub value_column: Option<String>,
}

impl Classification {
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        self.roles
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, role)| *role)
    }

    pub fn columns_with(&self, role: ColumnRole) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|(_, r)| *r == role)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// True when no location column was found.
    pub fn is_not_reshapable(&self) -> bool {
        !self.roles.iter().any(|(_, role)| *role == ColumnRole::Location)
    }
}

/// Assigns roles to the columns of a header and names the value column.
#[derive(Debug, Clone)]
pub struct ColumnClassifier {
    default_value_column: String,
}

impl Default for ColumnClassifier {
    fn default() -> Self {
        Self::new("Value")
    }
}

impl ColumnClassifier {
    pub fn new(default_value_column: impl Into<String>) -> Self {
        Self {
            default_value_column: default_value_column.into(),
        }
    }

    pub fn classify<S: AsRef<str>>(&self, columns: &[S]) -> Classification {
        let roles: Vec<(String, ColumnRole)> = columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                (column.to_string(), classify_column(column))
            })
            .collect();

        let has_location = roles.iter().any(|(_, role)| *role == ColumnRole::Location);
        let value_column = has_location.then(|| {
            // The last `Total ...` column names the measurement.
            roles
                .iter()
                .rev()
                .find(|(name, _)| is_total_column(name))
                .and_then(|(name, _)| value_name_from_total(name))
                .unwrap_or_else(|| self.default_value_column.clone())
        });

        Classification {
            roles,
            value_column,
        }
    }
}

/// `Total Inventory` → `Inventory`; `None` when nothing follows the prefix.
pub fn value_name_from_total(column: &str) -> Option<String> {
    let captures = TOTAL_VALUE_NAME.captures(column)?;
    let name = captures.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_columns() {
        for name in ["A", "A1", "B12", "Store 3", "location_north", "LOC-7", "Warehouse", "site"] {
            assert_eq!(classify_column(name), ColumnRole::Location, "{name}");
        }
    }

    #[test]
    fn letter_codes_are_case_sensitive() {
        assert_eq!(classify_column("a"), ColumnRole::Identifier);
        assert_eq!(classify_column("AB"), ColumnRole::Identifier);
        assert_eq!(classify_column("A1B"), ColumnRole::Identifier);
    }

    #[test]
    fn identifier_columns() {
        for name in ["SKU Code", "Item ID", "Description", "Product", "code"] {
            assert_eq!(classify_column(name), ColumnRole::Identifier, "{name}");
        }
    }

    #[test]
    fn total_columns() {
        assert_eq!(classify_column("Total Units"), ColumnRole::Total);
        assert_eq!(classify_column("TOTAL"), ColumnRole::Total);
        assert_eq!(classify_column("Sum"), ColumnRole::Total);
        assert_eq!(classify_column("Grand Total"), ColumnRole::Total);
        // Exact match only for summary names.
        assert_eq!(classify_column("sum"), ColumnRole::Identifier);
    }

    #[test]
    fn total_prefix_wins_over_other_rules() {
        assert_eq!(classify_column("Total Store Items"), ColumnRole::Total);
    }

    #[test]
    fn location_wins_over_identifier() {
        // "Store ID" matches both patterns.
        assert_eq!(classify_column("Store ID"), ColumnRole::Location);
    }

    #[test]
    fn unknown_names_default_to_identifier() {
        assert_eq!(classify_column("Colour"), ColumnRole::Identifier);
        assert_eq!(classify_column(""), ColumnRole::Identifier);
    }

    #[test]
    fn value_column_from_total() {
        let classification =
            ColumnClassifier::default().classify(&["Item", "A", "B", "Total Units"]);
        assert_eq!(classification.value_column.as_deref(), Some("Units"));
        assert!(!classification.is_not_reshapable());
        assert_eq!(classification.columns_with(ColumnRole::Location), vec!["A", "B"]);
    }

    #[test]
    fn value_column_defaults_without_usable_total() {
        let classifier = ColumnClassifier::default();
        assert_eq!(
            classifier.classify(&["Item", "A"]).value_column.as_deref(),
            Some("Value")
        );
        assert_eq!(
            classifier.classify(&["Item", "A", "Total"]).value_column.as_deref(),
            Some("Value")
        );
        assert_eq!(
            classifier.classify(&["Item", "A", "TotalUnits"]).value_column.as_deref(),
            Some("Value")
        );
        assert_eq!(
            ColumnClassifier::new("Qty")
                .classify(&["Item", "A", "Grand Total"])
                .value_column
                .as_deref(),
            Some("Qty")
        );
    }

    #[test]
    fn no_location_is_not_reshapable() {
        let classification = ColumnClassifier::default().classify(&["Item", "Qty", "Total Units"]);
        assert!(classification.is_not_reshapable());
        assert_eq!(classification.value_column, None);
        assert_eq!(classification.roles.len(), 3);
    }

    #[test]
    fn strip_total_prefix() {
        assert_eq!(value_name_from_total("Total Inventory").as_deref(), Some("Inventory"));
        assert_eq!(value_name_from_total("total   sales value").as_deref(), Some("sales value"));
        assert_eq!(value_name_from_total("Total "), None);
        assert_eq!(value_name_from_total("Totals"), None);
    }
}
