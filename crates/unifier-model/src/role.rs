//! Column roles and sheet context labels.

use std::collections::BTreeMap;
use std::fmt;

/// Role of a column in a wide table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ColumnRole {
    /// Kept on every emitted record.
    Identifier,
    /// Melted into a `(location, value)` pair.
    Location,
    /// Summary column, dropped before reshaping.
    Total,
}

impl ColumnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Location => "Location",
            Self::Total => "Total",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels recognised in the free-text block above a header row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ContextLabel {
    Customer,
    Period,
    Event,
}

impl ContextLabel {
    pub const ALL: [ContextLabel; 3] = [Self::Customer, Self::Period, Self::Event];

    /// Column name used when the context is attached to a table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Period => "Period",
            Self::Event => "Event",
        }
    }

    /// Case-insensitive lookup.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for ContextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context values keyed by label, ordered Customer, Period, Event.
pub type ContextMap = BTreeMap<ContextLabel, String>;
