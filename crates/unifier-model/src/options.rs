//! Configuration options for normalization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Options controlling how tables are located and reshaped.
///
/// Missing fields in a JSON options file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Name of the column that receives the melted location names.
    pub locations_column: String,

    /// Name of the column carrying the source sheet (or file) of each row.
    pub sheet_column: String,

    /// Value column name used when no `Total ...` column names one.
    pub default_value_column: String,

    /// Drop melted records whose value is zero. Missing values are always dropped.
    pub drop_zero_values: bool,

    /// Minimum non-empty cells for a row to count as a header or data row.
    pub min_row_cells: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            locations_column: "Locations".to_string(),
            sheet_column: "_sheet".to_string(),
            default_value_column: "Value".to_string(),
            drop_zero_values: true,
            min_row_cells: 2,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::OptionsRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ModelError::OptionsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn with_locations_column(mut self, name: impl Into<String>) -> Self {
        self.locations_column = name.into();
        self
    }

    #[must_use]
    pub fn with_sheet_column(mut self, name: impl Into<String>) -> Self {
        self.sheet_column = name.into();
        self
    }

    #[must_use]
    pub fn with_default_value_column(mut self, name: impl Into<String>) -> Self {
        self.default_value_column = name.into();
        self
    }

    #[must_use]
    pub fn with_drop_zero_values(mut self, enable: bool) -> Self {
        self.drop_zero_values = enable;
        self
    }
}
