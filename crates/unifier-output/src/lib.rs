//! Output for unified long tables.
//!
//! Tables are converted to polars DataFrames and written as CSV.

mod csv;
mod error;
mod frame;

pub use csv::{output_path_for, write_csv};
pub use error::{OutputError, Result};
pub use frame::table_to_dataframe;
