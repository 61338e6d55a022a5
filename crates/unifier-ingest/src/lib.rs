//! Input handling for the tabular unifier.
//!
//! # Features
//!
//! - **Discovery**: expand a file or directory into input files
//! - **Detection**: identify CSV, workbook and PDF inputs by content and extension
//! - **Readers**: delimited files into a [`Table`](unifier_model::Table), workbooks
//!   into one raw [`Sheet`](unifier_model::Sheet) per worksheet
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use unifier_ingest::{collect_inputs, detect_file_type, read_source};
//!
//! for path in collect_inputs(Path::new("incoming"))? {
//!     if let Some(file_type) = detect_file_type(&path) {
//!         let data = read_source(&path, file_type)?;
//!     }
//! }
//! ```

mod delimited;
mod detect;
mod discovery;
mod error;
mod source;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Detection ===
pub use detect::{FileType, detect_file_type};

// === File Discovery ===
pub use discovery::{collect_inputs, list_input_files};

// === Readers ===
pub use delimited::{parse_cell, read_delimited};
pub use source::{SourceData, read_source};
pub use workbook::{convert_cell, read_workbook};
