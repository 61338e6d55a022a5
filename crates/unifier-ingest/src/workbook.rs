//! Spreadsheet workbook reading (xls, xlsx, xlsm, xlsb, ods).

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::{debug, warn};
use unifier_model::{CellValue, RawGrid, Sheet};

use crate::error::{IngestError, Result};

/// Converts a calamine cell into a [`CellValue`].
///
/// Date-times keep their serial number; ISO strings and error cells become text.
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::from(*n),
        Data::Bool(b) => CellValue::text(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
        Data::Error(e) => CellValue::text(e.to_string()),
    }
}

/// Reads every sheet of a workbook, in workbook order.
///
/// The grid of each sheet starts at the top-left cell of its used range. A
/// sheet that cannot be read is logged and skipped.
pub fn read_workbook(path: &Path) -> Result<Vec<Sheet>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(error) => {
                warn!(path = %path.display(), sheet = %name, %error, "skipping unreadable sheet");
                continue;
            }
        };
        let grid: RawGrid = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();
        let (height, width) = range.get_size();
        debug!(sheet = %name, height, width, "read sheet");
        sheets.push(Sheet::new(name, grid));
    }
    Ok(sheets)
}
