//! File type detection from content signatures with an extension fallback.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF";
const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

const WORKBOOK_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Csv,
    Excel,
    PdfTable,
}

impl FileType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::PdfTable => "pdf",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_workbook_extension(ext: &str) -> bool {
    WORKBOOK_EXTENSIONS.contains(&ext)
}

fn read_signature(path: &Path) -> Option<[u8; 8]> {
    let mut file = File::open(path).ok()?;
    let mut buffer = [0u8; 8];
    let read = file.read(&mut buffer).ok()?;
    (read >= 4).then_some(buffer)
}

/// Type implied by the leading bytes, if they are conclusive.
fn sniff(signature: &[u8], ext: Option<&str>) -> Option<FileType> {
    if signature.starts_with(PDF_MAGIC) {
        return Some(FileType::PdfTable);
    }
    if signature.starts_with(OLE2_MAGIC) {
        return Some(FileType::Excel);
    }
    // Plenty of formats are ZIP containers; only trust it for workbooks.
    if signature.starts_with(ZIP_MAGIC) && ext.is_none_or(is_workbook_extension) {
        return Some(FileType::Excel);
    }
    None
}

fn from_extension(ext: &str) -> Option<FileType> {
    match ext {
        "csv" => Some(FileType::Csv),
        "pdf" => Some(FileType::PdfTable),
        ext if is_workbook_extension(ext) => Some(FileType::Excel),
        _ => None,
    }
}

/// Detects the format of `path`.
///
/// Content signatures win over the extension. Returns `None` when neither
/// identifies a supported format. Unreadable files are judged by extension.
pub fn detect_file_type(path: &Path) -> Option<FileType> {
    let ext = extension(path);
    if let Some(signature) = read_signature(path)
        && let Some(file_type) = sniff(&signature, ext.as_deref())
    {
        debug!(path = %path.display(), %file_type, "detected file type from content");
        return Some(file_type);
    }
    let file_type = ext.as_deref().and_then(from_extension);
    debug!(path = %path.display(), file_type = ?file_type, "detected file type from extension");
    file_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_signatures() {
        assert_eq!(sniff(b"%PDF-1.7", Some("bin")), Some(FileType::PdfTable));
        assert_eq!(
            sniff(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1], Some("dat")),
            Some(FileType::Excel)
        );
        assert_eq!(sniff(b"PK\x03\x04rest", Some("xlsx")), Some(FileType::Excel));
        assert_eq!(sniff(b"PK\x03\x04rest", None), Some(FileType::Excel));
        assert_eq!(sniff(b"PK\x03\x04rest", Some("docx")), None);
        assert_eq!(sniff(b"Item,A,B", Some("csv")), None);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(from_extension("csv"), Some(FileType::Csv));
        assert_eq!(from_extension("xlsm"), Some(FileType::Excel));
        assert_eq!(from_extension("ods"), Some(FileType::Excel));
        assert_eq!(from_extension("pdf"), Some(FileType::PdfTable));
        assert_eq!(from_extension("txt"), None);
    }

    #[test]
    fn test_missing_file_falls_back_to_extension() {
        let path = Path::new("/nonexistent/dir/report.XLSX");
        assert_eq!(detect_file_type(path), Some(FileType::Excel));
        assert_eq!(detect_file_type(Path::new("/nonexistent/notes")), None);
    }
}
