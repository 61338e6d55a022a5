use std::fs;
use std::path::PathBuf;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use unifier_ingest::{
    FileType, IngestError, SourceData, detect_file_type, read_delimited, read_source,
    read_workbook,
};
use unifier_model::CellValue;

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_csv_with_typed_cells() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "stock.csv",
        b"\xEF\xBB\xBFItem, A ,B,\nX,5,,note\n,,,\nY,3.5,n/a\n",
    );
    let table = read_delimited(&path).expect("read csv");
    assert_eq!(table.columns, vec!["Item", "A", "B", "Unnamed: 3"]);
    assert_eq!(table.height(), 2);
    assert_eq!(
        table.rows[0],
        vec![
            CellValue::text("X"),
            CellValue::Number(5.0),
            CellValue::Empty,
            CellValue::text("note")
        ]
    );
    assert_eq!(table.rows[1][2], CellValue::text("n/a"));
    assert_eq!(table.rows[1][3], CellValue::Empty);
}

#[test]
fn empty_csv_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "empty.csv", b"");
    assert!(matches!(
        read_delimited(&path),
        Err(IngestError::EmptyCsv { .. })
    ));
}

#[test]
fn missing_csv_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.csv");
    assert!(matches!(
        read_delimited(&path),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn detects_types_by_content_then_extension() {
    let dir = TempDir::new().expect("temp dir");
    let pdf = write_file(&dir, "report.dat", b"%PDF-1.4 body");
    let csv = write_file(&dir, "sales.csv", b"Item,A\nX,1\n");
    let xlsx = write_file(&dir, "book", b"PK\x03\x04payload");
    let docx = write_file(&dir, "letter.docx", b"PK\x03\x04payload");
    let txt = write_file(&dir, "notes.txt", b"hello world");

    assert_eq!(detect_file_type(&pdf), Some(FileType::PdfTable));
    assert_eq!(detect_file_type(&csv), Some(FileType::Csv));
    assert_eq!(detect_file_type(&xlsx), Some(FileType::Excel));
    assert_eq!(detect_file_type(&docx), None);
    assert_eq!(detect_file_type(&txt), None);
}

#[test]
fn pdf_has_no_reader() {
    let dir = TempDir::new().expect("temp dir");
    let pdf = write_file(&dir, "report.pdf", b"%PDF-1.4 body");
    let err = read_source(&pdf, FileType::PdfTable).unwrap_err();
    assert!(matches!(err, IngestError::NoReader { file_type: "pdf", .. }));
}

#[test]
fn csv_source_is_flat() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_file(&dir, "sales.csv", b"Item,A,B\nX,1,2\n");
    match read_source(&csv, FileType::Csv).expect("read") {
        SourceData::Flat(table) => assert_eq!(table.height(), 1),
        SourceData::Sheets(_) => panic!("expected flat table"),
    }
}

fn write_stock_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("stock.xlsx");
    let mut workbook = Workbook::new();
    let march = workbook.add_worksheet();
    march.set_name("March").expect("sheet name");
    march.write_string(0, 0, "Period: March 2024").expect("write");
    for (col, name) in (0u16..).zip(["Item", "A", "B", "Total Units"]) {
        march.write_string(2, col, name).expect("write");
    }
    march.write_string(3, 0, "X").expect("write");
    march.write_number(3, 1, 5.0).expect("write");
    march.write_number(3, 3, 5.0).expect("write");
    march.write_string(4, 0, "Y").expect("write");
    march.write_number(4, 1, 3.0).expect("write");
    march.write_number(4, 2, 3.0).expect("write");
    march.write_number(4, 3, 6.0).expect("write");
    let notes = workbook.add_worksheet();
    notes.set_name("Notes").expect("sheet name");
    notes.write_string(0, 0, "free text").expect("write");
    workbook.save(&path).expect("save workbook");
    path
}

#[test]
fn reads_one_sheet_per_worksheet_in_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_stock_workbook(&dir);
    assert_eq!(detect_file_type(&path), Some(FileType::Excel));

    let sheets = read_workbook(&path).expect("read workbook");
    let names: Vec<&str> = sheets.iter().map(|sheet| sheet.name.as_str()).collect();
    assert_eq!(names, vec!["March", "Notes"]);

    let grid = &sheets[0].grid;
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0][0], CellValue::text("Period: March 2024"));
    assert_eq!(grid[0][1], CellValue::Empty);
    assert!(grid[1].iter().all(CellValue::is_empty));
    assert_eq!(
        grid[2],
        vec![
            CellValue::text("Item"),
            CellValue::text("A"),
            CellValue::text("B"),
            CellValue::text("Total Units")
        ]
    );
    assert_eq!(
        grid[3],
        vec![
            CellValue::text("X"),
            CellValue::Number(5.0),
            CellValue::Empty,
            CellValue::Number(5.0)
        ]
    );
    assert_eq!(sheets[1].grid, vec![vec![CellValue::text("free text")]]);
}

#[test]
fn workbook_source_is_sheets() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_stock_workbook(&dir);
    match read_source(&path, FileType::Excel).expect("read") {
        SourceData::Sheets(sheets) => assert_eq!(sheets.len(), 2),
        SourceData::Flat(_) => panic!("expected sheets"),
    }
}
