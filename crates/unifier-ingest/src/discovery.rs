//! Input discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists the regular files of a directory.
///
/// Hidden files are skipped. Returns files sorted by filename.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Expands an input path into the files to process.
///
/// A file yields itself; a directory yields its files via [`list_input_files`].
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if input.is_dir() {
        return list_input_files(input);
    }
    Err(IngestError::InputNotFound {
        path: input.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["b_stock.xlsx", "a_sales.csv", "notes.txt", ".hidden.csv"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        dir
    }

    #[test]
    fn test_list_input_files_sorted() {
        let dir = create_test_dir();
        let files = list_input_files(dir.path()).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a_sales.csv", "b_stock.xlsx", "notes.txt"]);
    }

    #[test]
    fn test_collect_inputs() {
        let dir = create_test_dir();
        let single = dir.path().join("a_sales.csv");
        assert_eq!(collect_inputs(&single).unwrap(), vec![single.clone()]);
        assert_eq!(collect_inputs(dir.path()).unwrap().len(), 3);

        let missing = dir.path().join("missing");
        assert!(matches!(
            collect_inputs(&missing),
            Err(IngestError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_list_missing_directory() {
        let result = list_input_files(Path::new("/nonexistent/unifier/input"));
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
