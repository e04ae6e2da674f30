use std::path::{Path, PathBuf};

use crate::error::Error;

/// Recursively enumerate study workbooks under the data directory.
///
/// Only `.xlsx` files count; spreadsheet lock files (`~$` prefix) are
/// skipped. Results are sorted so corpus loads are deterministic.
pub fn discover_workbooks(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    collect_workbooks(dir, &mut files)?;
    files.sort();

    Ok(files)
}

fn collect_workbooks(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Error> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            collect_workbooks(&path, files)?;
        } else if is_workbook(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_workbook(path: &Path) -> bool {
    let is_xlsx = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    let is_lock_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("~$"));

    is_xlsx && !is_lock_file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_filter_matches_xlsx_only() {
        assert!(is_workbook(Path::new("/data/TMC-1.xlsx")));
        assert!(is_workbook(Path::new("/data/TMC-1.XLSX")));
        assert!(!is_workbook(Path::new("/data/TMC-1.csv")));
        assert!(!is_workbook(Path::new("/data/~$TMC-1.xlsx")));
        assert!(!is_workbook(Path::new("/data/notes")));
    }
}
