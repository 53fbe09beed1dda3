//! Read-only I/O helpers

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// List the entry names of a directory in lexicographic order.
///
/// Filesystem enumeration order is platform dependent, so every caller that
/// picks "the first" marker file goes through this function.
pub fn read_dir_sorted(dir: &NormalizedPath) -> Result<Vec<String>> {
    let native_path = dir.to_native();
    if !native_path.is_dir() {
        return Err(Error::NotADirectory { path: native_path });
    }

    let entries = fs::read_dir(&native_path).map_err(|e| Error::io(&native_path, e))?;
    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_dir_sorted_orders_entries() {
        let temp = TempDir::new().unwrap();
        for name in ["b.podspec", "a.podspec", "C.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let names = read_dir_sorted(&NormalizedPath::new(temp.path())).unwrap();
        assert_eq!(names, vec!["C.txt", "a.podspec", "b.podspec"]);
    }

    #[test]
    fn read_dir_sorted_rejects_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("package.json");
        fs::write(&file, "{}").unwrap();

        let err = read_dir_sorted(&NormalizedPath::new(&file)).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }
}
