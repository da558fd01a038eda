//! Entity discovery from a directory tree.

use std::path::Path;

use crate::{Error, Result};

/// List the names of the immediate subdirectories of `root`, sorted.
///
/// Hidden directories and names that are not valid UTF-8 are skipped.
pub fn discover_entities(root: &Path) -> Result<Vec<String>> {
    let discover_err = |source| {
        Box::new(Error::Discover {
            path: root.to_path_buf(),
            source,
        })
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root).map_err(discover_err)? {
        let entry = entry.map_err(discover_err)?;
        if !entry.file_type().map_err(discover_err)?.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if name.starts_with('.') => {}
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!(name = ?raw, "skipping directory with a non UTF-8 name");
            }
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lists_subdirectories_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Button")).unwrap();
        fs::create_dir(temp.path().join("AppBar")).unwrap();
        fs::create_dir(temp.path().join(".cache")).unwrap();
        fs::write(temp.path().join("index.js"), "").unwrap();

        let names = discover_entities(temp.path()).unwrap();
        assert_eq!(names, vec!["AppBar".to_string(), "Button".to_string()]);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = discover_entities(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(*err, Error::Discover { .. }));
    }
}
