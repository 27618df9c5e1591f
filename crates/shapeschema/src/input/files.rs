//! Project-file sources.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Result, SchemaError};

use super::index::FileIndex;

/// Version-control metadata directory, always excluded from the index.
const GIT_DIR: &str = ".git";

/// Source of project files addressed by project-relative, `/`-separated paths.
pub trait ProjectFiles {
    /// List every file available for reference resolution.
    fn index(&self) -> Result<FileIndex>;

    /// Read a file from the index.
    fn read_to_string(&self, path: &str) -> Result<String>;
}

/// Project files on disk under a root directory.
///
/// `.gitignore` files are honoured whether or not the root is a git
/// repository. Directory entries are visited in file-name order.
#[derive(Debug, Clone)]
pub struct DiskFiles {
    root: PathBuf,
}

impl DiskFiles {
    /// Open a project root. Fails if the path is not an existing directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SchemaError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProjectFiles for DiskFiles {
    fn index(&self) -> Result<FileIndex> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .parents(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| entry.file_name() != OsStr::new(GIT_DIR))
            .build();

        let mut index = FileIndex::new();
        for result in walker {
            let entry = result?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if let Some(path) = relative_path(&self.root, entry.path()) {
                index.insert(path);
            }
        }

        debug!(root = %self.root.display(), files = index.len(), "Indexed project files");
        Ok(index)
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|e| SchemaError::Io {
            path: full,
            source: e,
        })
    }
}

/// Express `path` relative to `root` with `/` separators.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, contents: &str) {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, contents).unwrap();
    }

    #[test]
    fn test_missing_root_is_invalid() {
        let dir = TempDir::new().unwrap();
        let err = DiskFiles::new(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRoot { .. }));
    }

    #[test]
    fn test_file_root_is_invalid() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Ship.csv", "Name\n");
        let err = DiskFiles::new(dir.path().join("Ship.csv")).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRoot { .. }));
    }

    #[test]
    fn test_index_uses_relative_slash_paths() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Models/Ship.csv", "Name\n");
        write(dir.path(), "Catalog/Color.csv", "Value\n");

        let index = DiskFiles::new(dir.path()).unwrap().index().unwrap();
        let paths: Vec<&str> = index.iter().collect();
        assert_eq!(paths, vec!["Catalog/Color.csv", "Models/Ship.csv"]);
    }

    #[test]
    fn test_index_excludes_git_and_ignored() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".gitignore", "drafts/\n*.bak\n");
        write(dir.path(), ".git/HEAD", "ref: refs/heads/main\n");
        write(dir.path(), "drafts/Ship.csv", "Name\n");
        write(dir.path(), "Ship.csv.bak", "Name\n");
        write(dir.path(), "Ship.csv", "Name\n");

        let index = DiskFiles::new(dir.path()).unwrap().index().unwrap();
        assert!(index.contains("Ship.csv"));
        assert!(!index.iter().any(|p| p.starts_with(".git/")));
        assert!(!index.contains("drafts/Ship.csv"));
        assert!(!index.contains("Ship.csv.bak"));
    }

    #[test]
    fn test_read_to_string() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Models/Ship.csv", "Name\nhull\n");

        let files = DiskFiles::new(dir.path()).unwrap();
        assert_eq!(files.read_to_string("Models/Ship.csv").unwrap(), "Name\nhull\n");
        assert!(matches!(
            files.read_to_string("Models/Crew.csv"),
            Err(SchemaError::Io { .. })
        ));
    }
}
