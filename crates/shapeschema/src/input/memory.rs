//! In-memory project files for testing and embedding.

use std::io;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::{Result, SchemaError};

use super::files::ProjectFiles;
use super::index::FileIndex;

/// Project files held in memory. The index lists paths in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles {
    files: IndexMap<String, String>,
}

impl MemoryFiles {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl ProjectFiles for MemoryFiles {
    fn index(&self) -> Result<FileIndex> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| SchemaError::Io {
            path: PathBuf::from(path),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }
}
