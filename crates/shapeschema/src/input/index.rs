//! Flat index of project-relative file paths.

use indexmap::IndexSet;
use serde::Serialize;

/// Ordered, de-duplicated list of project-relative paths.
///
/// Iteration order is traversal order, which decides which file wins when
/// several paths match a type reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileIndex {
    paths: IndexSet<String>,
}

impl FileIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Returns false if it was already indexed.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Number of indexed paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if no paths are indexed.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Check whether a path is indexed.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Paths in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// First path containing `token`, compared case-insensitively.
    pub fn find_containing(&self, token: &str) -> Option<&str> {
        let needle = token.to_lowercase();
        self.iter().find(|path| path.to_lowercase().contains(&needle))
    }

    /// First path ending with `name`, or with `name` plus a `.csv` extension.
    pub fn find_by_suffix(&self, name: &str) -> Option<&str> {
        let with_extension = format!("{name}.csv");
        self.iter()
            .find(|path| path.ends_with(name) || path.ends_with(&with_extension))
    }
}

impl<S: Into<String>> FromIterator<S> for FileIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}
