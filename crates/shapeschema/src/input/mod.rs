//! CSV input: row parsing, the file index and project-file sources.

mod files;
mod index;
mod memory;
mod parser;
mod row;

pub use files::{DiskFiles, ProjectFiles};
pub use index::FileIndex;
pub use memory::MemoryFiles;
pub use parser::RowParser;
pub use row::{Column, Row, normalize_name};
