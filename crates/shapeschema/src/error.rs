//! Error types for the shapeschema library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for schema generation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The project root is missing or is not a directory.
    #[error("Invalid root directory '{path}'")]
    InvalidRoot { path: PathBuf },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error while walking the project directory.
    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// No indexed file matches the requested root schema name.
    #[error("Schema file not found: {0}")]
    SchemaNotFound(String),

    /// A type reference leads back to a file that is still being resolved.
    #[error("Cyclic type reference: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for schema generation.
pub type Result<T> = std::result::Result<T, SchemaError>;
