//! Top-level schema document and JSON output.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, SchemaError};

use super::node::Property;

/// JSON Schema draft-07 meta-schema URI.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// The generated root schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDocument {
    #[serde(rename = "$schema")]
    pub schema_uri: String,
    pub properties: IndexMap<String, Property>,
}

impl SchemaDocument {
    /// Create a document from root properties.
    pub fn new(schema_uri: impl Into<String>, properties: IndexMap<String, Property>) -> Self {
        Self {
            schema_uri: schema_uri.into(),
            properties,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Write the document as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SchemaError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| SchemaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
