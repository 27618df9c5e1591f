//! CSV field-list parser.
//!
//! Field lists are plain comma-separated text: one header line, one line per
//! row, no quoting. A comma inside a value splits it into two columns.

use indexmap::IndexMap;
use tracing::error;

use crate::error::Result;

use super::files::ProjectFiles;
use super::row::{Row, normalize_name};

/// Parses CSV text into normalized rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowParser;

impl RowParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Read a project file and parse it.
    ///
    /// Read failures are logged with the path and returned to the caller.
    pub fn parse_file(&self, files: &dyn ProjectFiles, path: &str) -> Result<Vec<Row>> {
        let text = files.read_to_string(path).inspect_err(|e| {
            error!(path, error = %e, "Failed to read CSV file");
        })?;
        self.parse_str(&text)
    }

    /// Parse CSV text.
    ///
    /// Header tokens are normalized like property names. Values are trimmed,
    /// missing trailing columns read as `""` and extra columns are dropped.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(text.trim().as_bytes());

        let mut records = reader.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(normalize_name).collect(),
            None => return Ok(Vec::new()),
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            let fields: IndexMap<String, String> = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = record.get(i).unwrap_or("").to_string();
                    (header.clone(), value)
                })
                .collect();
            rows.push(Row::new(fields));
        }

        Ok(rows)
    }
}
