//! Normalized CSV rows.

use indexmap::IndexMap;

/// Normalize a header or property name: trim, spaces to underscores, lowercase.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_lowercase()
}

/// Recognized field-list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Type,
    Min,
    Max,
    Required,
    /// Captured but not interpreted.
    Repeat,
    Notes,
    /// Allowed value of a catalog file.
    Value,
    /// Any column the generator does not know about.
    Other,
}

impl Column {
    /// Classify a normalized header key.
    pub fn from_key(key: &str) -> Self {
        match key {
            "name" => Column::Name,
            "type" => Column::Type,
            "min" => Column::Min,
            "max" => Column::Max,
            "required" => Column::Required,
            "repeat" => Column::Repeat,
            "notes" => Column::Notes,
            "value" => Column::Value,
            _ => Column::Other,
        }
    }
}

/// One data line of a CSV file, keyed by normalized header.
///
/// Fields keep header order, which decides the order in which a row's
/// columns are applied to the property it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: IndexMap<String, String>,
}

impl Row {
    /// Create a row from already-normalized `(header, value)` pairs.
    pub fn new(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }

    /// Value of a field, or `""` when the column is absent.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// The `name` column.
    pub fn name(&self) -> &str {
        self.get("name")
    }

    /// The `type` column.
    pub fn type_token(&self) -> &str {
        self.get("type")
    }

    /// The `value` column (catalog files).
    pub fn value(&self) -> &str {
        self.get("value")
    }

    /// All fields in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Recognized columns in header order.
    pub fn columns(&self) -> impl Iterator<Item = (Column, &str)> {
        self.fields()
            .map(|(key, value)| (Column::from_key(key), value))
            .filter(|(column, _)| *column != Column::Other)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Crew Size "), "crew_size");
        assert_eq!(normalize_name("REQUIRED"), "required");
        assert_eq!(normalize_name("a  b"), "a__b");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_normalize_name_is_idempotent() {
        let once = normalize_name(" Max Speed ");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn test_missing_field_is_empty() {
        let r = row(&[("name", "hull")]);
        assert_eq!(r.name(), "hull");
        assert_eq!(r.type_token(), "");
        assert_eq!(r.get("notes"), "");
    }

    #[test]
    fn test_columns_skip_unknown_and_keep_order() {
        let r = row(&[("notes", "n"), ("owner", "x"), ("name", "a"), ("type", "number")]);
        let columns: Vec<Column> = r.columns().map(|(c, _)| c).collect();
        assert_eq!(columns, vec![Column::Notes, Column::Name, Column::Type]);
    }

    #[test]
    fn test_column_from_key() {
        assert_eq!(Column::from_key("repeat"), Column::Repeat);
        assert_eq!(Column::from_key("value"), Column::Value);
        assert_eq!(Column::from_key("min_length"), Column::Other);
    }
}
