//! Per-property attributes taken from the `min`, `max`, `required` and
//! `notes` columns.
//!
//! Root properties keep those values exactly as written in the CSV. Nested
//! properties coerce them: lengths become integers and `required` is
//! collected into the parent object's `required` list.

use serde::Serialize;
use tracing::warn;

use crate::input::Column;

use super::types::Depth;

/// Attributes of a root-level property, stored as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RawAttributes {
    fn apply(&mut self, column: Column, value: &str) {
        let value = Some(value.to_string());
        match column {
            Column::Min => self.min_length = value,
            Column::Max => self.max_length = value,
            Column::Required => self.required = value,
            Column::Notes => self.description = value,
            _ => {}
        }
    }
}

/// Attributes of a nested property, coerced to their schema types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parent object lists this property as required.
    #[serde(skip)]
    pub required: bool,
}

impl TypedAttributes {
    fn apply(&mut self, column: Column, value: &str, property: &str) {
        match column {
            Column::Min => self.min_length = parse_length(value, property, "min"),
            Column::Max => self.max_length = parse_length(value, property, "max"),
            Column::Required => self.required = value == "Y",
            Column::Notes => self.description = Some(value.to_string()),
            _ => {}
        }
    }
}

fn parse_length(value: &str, property: &str, column: &str) -> Option<i64> {
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(property, column, value, "Ignoring non-integer length");
            None
        }
    }
}

/// Attribute shape selected by the depth of the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attributes {
    Raw(RawAttributes),
    Typed(TypedAttributes),
}

impl Attributes {
    /// Empty attributes for a property at `depth`.
    pub fn for_depth(depth: Depth) -> Self {
        match depth {
            Depth::Root => Attributes::Raw(RawAttributes::default()),
            Depth::Nested => Attributes::Typed(TypedAttributes::default()),
        }
    }

    /// Apply a non-empty column value.
    pub fn apply(&mut self, column: Column, value: &str, property: &str) {
        match self {
            Attributes::Raw(raw) => raw.apply(column, value),
            Attributes::Typed(typed) => typed.apply(column, value, property),
        }
    }

    /// Whether the parent object should list the property as required.
    pub fn is_required(&self) -> bool {
        match self {
            Attributes::Raw(_) => false,
            Attributes::Typed(typed) => typed.required,
        }
    }

    /// Whether a raw `required` value has been set.
    pub fn has_raw_required(&self) -> bool {
        matches!(self, Attributes::Raw(raw) if raw.required.is_some())
    }
}
