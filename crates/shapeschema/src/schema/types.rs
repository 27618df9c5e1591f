//! Type tokens and resolution depth.

use indexmap::IndexSet;

use super::node::JsonType;

/// A classified `type` column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    /// The column is blank.
    Empty,
    /// `number` or `text`.
    Primitive(JsonType),
    /// Anything else, lowercased; looked up in the file index.
    Reference(String),
}

impl TypeToken {
    /// Classify a raw `type` value.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();
        match token.as_str() {
            "" => TypeToken::Empty,
            "number" => TypeToken::Primitive(JsonType::Number),
            "text" => TypeToken::Primitive(JsonType::String),
            _ => TypeToken::Reference(token),
        }
    }
}

/// Where a row sits in the schema tree.
///
/// Root rows resolve any reference and keep their attributes as raw
/// strings. Nested rows only resolve allow-listed references and coerce
/// their attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Root,
    Nested,
}

impl Depth {
    /// Whether a reference token may be resolved at this depth.
    pub fn permits(&self, token: &str, nested_references: &IndexSet<String>) -> bool {
        match self {
            Depth::Root => true,
            Depth::Nested => nested_references.contains(token),
        }
    }
}
