//! Schema tree nodes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::input::Column;

use super::attributes::Attributes;
use super::types::Depth;

/// JSON Schema `type` values produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Number,
    String,
    Object,
}

/// A JSON-Schema-shaped node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<JsonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Property>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl SchemaNode {
    /// A node carrying only a `type`.
    pub fn typed(kind: JsonType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// A string enum.
    pub fn enumeration(values: Vec<String>) -> Self {
        Self {
            kind: Some(JsonType::String),
            enum_values: Some(values),
            ..Self::default()
        }
    }

    /// An object schema. `required` keeps the caller's order and is omitted
    /// when empty.
    pub fn object(properties: IndexMap<String, Property>, required: Vec<String>) -> Self {
        Self {
            kind: Some(JsonType::Object),
            properties: Some(properties),
            required: (!required.is_empty()).then_some(required),
            enum_values: None,
        }
    }
}

/// A named property: its schema plus the attributes from its row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(flatten)]
    pub schema: SchemaNode,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Property {
    /// An empty, untyped property at `depth`.
    pub fn new(depth: Depth) -> Self {
        Self::with_schema(SchemaNode::default(), depth)
    }

    /// A property whose value is `schema`, with fresh attributes.
    pub fn with_schema(schema: SchemaNode, depth: Depth) -> Self {
        Self {
            schema,
            attributes: Attributes::for_depth(depth),
        }
    }

    /// Apply a non-empty attribute column.
    ///
    /// A raw `required` value takes the `required` key over from a resolved
    /// object schema.
    pub fn apply(&mut self, column: Column, value: &str, name: &str) {
        self.attributes.apply(column, value, name);
        if self.attributes.has_raw_required() {
            self.schema.required = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_node() {
        assert_eq!(
            serde_json::to_value(SchemaNode::typed(JsonType::Number)).unwrap(),
            json!({"type": "number"})
        );
    }

    #[test]
    fn test_enumeration_node() {
        let node = SchemaNode::enumeration(vec!["Red".into(), "Blue".into()]);
        assert_eq!(
            serde_json::to_value(node).unwrap(),
            json!({"type": "string", "enum": ["Red", "Blue"]})
        );
    }

    #[test]
    fn test_object_collects_required() {
        let mut hull = Property::with_schema(SchemaNode::typed(JsonType::String), Depth::Nested);
        hull.apply(Column::Required, "Y", "hull");
        let mast = Property::with_schema(SchemaNode::typed(JsonType::Number), Depth::Nested);

        let mut properties = IndexMap::new();
        properties.insert("mast".to_string(), mast);
        properties.insert("hull".to_string(), hull);

        assert_eq!(
            serde_json::to_value(SchemaNode::object(properties, vec!["hull".to_string()]))
                .unwrap(),
            json!({
                "type": "object",
                "properties": {"mast": {"type": "number"}, "hull": {"type": "string"}},
                "required": ["hull"]
            })
        );
    }

    #[test]
    fn test_object_keeps_required_order() {
        let mut properties = IndexMap::new();
        for name in ["a", "b"] {
            properties.insert(
                name.to_string(),
                Property::with_schema(SchemaNode::typed(JsonType::String), Depth::Nested),
            );
        }

        let node = SchemaNode::object(properties, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(serde_json::to_value(node).unwrap()["required"], json!(["b", "a"]));
    }

    #[test]
    fn test_object_without_required() {
        let node = SchemaNode::object(IndexMap::new(), Vec::new());
        assert_eq!(
            serde_json::to_value(node).unwrap(),
            json!({"type": "object", "properties": {}})
        );
    }

    #[test]
    fn test_raw_required_replaces_object_required() {
        let mut inner = IndexMap::new();
        let mut name = Property::with_schema(SchemaNode::typed(JsonType::String), Depth::Nested);
        name.apply(Column::Required, "Y", "name");
        inner.insert("name".to_string(), name);

        let mut crew = Property::with_schema(SchemaNode::object(inner, vec!["name".to_string()]), Depth::Root);
        crew.apply(Column::Required, "N", "crew");

        let value = serde_json::to_value(&crew).unwrap();
        assert_eq!(value["required"], json!("N"));
        assert_eq!(value["type"], json!("object"));
    }
}
