//! Type-reference resolution.
//!
//! A `type` value that is not a primitive names another file in the
//! project. The first indexed path containing the token (case-insensitive)
//! is the match. Files under the catalog segment become string enums built
//! from their `value` column; any other file is a model and becomes an
//! object schema built from its own rows, which may reference further
//! files.
//!
//! Root rows resolve every reference. Nested rows only resolve tokens in
//! the configured allow-list and leave other references untyped.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::error::{Result, SchemaError};
use crate::input::{Column, FileIndex, ProjectFiles, Row, RowParser, normalize_name};

use super::node::{JsonType, Property, SchemaNode};
use super::types::{Depth, TypeToken};

/// Path segment marking catalog (enum) files.
pub const DEFAULT_CATALOG_SEGMENT: &str = "Catalog/";

/// Reference tokens resolved below the root by default.
pub const DEFAULT_NESTED_REFERENCES: &[&str] = &["mode", "crew"];

/// Resolver configuration.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Lowercased tokens that nested rows may resolve.
    pub nested_references: IndexSet<String>,
    /// Path segment marking catalog files.
    pub catalog_segment: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nested_references: DEFAULT_NESTED_REFERENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            catalog_segment: DEFAULT_CATALOG_SEGMENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Replace the nested allow-list. Tokens are lowercased.
    pub fn with_nested_references<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.nested_references = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    /// Set the catalog path segment.
    pub fn with_catalog_segment(mut self, segment: impl Into<String>) -> Self {
        self.catalog_segment = segment.into();
        self
    }
}

/// Files currently being resolved, outermost first.
#[derive(Debug, Default)]
struct ResolutionChain {
    frames: Vec<(String, String)>,
}

impl ResolutionChain {
    fn contains_path(&self, path: &str) -> bool {
        self.frames.iter().any(|(_, p)| p == path)
    }

    fn cycle_through(&self, token: &str) -> SchemaError {
        let mut chain: Vec<String> = self.frames.iter().map(|(t, _)| t.clone()).collect();
        chain.push(token.to_string());
        SchemaError::CyclicReference { chain }
    }
}

/// Resolves type tokens against a file index.
pub struct TypeResolver<'a> {
    files: &'a dyn ProjectFiles,
    index: &'a FileIndex,
    config: &'a ResolverConfig,
    parser: RowParser,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver over an index of `files`.
    pub fn new(files: &'a dyn ProjectFiles, index: &'a FileIndex, config: &'a ResolverConfig) -> Self {
        Self {
            files,
            index,
            config,
            parser: RowParser::new(),
        }
    }

    /// Resolve a type token to a schema node.
    ///
    /// An unmatched token is not an error: it is logged and resolves to
    /// `{"type": "string"}`. A reference cycle fails with
    /// [`SchemaError::CyclicReference`].
    pub fn resolve(&self, token: &str) -> Result<SchemaNode> {
        self.resolve_in(&token.to_lowercase(), &mut ResolutionChain::default())
    }

    /// Build the properties of a root file's rows.
    pub fn root_properties(&self, rows: &[Row]) -> Result<IndexMap<String, Property>> {
        let (properties, _) = self.properties(rows, Depth::Root, &mut ResolutionChain::default())?;
        Ok(properties)
    }

    fn resolve_in(&self, token: &str, chain: &mut ResolutionChain) -> Result<SchemaNode> {
        let Some(path) = self.index.find_containing(token) else {
            warn!(token, "No file matches type reference, falling back to string");
            return Ok(SchemaNode::typed(JsonType::String));
        };

        if chain.contains_path(path) {
            return Err(chain.cycle_through(token));
        }

        if self.is_catalog(path) {
            debug!(token, path, "Resolving catalog");
            return self.catalog_schema(path);
        }

        debug!(token, path, "Resolving model");
        chain.frames.push((token.to_string(), path.to_string()));
        let node = self.model_schema(path, chain);
        chain.frames.pop();
        node
    }

    fn is_catalog(&self, path: &str) -> bool {
        path.contains(self.config.catalog_segment.as_str())
    }

    fn catalog_schema(&self, path: &str) -> Result<SchemaNode> {
        let values = self
            .parser
            .parse_file(self.files, path)?
            .iter()
            .map(Row::value)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        Ok(SchemaNode::enumeration(values))
    }

    fn model_schema(&self, path: &str, chain: &mut ResolutionChain) -> Result<SchemaNode> {
        let rows = self.parser.parse_file(self.files, path)?;
        let (properties, required) = self.properties(&rows, Depth::Nested, chain)?;
        Ok(SchemaNode::object(properties, required))
    }

    /// Fold rows into properties. A later row with the same name replaces
    /// the earlier property but keeps its position. The required list
    /// follows the order of the rows whose `"Y"` is still in effect.
    fn properties(
        &self,
        rows: &[Row],
        depth: Depth,
        chain: &mut ResolutionChain,
    ) -> Result<(IndexMap<String, Property>, Vec<String>)> {
        let mut properties = IndexMap::new();
        let mut required: Vec<String> = Vec::new();
        for row in rows {
            let Some((name, property)) = self.property(row, depth, chain)? else {
                continue;
            };

            required.retain(|r| *r != name);
            if property.attributes.is_required() {
                required.push(name.clone());
            }
            if properties.insert(name.clone(), property).is_some() {
                debug!(property = %name, "Later row replaces property");
            }
        }
        Ok((properties, required))
    }

    /// Build one property. Rows without a name are skipped.
    ///
    /// Root rows apply their columns in header order, so a reference
    /// replaces whatever earlier columns set. Nested rows classify the type
    /// first and then apply the attribute columns.
    fn property(
        &self,
        row: &Row,
        depth: Depth,
        chain: &mut ResolutionChain,
    ) -> Result<Option<(String, Property)>> {
        let name = normalize_name(row.name());
        if name.is_empty() {
            return Ok(None);
        }

        let mut property = Property::new(depth);
        if depth == Depth::Nested {
            self.apply_type(&mut property, row.type_token(), &name, depth, chain)?;
        }

        for (column, value) in row.columns() {
            if value.is_empty() {
                continue;
            }
            match column {
                Column::Name | Column::Repeat | Column::Value | Column::Other => {}
                Column::Type if depth == Depth::Root => {
                    self.apply_type(&mut property, value, &name, depth, chain)?;
                }
                Column::Type => {}
                Column::Min | Column::Max | Column::Required | Column::Notes => {
                    property.apply(column, value, &name);
                }
            }
        }

        Ok(Some((name, property)))
    }

    /// Set a primitive type, or replace the property with a resolved
    /// reference when `depth` permits it.
    fn apply_type(
        &self,
        property: &mut Property,
        value: &str,
        name: &str,
        depth: Depth,
        chain: &mut ResolutionChain,
    ) -> Result<()> {
        match TypeToken::parse(value) {
            TypeToken::Empty => {}
            TypeToken::Primitive(kind) => property.schema.kind = Some(kind),
            TypeToken::Reference(token)
                if depth.permits(&token, &self.config.nested_references) =>
            {
                *property = Property::with_schema(self.resolve_in(&token, chain)?, depth);
            }
            TypeToken::Reference(token) => {
                debug!(property = %name, token = %token, "Leaving nested reference untyped");
            }
        }
        Ok(())
    }
}
