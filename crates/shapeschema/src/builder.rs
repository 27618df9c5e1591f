//! Schema builder and public entry point.

use std::fmt;
use std::path::Path;

use once_cell::unsync::OnceCell;
use tracing::{debug, info};

use crate::error::{Result, SchemaError};
use crate::input::{DiskFiles, FileIndex, ProjectFiles, RowParser};
use crate::schema::{DRAFT_07, ResolverConfig, SchemaDocument, TypeResolver};

/// Returned in place of a schema when the requested name is empty.
pub const NOTHING_TO_BUILD: &str = "Nothing to build";

/// Configuration for schema builds.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Reference resolution settings.
    pub resolver: ResolverConfig,
    /// Value of the `$schema` key.
    pub schema_uri: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            schema_uri: DRAFT_07.to_string(),
        }
    }
}

/// Result of a build request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The requested name was empty.
    Nothing,
    /// The generated schema.
    Schema(SchemaDocument),
}

impl BuildOutcome {
    /// The schema, if one was built.
    pub fn schema(&self) -> Option<&SchemaDocument> {
        match self {
            BuildOutcome::Nothing => None,
            BuildOutcome::Schema(doc) => Some(doc),
        }
    }

    /// Consume the outcome, returning the schema if one was built.
    pub fn into_schema(self) -> Option<SchemaDocument> {
        match self {
            BuildOutcome::Nothing => None,
            BuildOutcome::Schema(doc) => Some(doc),
        }
    }

    /// True for the empty-name sentinel.
    pub fn is_nothing(&self) -> bool {
        matches!(self, BuildOutcome::Nothing)
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildOutcome::Nothing => write!(f, "{}", NOTHING_TO_BUILD),
            BuildOutcome::Schema(doc) => {
                let json = doc.to_json_pretty().map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}

/// Builds JSON Schema documents from the CSV files of one project.
///
/// The file index is read on the first build and reused for the lifetime
/// of the builder.
pub struct SchemaBuilder {
    config: BuilderConfig,
    files: Box<dyn ProjectFiles>,
    index: OnceCell<FileIndex>,
    parser: RowParser,
}

impl SchemaBuilder {
    /// Open a project root directory with default configuration.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(root, BuilderConfig::default())
    }

    /// Open a project root directory with custom configuration.
    pub fn with_config(root: impl AsRef<Path>, config: BuilderConfig) -> Result<Self> {
        Ok(Self::from_files(DiskFiles::new(root)?, config))
    }

    /// Build over any project-file source.
    pub fn from_files(files: impl ProjectFiles + 'static, config: BuilderConfig) -> Self {
        Self {
            config,
            files: Box::new(files),
            index: OnceCell::new(),
            parser: RowParser::new(),
        }
    }

    /// The builder configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The project's file index, read once and cached.
    pub fn file_index(&self) -> Result<&FileIndex> {
        self.index.get_or_try_init(|| self.files.index())
    }

    /// Build the schema rooted at the first indexed file whose path ends
    /// with `name` (a bare name also matches `<name>.csv`).
    ///
    /// An empty name yields [`BuildOutcome::Nothing`]; a name matching no
    /// file fails with [`SchemaError::SchemaNotFound`].
    pub fn build(&self, name: &str) -> Result<BuildOutcome> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Empty schema name, nothing to build");
            return Ok(BuildOutcome::Nothing);
        }

        let index = self.file_index()?;
        let path = index
            .find_by_suffix(name)
            .ok_or_else(|| SchemaError::SchemaNotFound(name.to_string()))?;

        let rows = self.parser.parse_file(self.files.as_ref(), path)?;
        let resolver = TypeResolver::new(self.files.as_ref(), index, &self.config.resolver);
        let properties = resolver.root_properties(&rows)?;

        info!(schema = path, properties = properties.len(), "Built schema");
        Ok(BuildOutcome::Schema(SchemaDocument::new(
            self.config.schema_uri.clone(),
            properties,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MemoryFiles;
    use serde_json::json;

    fn fleet() -> MemoryFiles {
        MemoryFiles::new()
            .with_file(
                "Types/Ship.csv",
                "Name,Type,Min,Max,Required,Repeat,Notes\n\
                 Hull Number,text,2,8,Y,,Registry id\n\
                 length,number,,,,,\n\
                 color,color,,,,,\n\
                 captain,crew,,,Y,,\n\
                 engine,engine,,,,,\n",
            )
            .with_file("Catalog/Color.csv", "Value\nRed\n\nBlue\n")
            .with_file(
                "Types/Crew.csv",
                "Name,Type,Min,Required\nrank,text,1,Y\nberth,engine,,\n",
            )
            .with_file("Types/Engine.csv", "Name,Type\npower,number\n")
    }

    fn build(files: MemoryFiles, name: &str) -> Result<BuildOutcome> {
        SchemaBuilder::from_files(files, BuilderConfig::default()).build(name)
    }

    #[test]
    fn test_build_root_document() {
        let outcome = build(fleet(), "Ship.csv").unwrap();
        let doc = outcome.schema().unwrap().to_value().unwrap();

        assert_eq!(
            doc,
            json!({
                "$schema": "http://json-schema.org/draft-07/schema#",
                "properties": {
                    "hull_number": {
                        "type": "string",
                        "minLength": "2",
                        "maxLength": "8",
                        "required": "Y",
                        "description": "Registry id"
                    },
                    "length": {"type": "number"},
                    "color": {"type": "string", "enum": ["Red", "Blue"]},
                    "captain": {
                        "type": "object",
                        "properties": {
                            "rank": {"type": "string", "minLength": 1},
                            "berth": {}
                        },
                        "required": "Y"
                    },
                    "engine": {
                        "type": "object",
                        "properties": {"power": {"type": "number"}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_root_and_nested_required_shapes_differ() {
        let files = MemoryFiles::new()
            .with_file("Types/Ship.csv", "Name,Type,Required\nfoo,number,\nbar,text,Y\nlead,crew,\n")
            .with_file("Types/Crew.csv", "Name,Type,Required\nfoo,number,\nbar,text,Y\n");

        let doc = build(files, "Ship").unwrap().into_schema().unwrap().to_value().unwrap();

        assert_eq!(doc["properties"]["bar"], json!({"type": "string", "required": "Y"}));
        assert_eq!(
            doc["properties"]["lead"],
            json!({
                "type": "object",
                "properties": {"foo": {"type": "number"}, "bar": {"type": "string"}},
                "required": ["bar"]
            })
        );
    }

    #[test]
    fn test_empty_name_is_sentinel() {
        let outcome = build(fleet(), "  ").unwrap();
        assert!(outcome.is_nothing());
        assert_eq!(outcome.to_string(), NOTHING_TO_BUILD);
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let err = build(fleet(), "Harbor.csv").unwrap_err();
        assert!(matches!(err, SchemaError::SchemaNotFound(ref name) if name == "Harbor.csv"));
    }

    #[test]
    fn test_unresolved_root_reference_is_string() {
        let files = MemoryFiles::new().with_file("Types/Ship.csv", "Name,Type\nflag,banner\n");
        let doc = build(files, "Ship.csv").unwrap().into_schema().unwrap();
        assert_eq!(doc.to_value().unwrap()["properties"]["flag"], json!({"type": "string"}));
    }

    #[test]
    fn test_index_is_cached() {
        let builder = SchemaBuilder::from_files(fleet(), BuilderConfig::default());
        let first = builder.file_index().unwrap() as *const FileIndex;
        builder.build("Ship.csv").unwrap();
        let second = builder.file_index().unwrap() as *const FileIndex;
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = SchemaBuilder::from_files(fleet(), BuilderConfig::default());
        assert_eq!(builder.build("Ship.csv").unwrap(), builder.build("Ship.csv").unwrap());
    }

    #[test]
    fn test_custom_schema_uri() {
        let config = BuilderConfig {
            schema_uri: "https://json-schema.org/draft/2020-12/schema".to_string(),
            ..BuilderConfig::default()
        };
        let outcome = SchemaBuilder::from_files(fleet(), config).build("Ship.csv").unwrap();
        assert_eq!(
            outcome.schema().unwrap().schema_uri,
            "https://json-schema.org/draft/2020-12/schema"
        );
    }

    #[test]
    fn test_display_outputs_json() {
        let text = build(fleet(), "Ship.csv").unwrap().to_string();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["properties"]["hull_number"].is_object());
    }
}
