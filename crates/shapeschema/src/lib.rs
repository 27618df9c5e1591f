//! shapeschema: generate JSON Schema from directories of CSV field lists.
//!
//! Each CSV file describes the fields of one data shape: a header row with
//! `Name, Type, Min, Max, Required, Repeat, Notes` columns and one row per
//! field. A `type` of `number` or `text` is a primitive; anything else
//! references another file in the project, found by case-insensitive
//! substring match on its path. Files under `Catalog/` list enum values in
//! a `Value` column; other files are models and become nested objects.
//!
//! # Example
//!
//! ```no_run
//! use shapeschema::SchemaBuilder;
//!
//! let builder = SchemaBuilder::new("content-model").unwrap();
//! let outcome = builder.build("Ship.csv").unwrap();
//!
//! if let Some(schema) = outcome.schema() {
//!     println!("{}", schema.to_json_pretty().unwrap());
//! }
//! ```
//!
//! # Limitations
//!
//! Values cannot contain commas: there is no quoting. Reference cycles
//! between model files are detected and reported as
//! [`SchemaError::CyclicReference`].

pub mod error;
pub mod input;
pub mod schema;

mod builder;

pub use crate::builder::{BuildOutcome, BuilderConfig, NOTHING_TO_BUILD, SchemaBuilder};
pub use error::{Result, SchemaError};
pub use input::{DiskFiles, FileIndex, MemoryFiles, ProjectFiles, Row, RowParser};
pub use schema::{
    Attributes, DEFAULT_CATALOG_SEGMENT, DRAFT_07, JsonType, Property, RawAttributes,
    ResolverConfig, SchemaDocument, SchemaNode, TypeResolver, TypedAttributes,
};
