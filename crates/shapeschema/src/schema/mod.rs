//! JSON Schema model and type-reference resolution.

mod attributes;
mod document;
mod node;
mod resolver;
mod types;

pub use attributes::{Attributes, RawAttributes, TypedAttributes};
pub use document::{DRAFT_07, SchemaDocument};
pub use node::{JsonType, Property, SchemaNode};
pub use resolver::{DEFAULT_CATALOG_SEGMENT, ResolverConfig, TypeResolver};
pub use types::{Depth, TypeToken};
