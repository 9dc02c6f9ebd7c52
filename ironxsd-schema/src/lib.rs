//! # IronXSD Schema
//!
//! XSD schema tree parsing and restriction resolution.
//!
//! This crate provides:
//! - Namespace-prefix stripping and XML parsing into a [`SchemaNode`] tree
//! - Typed simple-type restrictions and occurrence constraints
//! - The [`RestrictionCatalog`] of named top-level simple types

pub mod catalog;
pub mod error;
pub mod node;
pub mod occurs;
pub mod parser;
pub mod restriction;

pub use catalog::{RestrictionCatalog, RestrictionInfo};
pub use error::{ParseError, SchemaError};
pub use node::SchemaNode;
pub use occurs::{Occurs, max_occurs, min_occurs};
pub use parser::{
    DEFAULT_NAMESPACE_PREFIX, parse_schema, parse_schema_file, parse_schema_with_prefix,
};
pub use restriction::{LengthBounds, Restriction};
