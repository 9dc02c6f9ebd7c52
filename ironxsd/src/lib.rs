//! # IronXSD
//!
//! Generates PHP classes with validating constructors from XSD schemas.
//!
//! Each complex type reachable from the schema root, and each standalone
//! top-level `complexType`, becomes one class file. Simple-type
//! restrictions (`string` length bounds, `decimal`, `integer` patterns) and
//! `minOccurs`/`maxOccurs` become constructor checks that throw on invalid
//! input.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironxsd::prelude::*;
//!
//! let config = GeneratorConfig::new().package("Library");
//! for artifact in generate_from_xml(xsd, &config)? {
//!     println!("{}", artifact.file_name);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XSD parsing, restrictions and the restriction catalog
//! - [`codegen`] - Field classification, validation synthesis and PHP rendering

pub mod prelude;

/// Schema parsing and restriction resolution.
pub mod schema {
    pub use ironxsd_schema::*;
}

/// PHP class generation.
pub mod codegen {
    pub use ironxsd_codegen::*;
}

// Re-export commonly used items at the crate root
pub use ironxsd_codegen::{
    CodegenError, GeneratedClass, GeneratorConfig, generate, generate_from_file,
    generate_from_xml,
};
pub use ironxsd_schema::{ParseError, SchemaError, SchemaNode, parse_schema};
