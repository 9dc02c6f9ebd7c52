//! Prelude module for convenient imports.
//!
//! ```ignore
//! use ironxsd::prelude::*;
//! ```

// Schema types
pub use ironxsd_schema::{
    Occurs, ParseError, Restriction, RestrictionCatalog, SchemaError, SchemaNode, parse_schema,
    parse_schema_file,
};

// Generation
pub use ironxsd_codegen::{
    Artifact, ArtifactSink, CodegenError, DirectorySink, GeneratedClass, Generator,
    GeneratorConfig, MemorySink, generate, generate_from_file, generate_from_xml,
};

// Constructor evaluation
pub use ironxsd_codegen::{ConstructionError, Value};
