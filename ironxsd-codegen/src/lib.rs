//! # IronXSD Codegen
//!
//! PHP class generation from XSD schemas.
//!
//! This crate provides:
//! - Classification of schema elements into class fields
//! - Validation synthesis from simple-type restrictions and occurrences
//! - PHP class rendering with aligned constructor doc blocks
//! - A reference evaluator for the generated constructor checks
//! - Output sinks writing to a directory or to memory

pub mod check;
pub mod class;
pub mod config;
pub mod error;
pub mod field;
pub mod generator;
pub mod messages;
pub mod naming;
pub mod php;
pub mod sink;
pub mod synth;

pub use check::{ConstructionError, Value};
pub use class::{GeneratedClass, Member};
pub use config::{DEFAULT_FILE_SUFFIX, DocTags, GeneratorConfig, HeaderInfo};
pub use error::CodegenError;
pub use field::{ChildKind, Declaration, FieldKind, FieldSpec};
pub use generator::{ClassNode, Generator};
pub use sink::{Artifact, ArtifactSink, DirectorySink, MemorySink};
pub use synth::{FieldValidation, LeafCheck, Rule, Synthesized, synthesize};

use ironxsd_schema::{RestrictionCatalog, SchemaNode};
use std::path::Path;

/// Generates every class of a parsed schema into a sink.
///
/// # Arguments
/// * `schema` - The `schema` root node
/// * `config` - Output configuration
/// * `sink` - Destination of the generated files
///
/// # Returns
/// The generated classes, in emission order.
///
/// # Errors
/// Returns `CodegenError` if the catalog cannot be built or generation fails.
pub fn generate(
    schema: &SchemaNode,
    config: &GeneratorConfig,
    sink: &mut dyn ArtifactSink,
) -> Result<Vec<GeneratedClass>, CodegenError> {
    let catalog = RestrictionCatalog::build(schema)?;
    tracing::info!(
        restrictions = catalog.len(),
        "built restriction catalog"
    );
    Generator::new(&catalog, config, sink).run(schema)
}

/// Generates PHP classes from an XSD schema string.
///
/// # Arguments
/// * `xml` - XSD schema content
/// * `config` - Output configuration
///
/// # Returns
/// The generated files, in emission order.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str, config: &GeneratorConfig) -> Result<Vec<Artifact>, CodegenError> {
    let schema = ironxsd_schema::parse_schema_with_prefix(xml, &config.namespace_prefix)?;
    let mut sink = MemorySink::new();
    generate(&schema, config, &mut sink)?;
    Ok(sink.into_artifacts())
}

/// Generates PHP classes from an XSD schema file into a directory.
///
/// Existing files with the same names are overwritten. Files written before
/// a failure are left in place.
///
/// # Arguments
/// * `path` - Path to the XSD schema file
/// * `dir` - Output directory
/// * `config` - Output configuration
///
/// # Returns
/// The generated classes, in emission order.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation or writing fails.
pub fn generate_from_file(
    path: &Path,
    dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedClass>, CodegenError> {
    let schema = ironxsd_schema::parse_schema_file(path, &config.namespace_prefix)?;
    tracing::info!(schema = %path.display(), out = %dir.display(), "generating classes");
    let mut sink = DirectorySink::new(dir);
    generate(&schema, config, &mut sink)
}
