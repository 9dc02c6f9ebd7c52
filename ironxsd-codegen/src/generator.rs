//! Schema tree walker.
//!
//! The [`Generator`] visits a class body, classifies each child element,
//! accumulates the class's members and recurses into nested complex types.
//! Every class is rendered and written the moment its body is exhausted, so
//! nested classes reach the sink before the class that contains them.

use crate::class::GeneratedClass;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::field::{ChildKind, Declaration, FieldSpec};
use crate::naming::class_name;
use crate::php::ClassGenerator;
use crate::sink::ArtifactSink;
use crate::synth::synthesize;
use ironxsd_schema::{RestrictionCatalog, SchemaError, SchemaNode};
use std::collections::HashSet;

/// A schema node that becomes one generated class.
#[derive(Debug, Clone, Copy)]
pub enum ClassNode<'a> {
    /// An `element` that must carry an inline `complexType`.
    Element(&'a SchemaNode),
    /// A named top-level `complexType`.
    ComplexType(&'a SchemaNode),
    /// A `sequence` placed directly inside an element; named after that element.
    Sequence {
        /// The element owning the sequence.
        owner: &'a SchemaNode,
        /// The sequence itself.
        sequence: &'a SchemaNode,
    },
}

impl<'a> ClassNode<'a> {
    /// Returns the schema name the class is named after.
    ///
    /// # Errors
    /// Returns `SchemaError::MissingAttribute` if the node has no `name`.
    pub fn name(&self) -> Result<&'a str, SchemaError> {
        match self {
            Self::Element(node) | Self::ComplexType(node) => node.require_attr("name"),
            Self::Sequence { owner, .. } => owner.require_attr("name"),
        }
    }

    /// Returns the sequence whose elements become the class fields.
    ///
    /// A sequence wrapping another sequence yields the inner one. A complex
    /// type without a sequence has no fields.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownNodeKind` if an element has no `complexType`.
    pub fn body(&self) -> Result<Option<&'a SchemaNode>, CodegenError> {
        let sequence = match self {
            Self::Element(node) => {
                let complex = node
                    .child("complexType")
                    .ok_or_else(|| CodegenError::unknown_node(node))?;
                complex.child("sequence")
            }
            Self::ComplexType(node) => node.child("sequence"),
            Self::Sequence { sequence, .. } => Some(*sequence),
        };

        Ok(sequence.map(|s| s.child("sequence").unwrap_or(s)))
    }
}

/// Walks a schema tree and emits one class per complex type.
pub struct Generator<'a> {
    catalog: &'a RestrictionCatalog,
    config: &'a GeneratorConfig,
    sink: &'a mut dyn ArtifactSink,
    emitted: HashSet<String>,
    classes: Vec<GeneratedClass>,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(
        catalog: &'a RestrictionCatalog,
        config: &'a GeneratorConfig,
        sink: &'a mut dyn ArtifactSink,
    ) -> Self {
        Self {
            catalog,
            config,
            sink,
            emitted: HashSet::new(),
            classes: Vec::new(),
        }
    }

    /// Generates the root element's classes, then one class per top-level
    /// `complexType`.
    ///
    /// # Returns
    /// Every generated class, in emission order.
    ///
    /// # Errors
    /// Returns the first `CodegenError`; files already written stay on disk.
    pub fn run(mut self, schema: &SchemaNode) -> Result<Vec<GeneratedClass>, CodegenError> {
        match schema.child("element") {
            Some(root) => self.process_node(ClassNode::Element(root))?,
            None => tracing::warn!("schema has no top-level element"),
        }

        for complex in schema.children_named("complexType") {
            self.process_node(ClassNode::ComplexType(complex))?;
        }

        tracing::info!(classes = self.classes.len(), "generation complete");
        Ok(self.classes)
    }

    /// Builds and emits the class for one node, recursing into nested types.
    ///
    /// # Errors
    /// Returns `CodegenError` for unsupported node shapes, invalid attributes,
    /// unrecognised restrictions or failed writes.
    pub fn process_node(&mut self, node: ClassNode<'_>) -> Result<(), CodegenError> {
        let mut class = GeneratedClass::new(class_name(node.name()?));

        if let Some(sequence) = node.body()? {
            for element in sequence.children_named("element") {
                let kind = ChildKind::classify(element);
                tracing::debug!(class = %class.name, element = ?element.name(), ?kind, "classified");

                match kind {
                    ChildKind::NestedSequence(sequence) => {
                        self.process_node(ClassNode::Sequence {
                            owner: element,
                            sequence,
                        })?;
                    }
                    ChildKind::InlineSimple(simple) => {
                        let spec = FieldSpec::inline_simple(element, simple)?;
                        class.add_member(Declaration::NullDefault, synthesize(&spec));
                    }
                    ChildKind::InlineComplex(_) => {
                        let spec = FieldSpec::complex(element)?;
                        class.add_member(Declaration::Bare, synthesize(&spec));
                        self.process_node(ClassNode::Element(element))?;
                    }
                    ChildKind::ExternalRef(type_name) => {
                        let spec = match self.catalog.get(type_name) {
                            Some(info) => FieldSpec::catalogued(element, info)?,
                            None => FieldSpec::complex(element)?,
                        };
                        class.add_member(Declaration::Bare, synthesize(&spec));
                    }
                }
            }
        }

        self.emit(class)
    }

    /// Renders a finished class and hands it to the sink.
    fn emit(&mut self, class: GeneratedClass) -> Result<(), CodegenError> {
        let file_name = self.config.file_name(&class.name);
        let contents = ClassGenerator::new(&self.config.header).generate(&class);

        if !self.emitted.insert(class.name.clone()) {
            tracing::warn!(class = %class.name, "class generated more than once; last write wins");
        }

        self.sink.write_artifact(&file_name, &contents)?;
        tracing::debug!(class = %class.name, fields = class.members.len(), "emitted class");

        self.classes.push(class);
        Ok(())
    }
}
