//! Field classification.
//!
//! Each child `element` of a class body is classified once, by static
//! inspection, into a [`ChildKind`]. Elements that become fields are then
//! resolved into a [`FieldSpec`], the single input shape of the validation
//! synthesizer whether the restriction was declared inline or found in the
//! catalog.

use crate::naming::class_name;
use ironxsd_schema::{
    Occurs, Restriction, RestrictionInfo, SchemaError, SchemaNode, max_occurs, min_occurs,
};

/// How a child element of a sequence contributes to the generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind<'a> {
    /// The element wraps a sequence of its own; it becomes a sibling class.
    NestedSequence(&'a SchemaNode),
    /// The element declares an inline `simpleType`.
    InlineSimple(&'a SchemaNode),
    /// The element declares an inline `complexType`.
    InlineComplex(&'a SchemaNode),
    /// The element references a type declared elsewhere (may be empty).
    ExternalRef(&'a str),
}

impl<'a> ChildKind<'a> {
    /// Classifies a child element.
    #[must_use]
    pub fn classify(element: &'a SchemaNode) -> Self {
        if let Some(sequence) = element.child("sequence") {
            Self::NestedSequence(sequence)
        } else if let Some(simple) = element.child("simpleType") {
            Self::InlineSimple(simple)
        } else if let Some(complex) = element.child("complexType") {
            Self::InlineComplex(complex)
        } else {
            Self::ExternalRef(element.attr("type").unwrap_or_default())
        }
    }
}

/// Declaration style of a field in the class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// `public $name = null;`
    NullDefault,
    /// `public $name;`
    Bare,
}

/// Resolved kind of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar value under a simple-type restriction.
    Simple(Restriction),
    /// Instance of another generated class.
    Complex {
        /// Expected class name.
        type_name: String,
    },
}

/// A field of a generated class with its occurrence constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as declared in the schema.
    pub name: String,
    /// Minimum occurrences.
    pub min_occurs: u32,
    /// Maximum occurrences.
    pub max_occurs: Occurs,
    /// Single-line documentation text.
    pub annotation: String,
    /// Resolved kind.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Resolves an element carrying an inline `simpleType`.
    ///
    /// # Errors
    /// Returns `SchemaError` if the name is missing, the occurrence
    /// attributes are invalid or the restriction base is unrecognised.
    pub fn inline_simple(element: &SchemaNode, simple_type: &SchemaNode) -> Result<Self, SchemaError> {
        let restriction = Restriction::from_simple_type(simple_type)?;
        Self::with_kind(element, FieldKind::Simple(restriction))
    }

    /// Resolves an element whose `type` names a catalogued simple type.
    ///
    /// The result is indistinguishable from an inline declaration with the
    /// same bounds.
    ///
    /// # Errors
    /// Returns `SchemaError` if the name is missing or the occurrence
    /// attributes are invalid.
    pub fn catalogued(element: &SchemaNode, info: &RestrictionInfo) -> Result<Self, SchemaError> {
        Self::with_kind(element, FieldKind::Simple(info.restriction.clone()))
    }

    /// Resolves an element holding an instance of a generated class.
    ///
    /// The expected class is the capitalised `type` attribute, or the
    /// capitalised field name when no type is given.
    ///
    /// # Errors
    /// Returns `SchemaError` if the name is missing or the occurrence
    /// attributes are invalid.
    pub fn complex(element: &SchemaNode) -> Result<Self, SchemaError> {
        let name = element.require_attr("name")?;
        let type_name = match element.attr("type") {
            Some(t) => class_name(t),
            None => class_name(name),
        };
        Self::with_kind(element, FieldKind::Complex { type_name })
    }

    fn with_kind(element: &SchemaNode, kind: FieldKind) -> Result<Self, SchemaError> {
        Ok(Self {
            name: element.require_attr("name")?.to_string(),
            min_occurs: min_occurs(element)?,
            max_occurs: max_occurs(element)?,
            annotation: element.documentation(),
            kind,
        })
    }

    /// Returns true if an absent value is accepted (`minOccurs = 0`).
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }

    /// Returns true if the field holds a sequence of values.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        self.max_occurs.is_many()
    }
}
