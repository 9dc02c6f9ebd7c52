//! Simple-type restrictions.
//!
//! Only three restriction bases carry validation semantics: `string` with
//! length bounds, `decimal` with no bounds, and `integer` with a pattern.

use crate::error::SchemaError;
use crate::node::SchemaNode;

/// Length bounds of a `string` restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthBounds {
    /// `minLength`; 0 when not declared.
    pub min: usize,
    /// `maxLength`; `None` when not declared.
    pub max: Option<usize>,
}

impl LengthBounds {
    /// Creates length bounds.
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

/// A resolved simple-type restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restriction {
    /// `string` base with length bounds.
    String(LengthBounds),
    /// `decimal` base; the value must be numeric.
    Decimal,
    /// `integer` base checked against a regular expression.
    Integer {
        /// `pattern` facet value, empty when not declared.
        pattern: String,
    },
}

impl Restriction {
    /// Returns the schema name of the restriction base.
    #[must_use]
    pub const fn base_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Decimal => "decimal",
            Self::Integer { .. } => "integer",
        }
    }

    /// Resolves the `restriction` child of a `simpleType` node.
    ///
    /// # Arguments
    /// * `simple_type` - The `simpleType` node
    ///
    /// # Errors
    /// Returns `SchemaError::UnrecognizedRestrictionKind` if the base is not
    /// `string`, `decimal` or `integer`, and `SchemaError::InvalidAttribute`
    /// if a length facet is not a non-negative integer.
    pub fn from_simple_type(simple_type: &SchemaNode) -> Result<Self, SchemaError> {
        let restriction = simple_type.child("restriction");
        let base = restriction.and_then(|r| r.attr("base")).unwrap_or("");

        match (base, restriction) {
            ("string", Some(r)) => {
                let min = facet_length(r, "minLength")?.unwrap_or(0);
                let max = facet_length(r, "maxLength")?;
                Ok(Self::String(LengthBounds::new(min, max)))
            }
            ("decimal", Some(_)) => Ok(Self::Decimal),
            ("integer", Some(r)) => Ok(Self::Integer {
                pattern: facet_value(r, "pattern").unwrap_or("").to_string(),
            }),
            _ => Err(SchemaError::UnrecognizedRestrictionKind {
                base: base.to_string(),
                node: simple_type.dump(),
            }),
        }
    }
}

/// Returns the `value` attribute of the first facet with the given tag.
fn facet_value<'a>(restriction: &'a SchemaNode, facet: &str) -> Option<&'a str> {
    restriction.child(facet).and_then(|f| f.attr("value"))
}

/// Parses a length facet.
fn facet_length(restriction: &SchemaNode, facet: &str) -> Result<Option<usize>, SchemaError> {
    facet_value(restriction, facet)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| SchemaError::invalid_attr(facet, "value", value))
        })
        .transpose()
}
