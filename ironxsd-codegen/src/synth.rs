//! Validation synthesis.
//!
//! Turns a [`FieldSpec`] into a [`FieldValidation`] (what the generated
//! constructor checks, in order) and a [`TypeHint`] (one `@param` line of
//! the constructor's doc block). Neither carries any target-language text;
//! the PHP renderer and the reference evaluator both consume them.

use crate::field::{FieldKind, FieldSpec};
use crate::naming::variable;
use crate::php::hints::TypeHint;
use ironxsd_schema::{LengthBounds, Occurs, Restriction};

/// Per-item check of a simple-type value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafCheck {
    /// String length within bounds.
    Length(LengthBounds),
    /// Numeric string (decimal).
    Numeric,
    /// Regular expression match (integer).
    Pattern(String),
}

impl From<&Restriction> for LeafCheck {
    fn from(restriction: &Restriction) -> Self {
        match restriction {
            Restriction::String(bounds) => Self::Length(*bounds),
            Restriction::Decimal => Self::Numeric,
            Restriction::Integer { pattern } => Self::Pattern(pattern.clone()),
        }
    }
}

/// What a field's value is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Every scalar item passes the leaf check.
    Leaf(LeafCheck),
    /// Every item is an instance of the named class.
    Instance {
        /// Expected class name.
        type_name: String,
    },
}

/// The validation a generated constructor performs for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    /// Field name.
    pub field: String,
    /// Minimum occurrences.
    pub min_occurs: u32,
    /// Maximum occurrences.
    pub max_occurs: Occurs,
    /// Value rule.
    pub rule: Rule,
}

impl FieldValidation {
    /// Returns true if an absent value skips the rule entirely.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }

    /// Returns true if a required, single value must be present.
    #[must_use]
    pub const fn requires_value(&self) -> bool {
        self.min_occurs == 1
    }

    /// Returns true if the value must be a sequence.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        self.max_occurs.is_many()
    }
}

/// Synthesizer output for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesized {
    /// Constructor validation.
    pub validation: FieldValidation,
    /// Doc-block fragment.
    pub hint: TypeHint,
}

/// Synthesizes the validation and type hint for a field.
#[must_use]
pub fn synthesize(spec: &FieldSpec) -> Synthesized {
    match &spec.kind {
        FieldKind::Simple(restriction) => synthesize_simple(spec, restriction),
        FieldKind::Complex { type_name } => synthesize_complex(spec, type_name),
    }
}

/// Simple-type path: leaf check wrapped in occurrence handling.
fn synthesize_simple(spec: &FieldSpec, restriction: &Restriction) -> Synthesized {
    let tail = match restriction {
        Restriction::String(bounds) => format!(
            "{{{}, {}}} {}",
            bounds.min,
            bounds.max.map(|m| m.to_string()).unwrap_or_default(),
            spec.annotation
        ),
        Restriction::Decimal => spec.annotation.clone(),
        Restriction::Integer { pattern } => format!("{} {}", pattern, spec.annotation),
    };

    Synthesized {
        validation: FieldValidation {
            field: spec.name.clone(),
            min_occurs: spec.min_occurs,
            max_occurs: spec.max_occurs,
            rule: Rule::Leaf(LeafCheck::from(restriction)),
        },
        hint: TypeHint::new(restriction.base_name(), variable(&spec.name), tail),
    }
}

/// Complex-type path: class membership wrapped in occurrence handling.
fn synthesize_complex(spec: &FieldSpec, type_name: &str) -> Synthesized {
    let array = if spec.is_many() { "[]" } else { "" };
    let optional = if spec.is_optional() { "Optional" } else { "" };
    let tail = format!(
        "{{{}, {}}} {} {}",
        spec.min_occurs, spec.max_occurs, optional, spec.annotation
    );

    Synthesized {
        validation: FieldValidation {
            field: spec.name.clone(),
            min_occurs: spec.min_occurs,
            max_occurs: spec.max_occurs,
            rule: Rule::Instance {
                type_name: type_name.to_string(),
            },
        },
        hint: TypeHint::new(format!("{}{}", type_name, array), variable(&spec.name), tail),
    }
}
