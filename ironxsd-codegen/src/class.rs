//! Generated class model.
//!
//! A [`GeneratedClass`] is assembled member by member while the walker
//! visits a class body and rendered once when the body is exhausted.
//! Declaration, constructor parameter, type hint and validation all come
//! from the same [`Member`], so their orders cannot diverge.

use crate::field::Declaration;
use crate::php::hints::TypeHint;
use crate::synth::{FieldValidation, Synthesized};

/// One field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Declaration style in the class body.
    pub declaration: Declaration,
    /// Constructor validation.
    pub validation: FieldValidation,
    /// Constructor doc line.
    pub hint: TypeHint,
}

impl Member {
    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.validation.field
    }
}

/// A class emitted for one complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    /// Class name.
    pub name: String,
    /// Fields in schema order.
    pub members: Vec<Member>,
}

impl GeneratedClass {
    /// Creates a class with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn add_member(&mut self, declaration: Declaration, synthesized: Synthesized) {
        self.members.push(Member {
            declaration,
            validation: synthesized.validation,
            hint: synthesized.hint,
        });
    }

    /// Returns the field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(Member::name)
    }

    /// Returns a field by name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Returns the type hints in order.
    #[must_use]
    pub fn hints(&self) -> Vec<TypeHint> {
        self.members.iter().map(|m| m.hint.clone()).collect()
    }

    /// Returns true if the class has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
