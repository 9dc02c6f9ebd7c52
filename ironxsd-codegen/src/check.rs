//! Reference evaluator for generated constructors.
//!
//! Applies a [`FieldValidation`] to a loosely typed [`Value`] the way the
//! emitted PHP does: `== null` treats `null`, `""` and `[]` alike, `count`
//! of a scalar is 1, `is_numeric` accepts surrounding whitespace and
//! exponents, and `preg_match` is unanchored. A pattern that fails to
//! compile is accepted, as `preg_match` returning `false` is `!== 0`.

use crate::class::GeneratedClass;
use crate::messages;
use crate::synth::{FieldValidation, LeafCheck, Rule};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
});

/// An argument passed to a generated constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `null`.
    Null,
    /// A string or number, as text.
    Scalar(String),
    /// An array.
    List(Vec<Value>),
    /// An instance of the named class.
    Object(String),
}

impl Value {
    /// Creates a scalar value.
    pub fn scalar(s: impl Into<String>) -> Self {
        Self::Scalar(s.into())
    }

    /// Creates an array of scalars.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(|s| Self::Scalar(s.into())).collect())
    }

    /// Creates an object of the named class.
    pub fn object(class: impl Into<String>) -> Self {
        Self::Object(class.into())
    }

    /// `$value == null`.
    #[must_use]
    pub fn is_null_like(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Scalar(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Object(_) => false,
        }
    }

    /// `count($value)`.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Null => 0,
            Self::List(items) => items.len(),
            Self::Scalar(_) | Self::Object(_) => 1,
        }
    }

    /// `strlen($value)` and string context in general.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Scalar(s) => s,
            _ => "",
        }
    }

    /// `is_numeric($value)`.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        match (self, (*NUMERIC).as_ref()) {
            (Self::Scalar(s), Ok(re)) => re.is_match(s),
            _ => false,
        }
    }

    /// `get_class($value)`.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Object(class) => Some(class),
            _ => None,
        }
    }
}

/// A validation failure raised by a generated constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionError {
    /// Field that failed.
    pub field: String,
    /// Exception message, identical to the generated code's.
    pub message: String,
}

impl ConstructionError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConstructionError {}

impl FieldValidation {
    /// Evaluates the field's constructor checks against a value.
    ///
    /// # Errors
    /// Returns the first `ConstructionError` the generated code would throw.
    pub fn check(&self, value: &Value) -> Result<(), ConstructionError> {
        match &self.rule {
            Rule::Leaf(leaf) => self.check_simple(leaf, value),
            Rule::Instance { type_name } => {
                if self.is_optional() && value.is_null_like() {
                    return Ok(());
                }
                self.check_instance(type_name, value)
            }
        }
    }

    fn check_simple(&self, leaf: &LeafCheck, value: &Value) -> Result<(), ConstructionError> {
        let pattern = match leaf {
            LeafCheck::Pattern(pattern) => Regex::new(pattern).ok(),
            _ => None,
        };

        if self.is_many() {
            self.check_counts(value, &self.field)?;
            if let Value::List(items) = value {
                for item in items {
                    self.check_item(leaf, pattern.as_ref(), item)?;
                }
            }
            return Ok(());
        }

        if self.requires_value() && value.is_null_like() {
            return Err(self.fail(messages::must_be_set(&self.field)));
        }
        self.check_item(leaf, pattern.as_ref(), value)
    }

    /// `pattern` is the compiled `LeafCheck::Pattern`, `None` if it is invalid.
    fn check_item(
        &self,
        leaf: &LeafCheck,
        pattern: Option<&Regex>,
        item: &Value,
    ) -> Result<(), ConstructionError> {
        if self.is_optional() && item.is_null_like() {
            return Ok(());
        }

        let name = &self.field;
        match leaf {
            LeafCheck::Length(bounds) => {
                let len = item.as_text().len();
                if len < bounds.min {
                    return Err(self.fail(messages::min_length(name, bounds.min)));
                }
                if let Some(max) = bounds.max {
                    if len > max {
                        return Err(self.fail(messages::max_length(name, max)));
                    }
                }
                Ok(())
            }
            LeafCheck::Numeric => {
                if item.is_numeric() {
                    Ok(())
                } else {
                    Err(self.fail(messages::numeric(name)))
                }
            }
            LeafCheck::Pattern(_) => match pattern {
                Some(re) if !re.is_match(item.as_text()) => Err(self.fail(messages::numeric(name))),
                _ => Ok(()),
            },
        }
    }

    fn check_instance(&self, type_name: &str, value: &Value) -> Result<(), ConstructionError> {
        let name = &self.field;

        if self.is_many() {
            self.check_counts(value, type_name)?;
            if let Value::List(items) = value {
                for item in items {
                    if item.class_name() != Some(type_name) {
                        return Err(self.fail(messages::item_type(name, type_name)));
                    }
                }
            }
            return Ok(());
        }

        if self.requires_value() && value.is_null_like() {
            return Err(self.fail(messages::must_be_set(name)));
        }
        if value.class_name() != Some(type_name) {
            return Err(self.fail(messages::instance_type(name, type_name)));
        }
        Ok(())
    }

    fn check_counts(&self, value: &Value, of: &str) -> Result<(), ConstructionError> {
        let name = &self.field;

        if !value.is_null_like() && !matches!(value, Value::List(_)) {
            return Err(self.fail(messages::not_array(name, of)));
        }
        if let Some(max) = self.max_occurs.bound() {
            if !value.is_null_like() && value.count() > max as usize {
                return Err(self.fail(messages::max_items(name, max)));
            }
        }
        if value.count() < self.min_occurs as usize {
            return Err(self.fail(messages::min_items(name, self.min_occurs)));
        }
        Ok(())
    }

    fn fail(&self, message: String) -> ConstructionError {
        ConstructionError::new(&self.field, message)
    }
}

impl GeneratedClass {
    /// Evaluates the generated constructor against positional arguments.
    ///
    /// Missing trailing arguments take the parameter default, `null`.
    ///
    /// # Errors
    /// Returns the first `ConstructionError`, in field order.
    pub fn check(&self, args: &[Value]) -> Result<(), ConstructionError> {
        for (index, member) in self.members.iter().enumerate() {
            let value = args.get(index).unwrap_or(&Value::Null);
            member.validation.check(value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxsd_schema::{LengthBounds, Occurs};

    fn simple(name: &str, min: u32, max: Occurs, leaf: LeafCheck) -> FieldValidation {
        FieldValidation {
            field: name.to_string(),
            min_occurs: min,
            max_occurs: max,
            rule: Rule::Leaf(leaf),
        }
    }

    fn instance(name: &str, min: u32, max: Occurs, type_name: &str) -> FieldValidation {
        FieldValidation {
            field: name.to_string(),
            min_occurs: min,
            max_occurs: max,
            rule: Rule::Instance {
                type_name: type_name.to_string(),
            },
        }
    }

    fn message(result: Result<(), ConstructionError>) -> String {
        result.expect_err("expected a construction error").message
    }

    #[test]
    fn test_is_numeric() {
        assert!(Value::scalar("42.5").is_numeric());
        assert!(Value::scalar(" -1e3").is_numeric());
        assert!(Value::scalar(".5").is_numeric());
        assert!(!Value::scalar("abc").is_numeric());
        assert!(!Value::scalar("").is_numeric());
        assert!(!Value::Null.is_numeric());
    }

    #[test]
    fn test_null_like() {
        assert!(Value::Null.is_null_like());
        assert!(Value::scalar("").is_null_like());
        assert!(Value::List(vec![]).is_null_like());
        assert!(!Value::scalar("0").is_null_like());
        assert!(!Value::object("Book").is_null_like());
    }

    #[test]
    fn test_decimal_field() {
        let v = simple("price", 1, Occurs::Bounded(1), LeafCheck::Numeric);
        assert_eq!(message(v.check(&Value::scalar("abc"))), "$price must be numeric.");
        assert!(v.check(&Value::scalar("42.5")).is_ok());
        assert_eq!(message(v.check(&Value::Null)), "$price must be set.");
    }

    #[test]
    fn test_optional_field_absent() {
        let v = simple(
            "title",
            0,
            Occurs::Bounded(1),
            LeafCheck::Length(LengthBounds::new(3, Some(10))),
        );
        assert!(v.check(&Value::Null).is_ok());
        assert_eq!(
            message(v.check(&Value::scalar("ab"))),
            "$title must be at least 3 characters."
        );
        assert!(v.check(&Value::scalar("abcd")).is_ok());
    }

    #[test]
    fn test_repeated_string_field() {
        let v = simple(
            "tag",
            1,
            Occurs::Bounded(3),
            LeafCheck::Length(LengthBounds::new(2, Some(5))),
        );
        assert!(v.check(&Value::list(["ab", "abcde"])).is_ok());
        assert_eq!(
            message(v.check(&Value::list(["ab", "cd", "ef", "gh"]))),
            "$tag can have a maximum of 3 items."
        );
        assert_eq!(
            message(v.check(&Value::list(["ab", "c"]))),
            "$tag must be at least 2 characters."
        );
        assert_eq!(
            message(v.check(&Value::list(["ab", "abcdef"]))),
            "$tag must be no more than 5 characters."
        );
        assert_eq!(
            message(v.check(&Value::scalar("ab"))),
            "$tag must be an Array[] of tag objects."
        );
        assert_eq!(
            message(v.check(&Value::Null)),
            "$tag must have at least 1 items."
        );
    }

    #[test]
    fn test_pattern_field() {
        let v = simple(
            "year",
            1,
            Occurs::Bounded(1),
            LeafCheck::Pattern("^[0-9]{4}$".to_string()),
        );
        assert!(v.check(&Value::scalar("1999")).is_ok());
        assert_eq!(message(v.check(&Value::scalar("99"))), "$year must be numeric.");

        let broken = simple("year", 1, Occurs::Bounded(1), LeafCheck::Pattern("(".to_string()));
        assert!(broken.check(&Value::scalar("anything")).is_ok());
    }

    #[test]
    fn test_repeated_pattern_field() {
        let v = simple(
            "code",
            1,
            Occurs::Bounded(3),
            LeafCheck::Pattern("^[0-9]+$".to_string()),
        );
        assert!(v.check(&Value::list(["1", "22", "333"])).is_ok());
        assert_eq!(
            message(v.check(&Value::list(["1", "x2"]))),
            "$code must be numeric."
        );

        let broken = simple("code", 1, Occurs::Bounded(3), LeafCheck::Pattern("[".to_string()));
        assert!(broken.check(&Value::list(["a", "b", "c"])).is_ok());
    }

    #[test]
    fn test_instance_field() {
        let v = instance("shipTo", 1, Occurs::Bounded(1), "Address");
        assert!(v.check(&Value::object("Address")).is_ok());
        assert_eq!(
            message(v.check(&Value::object("Book"))),
            "$shipTo must be of type Address."
        );
        assert_eq!(message(v.check(&Value::Null)), "$shipTo must be set.");

        let optional = instance("billTo", 0, Occurs::Bounded(1), "Address");
        assert!(optional.check(&Value::Null).is_ok());
        assert!(optional.check(&Value::object("Address")).is_ok());
    }

    #[test]
    fn test_repeated_instance_field() {
        let v = instance("line", 1, Occurs::Unbounded, "Line");
        assert!(
            v.check(&Value::List(vec![Value::object("Line"), Value::object("Line")]))
                .is_ok()
        );
        assert_eq!(
            message(v.check(&Value::List(vec![Value::object("Line"), Value::object("Item")]))),
            "Each item in $line must be of type Line."
        );
        assert_eq!(
            message(v.check(&Value::object("Line"))),
            "$line must be an Array[] of Line objects."
        );
    }

    #[test]
    fn test_class_check_in_field_order() {
        let mut class = GeneratedClass::new("Book");
        class.members.push(crate::class::Member {
            declaration: crate::field::Declaration::NullDefault,
            validation: simple("price", 1, Occurs::Bounded(1), LeafCheck::Numeric),
            hint: crate::php::hints::TypeHint::new("decimal", "$price", ""),
        });
        class.members.push(crate::class::Member {
            declaration: crate::field::Declaration::Bare,
            validation: instance("author", 1, Occurs::Bounded(1), "Author"),
            hint: crate::php::hints::TypeHint::new("Author", "$author", ""),
        });

        let err = class.check(&[Value::scalar("x")]).unwrap_err();
        assert_eq!(err.field, "price");

        let err = class.check(&[Value::scalar("1.5")]).unwrap_err();
        assert_eq!(err.to_string(), "$author must be set.");

        assert!(
            class
                .check(&[Value::scalar("1.5"), Value::object("Author")])
                .is_ok()
        );
    }
}
