//! Occurrence constraints (`minOccurs` / `maxOccurs`).

use crate::error::SchemaError;
use crate::node::SchemaNode;
use std::fmt;

/// Default for both `minOccurs` and `maxOccurs` when the attribute is absent.
pub const DEFAULT_OCCURS: u32 = 1;

/// Upper occurrence bound of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurs {
    /// At most this many items.
    Bounded(u32),
    /// `unbounded`: any number of items.
    Unbounded,
}

impl Occurs {
    /// Parses a `maxOccurs` value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "unbounded" => Some(Self::Unbounded),
            other => other.parse().ok().map(Self::Bounded),
        }
    }

    /// Returns true if the field holds a sequence of values (`maxOccurs > 1`).
    #[must_use]
    pub const fn is_many(&self) -> bool {
        match self {
            Self::Bounded(n) => *n > 1,
            Self::Unbounded => true,
        }
    }

    /// Returns the numeric bound, or `None` when unbounded.
    #[must_use]
    pub const fn bound(&self) -> Option<u32> {
        match self {
            Self::Bounded(n) => Some(*n),
            Self::Unbounded => None,
        }
    }
}

impl Default for Occurs {
    fn default() -> Self {
        Self::Bounded(DEFAULT_OCCURS)
    }
}

impl fmt::Display for Occurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{}", n),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Reads `minOccurs` from an element, defaulting to 1.
///
/// # Errors
/// Returns `SchemaError::InvalidAttribute` if the value is not a non-negative integer.
pub fn min_occurs(node: &SchemaNode) -> Result<u32, SchemaError> {
    match node.attr("minOccurs") {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SchemaError::invalid_attr(&node.tag, "minOccurs", value)),
        None => Ok(DEFAULT_OCCURS),
    }
}

/// Reads `maxOccurs` from an element, defaulting to 1.
///
/// # Errors
/// Returns `SchemaError::InvalidAttribute` if the value is neither an integer nor `unbounded`.
pub fn max_occurs(node: &SchemaNode) -> Result<Occurs, SchemaError> {
    match node.attr("maxOccurs") {
        Some(value) => {
            Occurs::parse(value).ok_or_else(|| SchemaError::invalid_attr(&node.tag, "maxOccurs", value))
        }
        None => Ok(Occurs::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurs_parse() {
        assert_eq!(Occurs::parse("3"), Some(Occurs::Bounded(3)));
        assert_eq!(Occurs::parse("unbounded"), Some(Occurs::Unbounded));
        assert_eq!(Occurs::parse("many"), None);
        assert_eq!(Occurs::parse("-1"), None);
    }

    #[test]
    fn test_occurs_is_many() {
        assert!(!Occurs::Bounded(0).is_many());
        assert!(!Occurs::Bounded(1).is_many());
        assert!(Occurs::Bounded(2).is_many());
        assert!(Occurs::Unbounded.is_many());
    }

    #[test]
    fn test_occurs_display() {
        assert_eq!(Occurs::Bounded(5).to_string(), "5");
        assert_eq!(Occurs::Unbounded.to_string(), "unbounded");
    }

    #[test]
    fn test_occurs_defaults() {
        let node = SchemaNode::new("element");
        assert_eq!(min_occurs(&node).unwrap(), 1);
        assert_eq!(max_occurs(&node).unwrap(), Occurs::Bounded(1));
    }

    #[test]
    fn test_occurs_from_attributes() {
        let node = SchemaNode::new("element")
            .with_attr("minOccurs", "0")
            .with_attr("maxOccurs", "unbounded");
        assert_eq!(min_occurs(&node).unwrap(), 0);
        assert_eq!(max_occurs(&node).unwrap(), Occurs::Unbounded);
    }

    #[test]
    fn test_occurs_invalid_attribute() {
        let node = SchemaNode::new("element").with_attr("minOccurs", "none");
        assert!(matches!(
            min_occurs(&node),
            Err(SchemaError::InvalidAttribute { .. })
        ));
    }
}
