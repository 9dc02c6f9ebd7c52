//! Schema tree nodes.
//!
//! A [`SchemaNode`] is a read-only view of one element of the parsed XSD
//! document: its unprefixed tag, attributes in document order, child
//! elements and concatenated text content.

use crate::error::SchemaError;
use std::fmt;

/// One element of the parsed schema tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaNode {
    /// Tag name with the schema prefix removed (`element`, `sequence`, ...).
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<SchemaNode>,
    /// Text content, trimmed.
    pub text: String,
}

impl SchemaNode {
    /// Creates an empty node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Adds an attribute, builder style.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Adds a child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of an attribute or a `MissingAttribute` error.
    ///
    /// # Errors
    /// Returns `SchemaError::MissingAttribute` if the attribute is absent.
    pub fn require_attr(&self, key: &str) -> Result<&str, SchemaError> {
        self.attr(key)
            .ok_or_else(|| SchemaError::missing_attr(&self.tag, key))
    }

    /// Returns the `name` attribute.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// Returns the first child with the given tag.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Returns all children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a SchemaNode> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Returns true if a child with the given tag exists.
    #[must_use]
    pub fn has_child(&self, tag: &str) -> bool {
        self.child(tag).is_some()
    }

    /// Returns the `annotation/documentation` text on a single line.
    ///
    /// Whitespace runs, line breaks included, collapse to one space.
    #[must_use]
    pub fn documentation(&self) -> String {
        self.child("annotation")
            .and_then(|a| a.child("documentation"))
            .map(|d| d.text.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    /// Renders the node and its subtree as indented XML for diagnostics.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.write_dump(&mut out, 0);
        out
    }

    fn write_dump(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", key, value));
        }

        if self.children.is_empty() && self.text.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push('>');
        if self.children.is_empty() {
            out.push_str(&self.text);
        } else {
            out.push('\n');
            if !self.text.is_empty() {
                out.push_str(&indent);
                out.push_str("  ");
                out.push_str(&self.text);
                out.push('\n');
            }
            for child in &self.children {
                child.write_dump(out, depth + 1);
            }
            out.push_str(&indent);
        }
        out.push_str(&format!("</{}>\n", self.tag));
    }
}

impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SchemaNode {
        SchemaNode::new("element")
            .with_attr("name", "title")
            .with_attr("minOccurs", "0")
            .with_child(
                SchemaNode::new("annotation").with_child(SchemaNode {
                    text: "The  book\n   title".to_string(),
                    ..SchemaNode::new("documentation")
                }),
            )
            .with_child(SchemaNode::new("simpleType"))
    }

    #[test]
    fn test_attr_lookup() {
        let node = sample();
        assert_eq!(node.name(), Some("title"));
        assert_eq!(node.attr("minOccurs"), Some("0"));
        assert_eq!(node.attr("maxOccurs"), None);
    }

    #[test]
    fn test_require_attr_missing() {
        let node = SchemaNode::new("element");
        let err = node.require_attr("name").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingAttribute { ref element, ref attribute }
                if element == "element" && attribute == "name"
        ));
    }

    #[test]
    fn test_child_lookup() {
        let node = sample();
        assert!(node.has_child("simpleType"));
        assert!(!node.has_child("complexType"));
        assert_eq!(node.children_named("annotation").count(), 1);
    }

    #[test]
    fn test_documentation_single_line() {
        assert_eq!(sample().documentation(), "The book title");
        assert_eq!(SchemaNode::new("element").documentation(), "");
    }

    #[test]
    fn test_dump() {
        let dump = sample().dump();
        assert!(dump.starts_with("<element name=\"title\" minOccurs=\"0\">\n"));
        assert!(dump.contains("    <documentation>The  book\n   title</documentation>\n"));
        assert!(dump.contains("  <simpleType/>\n"));
        assert!(dump.ends_with("</element>\n"));
    }
}
