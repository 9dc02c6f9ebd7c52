//! XSD document parser.
//!
//! Reads an XSD document into a [`SchemaNode`] tree. The schema namespace
//! prefix is stripped textually before parsing so nodes are addressed by
//! their local names; documents that alias the schema namespace with a
//! different prefix must pass that prefix explicitly.

use crate::error::ParseError;
use crate::node::SchemaNode;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Prefix stripped from the document when none is given.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "xs:";

/// Removes every occurrence of the namespace prefix token from the raw text.
#[must_use]
pub fn strip_namespace_prefix(xml: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return xml.to_string();
    }
    xml.replace(prefix, "")
}

/// Parses an XSD document using the default `xs:` prefix.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or the root is not `schema`.
pub fn parse_schema(xml: &str) -> Result<SchemaNode, ParseError> {
    parse_schema_with_prefix(xml, DEFAULT_NAMESPACE_PREFIX)
}

/// Parses an XSD document after stripping the given namespace prefix.
///
/// # Arguments
/// * `xml` - Raw XSD document text
/// * `prefix` - Prefix token to strip, including the trailing colon
///
/// # Returns
/// The `schema` root node.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or the root is not `schema`.
pub fn parse_schema_with_prefix(xml: &str, prefix: &str) -> Result<SchemaNode, ParseError> {
    let stripped = strip_namespace_prefix(xml, prefix);
    let root = parse_document(&stripped)?;

    if root.tag != "schema" {
        return Err(ParseError::invalid_structure(format!(
            "expected a schema root element, found '{}'",
            root.tag
        )));
    }

    tracing::debug!(
        children = root.children.len(),
        "parsed schema document"
    );
    Ok(root)
}

/// Parses an XSD file from disk.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_schema_file(path: &std::path::Path, prefix: &str) -> Result<SchemaNode, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_schema_with_prefix(&xml, prefix)
}

/// Parses any XML document into a node tree, returning its root element.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or has no root element.
pub fn parse_document(xml: &str) -> Result<SchemaNode, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let mut root = start_node(e)?;
                parse_children(&mut reader, &mut root)?;
                return Ok(root);
            }
            Ok(Event::Empty(ref e)) => {
                return start_node(e);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(ParseError::invalid_structure("document has no root element"))
}

/// Builds a node from a start (or empty) tag.
fn start_node(e: &BytesStart<'_>) -> Result<SchemaNode, ParseError> {
    let tag = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut node = SchemaNode::new(tag);

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        node.attributes.push((key.to_string(), value.into_owned()));
    }

    Ok(node)
}

/// Reads child elements and text until the node's end tag.
fn parse_children(reader: &mut Reader<&[u8]>, node: &mut SchemaNode) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let mut child = start_node(e)?;
                parse_children(reader, &mut child)?;
                node.children.push(child);
            }
            Ok(Event::Empty(ref e)) => {
                node.children.push(start_node(e)?);
            }
            Ok(Event::Text(ref t)) => {
                node.text.push_str(std::str::from_utf8(t.as_ref())?);
            }
            Ok(Event::CData(ref t)) => {
                node.text.push_str(std::str::from_utf8(t.as_ref())?);
            }
            Ok(Event::GeneralRef(ref r)) => {
                resolve_reference(r, &mut node.text)?;
            }
            Ok(Event::End(_)) => {
                let trimmed = node.text.trim();
                if trimmed.len() != node.text.len() {
                    node.text = trimmed.to_string();
                }
                break;
            }
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(format!(
                    "unexpected end of document inside '{}'",
                    node.tag
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Appends the text a character or predefined entity reference stands for.
fn resolve_reference(r: &BytesRef<'_>, text: &mut String) -> Result<(), ParseError> {
    if let Some(ch) = r.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = std::str::from_utf8(r.as_ref())?;
    match resolve_predefined_entity(name) {
        Some(value) => {
            text.push_str(value);
            Ok(())
        }
        None => Err(ParseError::invalid_structure(format!(
            "unknown entity reference '&{};'",
            name
        ))),
    }
}
