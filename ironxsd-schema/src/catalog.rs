//! Catalog of named simple-type restrictions.
//!
//! Top-level `simpleType` declarations (siblings of the root element) are
//! resolved once, before any class is generated, and looked up by name when
//! an element references them through its `type` attribute.

use crate::error::SchemaError;
use crate::node::SchemaNode;
use crate::restriction::Restriction;
use std::collections::HashMap;

/// A named, resolved simple-type restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionInfo {
    /// Type name.
    pub name: String,
    /// Resolved restriction.
    pub restriction: Restriction,
    /// Documentation text of the declaration.
    pub annotation: String,
}

/// Restrictions keyed by type name. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RestrictionCatalog {
    entries: HashMap<String, RestrictionInfo>,
}

impl RestrictionCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the catalog from the top-level `simpleType` children of the
    /// schema root. A later declaration with the same name replaces the
    /// earlier one.
    ///
    /// # Errors
    /// Returns `SchemaError::UnrecognizedRestrictionKind` for any base other
    /// than `string`, `decimal` or `integer`.
    pub fn build(schema: &SchemaNode) -> Result<Self, SchemaError> {
        let mut catalog = Self::new();

        for node in schema.children_named("simpleType") {
            let name = node.name().unwrap_or_default().to_string();
            let restriction = Restriction::from_simple_type(node)?;
            tracing::debug!(
                name = %name,
                base = restriction.base_name(),
                "catalogued simple type"
            );
            catalog.insert(RestrictionInfo {
                name,
                restriction,
                annotation: node.documentation(),
            });
        }

        Ok(catalog)
    }

    /// Inserts an entry, replacing any entry with the same name.
    pub fn insert(&mut self, info: RestrictionInfo) {
        self.entries.insert(info.name.clone(), info);
    }

    /// Looks up a restriction by type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RestrictionInfo> {
        self.entries.get(name)
    }

    /// Returns true if the type name is catalogued.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;
    use crate::restriction::LengthBounds;

    const CATALOG_SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:simpleType name="isbn">
        <xs:annotation><xs:documentation>Book number</xs:documentation></xs:annotation>
        <xs:restriction base="xs:string">
            <xs:minLength value="10"/>
            <xs:maxLength value="13"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:simpleType name="year">
        <xs:restriction base="xs:integer">
            <xs:pattern value="[0-9]{4}"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:simpleType name="price">
        <xs:restriction base="xs:decimal"/>
    </xs:simpleType>
    <xs:element name="book">
        <xs:complexType>
            <xs:sequence>
                <xs:element name="code" type="isbn"/>
            </xs:sequence>
        </xs:complexType>
    </xs:element>
</xs:schema>"#;

    #[test]
    fn test_build_catalog() {
        let schema = parse_schema(CATALOG_SCHEMA).expect("Failed to parse schema");
        let catalog = RestrictionCatalog::build(&schema).expect("Failed to build catalog");

        assert_eq!(catalog.len(), 3);

        let isbn = catalog.get("isbn").unwrap();
        assert_eq!(
            isbn.restriction,
            Restriction::String(LengthBounds::new(10, Some(13)))
        );
        assert_eq!(isbn.annotation, "Book number");

        assert_eq!(
            catalog.get("year").unwrap().restriction,
            Restriction::Integer {
                pattern: "[0-9]{4}".to_string()
            }
        );
        assert_eq!(catalog.get("price").unwrap().restriction, Restriction::Decimal);
        assert!(!catalog.contains("book"));
    }

    #[test]
    fn test_build_catalog_last_wins() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:simpleType name="code">
        <xs:restriction base="xs:string"><xs:maxLength value="3"/></xs:restriction>
    </xs:simpleType>
    <xs:simpleType name="code">
        <xs:restriction base="xs:string"><xs:maxLength value="9"/></xs:restriction>
    </xs:simpleType>
</xs:schema>"#;
        let schema = parse_schema(xml).expect("Failed to parse schema");
        let catalog = RestrictionCatalog::build(&schema).expect("Failed to build catalog");

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("code").unwrap().restriction,
            Restriction::String(LengthBounds::new(0, Some(9)))
        );
    }

    #[test]
    fn test_build_catalog_unrecognized_base() {
        let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:simpleType name="when">
        <xs:restriction base="xs:date"/>
    </xs:simpleType>
</xs:schema>"#;
        let schema = parse_schema(xml).expect("Failed to parse schema");
        let err = RestrictionCatalog::build(&schema).unwrap_err();

        match err {
            SchemaError::UnrecognizedRestrictionKind { base, node } => {
                assert_eq!(base, "date");
                assert!(node.contains("simpleType name=\"when\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nested_simple_types_ignored() {
        let schema = parse_schema(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="a">
        <xs:simpleType><xs:restriction base="xs:date"/></xs:simpleType>
    </xs:element>
</xs:schema>"#,
        )
        .expect("Failed to parse schema");
        let catalog = RestrictionCatalog::build(&schema).expect("Failed to build catalog");
        assert!(catalog.is_empty());
    }
}
