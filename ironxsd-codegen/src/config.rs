//! Generator configuration.

use ironxsd_schema::DEFAULT_NAMESPACE_PREFIX;

/// Default suffix appended to each class name to form its file name.
pub const DEFAULT_FILE_SUFFIX: &str = ".class.php";

/// Tags of one doc block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTags {
    /// `@category` tag.
    pub category: String,
    /// `@package` tag.
    pub package: String,
    /// `@author` tag, omitted when `None`.
    pub author: Option<String>,
    /// `@license` tag, omitted when `None`.
    pub license: Option<String>,
    /// `@link` tag, omitted when `None`.
    pub link: Option<String>,
}

impl Default for DocTags {
    fn default() -> Self {
        Self {
            category: "Util".to_string(),
            package: "IronXSD".to_string(),
            author: None,
            license: None,
            link: None,
        }
    }
}

/// Metadata written into the static file and class doc blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Tool named on the `Generated by` line.
    pub generated_by: String,
    /// Target PHP version line.
    pub php_version: String,
    /// Tags of the file doc block.
    pub file_tags: DocTags,
    /// Tags of the class doc block.
    pub class_tags: DocTags,
}

impl Default for HeaderInfo {
    fn default() -> Self {
        Self {
            generated_by: "IronXSD".to_string(),
            php_version: "5.3".to_string(),
            file_tags: DocTags::default(),
            class_tags: DocTags::default(),
        }
    }
}

impl HeaderInfo {
    /// Header blocks byte-identical to those written by XSD2PHP.
    #[must_use]
    pub fn legacy() -> Self {
        let author = Some("David Gillen <david.gillen@nexus451.com>".to_string());
        let license = Some("GNU GPL - http://www.gnu.org/licenses/gpl.txt".to_string());

        Self {
            generated_by: "XSD2PHP".to_string(),
            php_version: "5.3".to_string(),
            file_tags: DocTags {
                category: "Util".to_string(),
                package: "XSD2PHP".to_string(),
                author: author.clone(),
                license: license.clone(),
                link: Some("https://github.com/davidgillen/XSD2PHP".to_string()),
            },
            class_tags: DocTags {
                category: "XSD2PHP".to_string(),
                package: "XSD2PHP".to_string(),
                author,
                license,
                link: Some("http://www.nexus451.com".to_string()),
            },
        }
    }

    fn each_block(&mut self, f: impl Fn(&mut DocTags)) {
        f(&mut self.file_tags);
        f(&mut self.class_tags);
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Suffix of every emitted file name.
    pub file_suffix: String,
    /// Schema namespace prefix stripped before parsing.
    pub namespace_prefix: String,
    /// Doc-block metadata.
    pub header: HeaderInfo,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
            header: HeaderInfo::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output file suffix.
    #[must_use]
    pub fn file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    /// Sets the namespace prefix to strip.
    #[must_use]
    pub fn namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    /// Replaces the doc-block metadata.
    #[must_use]
    pub fn header(mut self, header: HeaderInfo) -> Self {
        self.header = header;
        self
    }

    /// Sets the `@package` tag of both doc blocks.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        let package = package.into();
        self.header.each_block(|tags| tags.package = package.clone());
        self
    }

    /// Sets the `@category` tag of both doc blocks.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.header.each_block(|tags| tags.category = category.clone());
        self
    }

    /// Sets the `@author` tag of both doc blocks.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.header.each_block(|tags| tags.author = Some(author.clone()));
        self
    }

    /// Sets the `@license` tag of both doc blocks.
    #[must_use]
    pub fn license(mut self, license: impl Into<String>) -> Self {
        let license = license.into();
        self.header.each_block(|tags| tags.license = Some(license.clone()));
        self
    }

    /// Sets the `@link` tag of both doc blocks.
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        let link = link.into();
        self.header.each_block(|tags| tags.link = Some(link.clone()));
        self
    }

    /// Returns the file name for a class.
    #[must_use]
    pub fn file_name(&self, class_name: &str) -> String {
        format!("{}{}", class_name, self.file_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.file_suffix, ".class.php");
        assert_eq!(config.namespace_prefix, "xs:");
        assert_eq!(config.header.file_tags.package, "IronXSD");
        assert_eq!(config.header.class_tags, config.header.file_tags);
        assert!(config.header.file_tags.author.is_none());
        assert_eq!(config.file_name("Book"), "Book.class.php");
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .file_suffix(".php")
            .namespace_prefix("xsd:")
            .package("Library")
            .category("Models")
            .author("Library Team <team@example.com>")
            .license("MIT")
            .link("https://example.com");

        assert_eq!(config.file_name("Book"), "Book.php");
        assert_eq!(config.namespace_prefix, "xsd:");
        for tags in [&config.header.file_tags, &config.header.class_tags] {
            assert_eq!(tags.package, "Library");
            assert_eq!(tags.category, "Models");
            assert_eq!(tags.license.as_deref(), Some("MIT"));
            assert_eq!(tags.link.as_deref(), Some("https://example.com"));
        }
    }

    #[test]
    fn test_legacy_header() {
        let config = GeneratorConfig::new().header(HeaderInfo::legacy());
        assert_eq!(config.header.generated_by, "XSD2PHP");
        assert_eq!(config.header.file_tags.category, "Util");
        assert_eq!(config.header.class_tags.category, "XSD2PHP");
        assert_ne!(config.header.file_tags.link, config.header.class_tags.link);
    }
}
