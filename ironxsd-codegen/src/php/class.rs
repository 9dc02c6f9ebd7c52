//! Class file emission.

use crate::class::GeneratedClass;
use crate::config::{DocTags, HeaderInfo};
use crate::field::Declaration;
use crate::naming::variable;
use crate::php::hints::align_type_hints;
use crate::php::validation::render_validation;

/// Generator for PHP class files.
pub struct ClassGenerator<'a> {
    header: &'a HeaderInfo,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(header: &'a HeaderInfo) -> Self {
        Self { header }
    }

    /// Generates the complete file for a class.
    #[must_use]
    pub fn generate(&self, class: &GeneratedClass) -> String {
        let mut output = String::new();

        output.push_str("<?php\n");
        output.push_str(&self.generate_file_doc());
        output.push_str(&self.generate_class_doc(&class.name));
        output.push_str(&format!("class {}\n{{\n", class.name));

        for member in &class.members {
            let default = match member.declaration {
                Declaration::NullDefault => " = null",
                Declaration::Bare => "",
            };
            output.push_str(&format!(
                "    public {}{};\n",
                variable(member.name()),
                default
            ));
        }

        output.push_str(&self.generate_constructor(class));
        output.push_str("}\n");

        output
    }

    /// File-level doc block.
    fn generate_file_doc(&self) -> String {
        let mut output = String::new();
        output.push_str("/**\n");
        output.push_str(&format!(" * Generated by {}\n", self.header.generated_by));
        output.push_str(" *\n");
        output.push_str(&format!(" * PHP version {}\n", self.header.php_version));
        output.push_str(" *\n");
        output.push_str(&generate_tags(&self.header.file_tags));
        output.push_str(" */\n\n");
        output
    }

    /// Class-level doc block.
    fn generate_class_doc(&self, class_name: &str) -> String {
        let mut output = String::new();
        output.push_str("/**\n");
        output.push_str(&format!(" * Class representing a {}\n", class_name));
        output.push_str(" *\n");
        output.push_str(&generate_tags(&self.header.class_tags));
        output.push_str(" */\n");
        output
    }

    /// Constructor with aligned doc block, parameters and validations.
    fn generate_constructor(&self, class: &GeneratedClass) -> String {
        let params = class
            .members
            .iter()
            .map(|m| format!("{} = null", variable(m.name())))
            .collect::<Vec<_>>()
            .join(", ");

        let mut output = String::new();
        output.push_str("\n    /**\n");
        output.push_str(&format!("     * {} constructor\n", class.name));
        output.push_str("     *\n");
        if let Some(hints) = align_type_hints(&class.hints()) {
            output.push_str(&hints);
        }
        output.push_str("     */\n");
        output.push_str(&format!("    public function __construct({})\n", params));
        output.push_str("    {\n");
        for member in &class.members {
            output.push_str(&render_validation(&member.validation));
        }
        output.push_str("    }\n");

        output
    }
}

/// `@category`, `@package` and any optional tags of one doc block.
fn generate_tags(tags: &DocTags) -> String {
    let mut output = String::new();
    output.push_str(&format!(" * @category {}\n", tags.category));
    output.push_str(&format!(" * @package  {}\n", tags.package));
    let optional = [
        ("@author  ", &tags.author),
        ("@license ", &tags.license),
        ("@link    ", &tags.link),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            output.push_str(&format!(" * {} {}\n", tag, value));
        }
    }
    output
}
