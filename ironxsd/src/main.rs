//! `ironxsd` command-line entry point.
//!
//! Reads one XSD schema and writes a PHP class file per complex type into
//! the current working directory. Set `RUST_LOG` to control log output.

use anyhow::Context;
use clap::Parser;
use ironxsd_codegen::{GeneratedClass, GeneratorConfig, generate_from_file};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Generate validating PHP classes from an XSD schema.
#[derive(Parser, Debug)]
#[command(name = "ironxsd", version, about, long_about = None)]
struct Cli {
    /// Path to the XSD schema.
    schema: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let out_dir = std::env::current_dir().context("failed to resolve the current directory")?;
    let classes = run(&cli.schema, &out_dir)?;

    tracing::info!(classes = classes.len(), "done");
    Ok(())
}

/// Generates every class of `schema` into `out_dir`.
fn run(schema: &Path, out_dir: &Path) -> anyhow::Result<Vec<GeneratedClass>> {
    generate_from_file(schema, out_dir, &GeneratorConfig::default())
        .with_context(|| format!("failed to generate classes from {}", schema.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_one_path() {
        assert!(Cli::try_parse_from(["ironxsd"]).is_err());
        assert!(Cli::try_parse_from(["ironxsd", "a.xsd", "b.xsd"]).is_err());

        let cli = Cli::try_parse_from(["ironxsd", "order.xsd"]).unwrap();
        assert_eq!(cli.schema, PathBuf::from("order.xsd"));
    }

    #[test]
    fn test_run_writes_classes() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("note.xsd");
        std::fs::write(
            &schema,
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="note">
        <xs:complexType>
            <xs:sequence>
                <xs:element name="body">
                    <xs:simpleType>
                        <xs:restriction base="xs:string">
                            <xs:maxLength value="140"/>
                        </xs:restriction>
                    </xs:simpleType>
                </xs:element>
            </xs:sequence>
        </xs:complexType>
    </xs:element>
</xs:schema>"#,
        )
        .unwrap();

        let classes = run(&schema, dir.path()).unwrap();
        assert_eq!(classes.len(), 1);

        let php = std::fs::read_to_string(dir.path().join("Note.class.php")).unwrap();
        assert!(php.contains("class Note\n"));
        assert!(php.contains("$body must be no more than 140 characters."));
    }

    #[test]
    fn test_run_error_names_schema() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.xsd");

        let err = run(&missing, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("missing.xsd"));
    }
}
