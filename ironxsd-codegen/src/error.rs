//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] ironxsd_schema::ParseError),

    /// Schema interpretation error.
    #[error("schema error: {0}")]
    Schema(#[from] ironxsd_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A node reached the walker without a complex-type body.
    #[error("unknown node type\n{node}")]
    UnknownNodeKind {
        /// Textual dump of the offending node.
        node: String,
    },
}

impl CodegenError {
    /// Creates an unknown node kind error from the offending node.
    pub fn unknown_node(node: &ironxsd_schema::SchemaNode) -> Self {
        Self::UnknownNodeKind { node: node.dump() }
    }
}
