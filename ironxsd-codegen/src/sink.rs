//! Output destinations for generated class files.

use crate::error::CodegenError;
use std::path::{Path, PathBuf};

/// Receives each generated file as soon as its class is complete.
pub trait ArtifactSink {
    /// Writes one file, replacing any previous content under the same name.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be written.
    fn write_artifact(&mut self, file_name: &str, contents: &str) -> Result<(), CodegenError>;
}

/// A generated file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name.
    pub file_name: String,
    /// File contents.
    pub contents: String,
}

/// Writes files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn write_artifact(&mut self, file_name: &str, contents: &str) -> Result<(), CodegenError> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote class file");
        Ok(())
    }
}

/// Collects files in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every write, in order.
    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Returns the latest contents written under `file_name`.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .rev()
            .find(|a| a.file_name == file_name)
            .map(|a| a.contents.as_str())
    }

    /// Consumes the sink, returning every write.
    #[must_use]
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn write_artifact(&mut self, file_name: &str, contents: &str) -> Result<(), CodegenError> {
        self.artifacts.push(Artifact {
            file_name: file_name.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_latest_wins() {
        let mut sink = MemorySink::new();
        sink.write_artifact("A.class.php", "first").unwrap();
        sink.write_artifact("B.class.php", "other").unwrap();
        sink.write_artifact("A.class.php", "second").unwrap();

        assert_eq!(sink.artifacts().len(), 3);
        assert_eq!(sink.get("A.class.php"), Some("second"));
        assert_eq!(sink.get("C.class.php"), None);
    }

    #[test]
    fn test_directory_sink_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());

        sink.write_artifact("A.class.php", "a much longer first version\n")
            .unwrap();
        sink.write_artifact("A.class.php", "short\n").unwrap();

        let contents = std::fs::read_to_string(dir.path().join("A.class.php")).unwrap();
        assert_eq!(contents, "short\n");
        assert_eq!(sink.dir(), dir.path());
    }

    #[test]
    fn test_directory_sink_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("missing"));
        let err = sink.write_artifact("A.class.php", "x").unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
