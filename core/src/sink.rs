#![deny(missing_docs)]

//! # Artifact Output
//!
//! The rendered artifacts of a run and the sinks that persist them.
//!
//! An `ArtifactSet` is complete before any sink sees it, so a failed run never leaves
//! half an output tree behind because of a generation error.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Identifies one artifact: the namespace it lives in and its type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    /// Dotted namespace, e.g. `com.example.schemas`.
    pub namespace: String,
    /// Artifact name without extension, e.g. `Pet`.
    pub name: String,
}

impl ArtifactKey {
    /// Creates a key.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Relative file path: namespace segments as directories, then `<name>.<extension>`.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let mut path: PathBuf = self
            .namespace
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.{}", self.name, extension));
        path
    }
}

/// Ordered mapping of artifact keys to source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    extension: String,
    artifacts: IndexMap<ArtifactKey, String>,
}

impl ArtifactSet {
    /// An empty set whose files use `extension`.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            artifacts: IndexMap::new(),
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Adds an artifact. Two artifacts may never share a key.
    pub fn insert(&mut self, key: ArtifactKey, source: String) -> AppResult<()> {
        if self.artifacts.contains_key(&key) {
            return Err(AppError::General(format!(
                "Duplicate artifact '{}.{}'",
                key.namespace, key.name
            )));
        }
        self.artifacts.insert(key, source);
        Ok(())
    }

    /// Source text of one artifact.
    pub fn get(&self, namespace: &str, name: &str) -> Option<&str> {
        self.artifacts
            .get(&ArtifactKey::new(namespace, name))
            .map(String::as_str)
    }

    /// All artifacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArtifactKey, &str)> {
        self.artifacts.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True when nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Persists a finished artifact set.
pub trait ArtifactSink {
    /// Writes every artifact. The first failure aborts and is returned.
    fn write_all(&mut self, artifacts: &ArtifactSet) -> AppResult<()>;
}

/// Writes artifacts as files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// A sink writing below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn write_all(&mut self, artifacts: &ArtifactSet) -> AppResult<()> {
        for (key, source) in artifacts.iter() {
            let path = self.root.join(key.relative_path(artifacts.extension()));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, source)?;
            debug!(path = %path.display(), "wrote artifact");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_relative_path() {
        let key = ArtifactKey::new("com.example.schemas", "Pet");
        assert_eq!(
            key.relative_path("java"),
            PathBuf::from("com/example/schemas/Pet.java")
        );
        assert_eq!(
            ArtifactKey::new("", "Root").relative_path("java"),
            PathBuf::from("Root.java")
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut set = ArtifactSet::new("java");
        set.insert(ArtifactKey::new("a", "B"), "one".into()).unwrap();
        assert!(set.insert(ArtifactKey::new("a", "B"), "two".into()).is_err());
        assert_eq!(set.get("a", "B"), Some("one"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_directory_sink_writes_tree() {
        let dir = tempdir().unwrap();
        let mut set = ArtifactSet::new("java");
        set.insert(ArtifactKey::new("com.example", "Api"), "class Api {}".into())
            .unwrap();
        set.insert(
            ArtifactKey::new("com.example.schemas", "Pet"),
            "class Pet {}".into(),
        )
        .unwrap();

        let mut sink = DirectorySink::new(dir.path().join("out"));
        sink.write_all(&set).unwrap();

        let api = fs::read_to_string(dir.path().join("out/com/example/Api.java")).unwrap();
        assert_eq!(api, "class Api {}");
        assert!(dir.path().join("out/com/example/schemas/Pet.java").exists());
    }

    #[test]
    fn test_directory_sink_surfaces_io_errors() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "file, not a directory").unwrap();

        let mut set = ArtifactSet::new("java");
        set.insert(ArtifactKey::new("pkg", "A"), "x".into()).unwrap();

        let mut sink = DirectorySink::new(&blocker);
        let err = sink.write_all(&set).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
