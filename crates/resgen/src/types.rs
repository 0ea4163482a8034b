use crate::identifier;
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A file found under the scan root.
///
/// Only the path is inspected for matching; providers that need the
/// content open `path` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Path as returned by the scanner (root-joined).
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative: String,
}

impl ResourceFile {
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = identifier::relativize(root, &path);
        Self { path, relative }
    }

    /// File name including extension.
    pub fn file_name(&self) -> &str {
        match self.relative.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.relative,
        }
    }

    /// File name without its final extension.
    pub fn stem(&self) -> &str {
        Path::new(self.file_name())
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    pub fn extension(&self) -> Option<&str> {
        Path::new(self.file_name())
            .extension()
            .and_then(|e| e.to_str())
    }

    /// Relative directory holding the file (empty for files at the root).
    pub fn directory(&self) -> &str {
        match self.relative.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        }
    }

    /// Name of the immediate parent directory (empty for files at the root).
    pub fn parent_name(&self) -> &str {
        let dir = self.directory();
        match dir.rsplit_once('/') {
            Some((_, name)) => name,
            None => dir,
        }
    }
}

/// One named group of generated constants.
///
/// Keys keep the position of their first insertion; a later insert with
/// the same key replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCategory {
    pub label: String,
    pub entries: IndexMap<String, String>,
}

impl ResourceCategory {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: IndexMap::new(),
        }
    }

    /// Insert an entry, overwriting any previous value for `key`.
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    /// Merge a provider's per-file output using last-write-wins.
    pub fn merge(&mut self, entries: IndexMap<String, String>) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything needed to render the output module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Optional enclosing namespace (`a.b` or `a::b`).
    pub namespace: Option<String>,
    /// Categories in provider registration order.
    pub categories: Vec<ResourceCategory>,
}

/// A file or entry whose contribution was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Category of the provider that failed on the file.
    pub category: String,
    /// Root-relative path of the file, or the dropped key for an identifier collision.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.path, self.message)
    }
}

/// Result of a generation run, returned by [`crate::generate`].
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Path of the written module.
    pub output: PathBuf,
    /// Category labels with their constant counts, in output order.
    pub categories: Vec<(String, usize)>,
    /// Files skipped because their content could not be extracted.
    pub diagnostics: Vec<Diagnostic>,
    /// Every scanned file (for `cargo:rerun-if-changed`).
    pub sources: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn constant_count(&self) -> usize {
        self.categories.iter().map(|(_, n)| n).sum()
    }
}
