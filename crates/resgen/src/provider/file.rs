use super::{Entries, ResourceProvider};
use crate::error::ResourceError;
use crate::identifier::escape;
use crate::types::ResourceFile;
use regex::Regex;

/// Mask used when a provider does not configure one.
pub const MATCH_ALL: &str = ".*";

/// Emits one path constant per file found under a directory.
///
/// Matching is two-stage: the cheap name mask decides which files are
/// attempted, and extraction only produces an entry for files whose relative
/// directory starts with the configured directory.
#[derive(Debug, Clone)]
pub struct FileProvider {
    directory: String,
    category: String,
    mask: Regex,
}

impl FileProvider {
    /// `category` defaults to `directory`, `mask` to [`MATCH_ALL`].
    pub fn new(
        directory: impl Into<String>,
        category: Option<String>,
        mask: Option<&str>,
    ) -> Result<Self, ResourceError> {
        let directory = directory.into();
        let pattern = mask.unwrap_or(MATCH_ALL);
        let mask = Regex::new(pattern).map_err(|source| ResourceError::InvalidMask {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            category: category.unwrap_or_else(|| directory.clone()),
            directory,
            mask,
        })
    }
}

impl ResourceProvider for FileProvider {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches(&self, file: &ResourceFile) -> bool {
        self.mask.is_match(file.file_name())
    }

    fn extract(&self, file: &ResourceFile) -> Result<Entries, ResourceError> {
        let mut entries = Entries::new();
        let directory = file.directory();

        if directory.starts_with(&self.directory) {
            let key = escape(file.stem());
            if !key.is_empty() {
                entries.insert(key, format!("{}/{}", directory, file.file_name()));
            }
        }

        Ok(entries)
    }
}
