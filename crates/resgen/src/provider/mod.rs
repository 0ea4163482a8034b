//! Resource providers: each pairs a file predicate with a category label and
//! an extraction routine.

/// Paths of files under a directory, filtered by a name mask.
pub mod file;

/// UI style names from skin files.
pub mod skin;

/// Region names from texture-atlas files.
pub mod sprite;

/// `category.key: value` lines from text tables.
pub mod text;

pub use file::FileProvider;
pub use skin::SkinProvider;
pub use sprite::SpriteProvider;
pub use text::TextProvider;

use crate::config::{ProviderConfig, ResourceConfig, SkinFormat};
use crate::error::ResourceError;
use crate::types::ResourceFile;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Key → value pairs extracted from one file, in discovery order.
pub type Entries = IndexMap<String, String>;

/// A unit that recognises files and extracts named constants from them.
pub trait ResourceProvider {
    /// Label of the category this provider fills.
    fn category(&self) -> &str;

    /// Whether `file` should be handed to [`ResourceProvider::extract`].
    fn matches(&self, file: &ResourceFile) -> bool;

    /// Extract entries from one matching file.
    fn extract(&self, file: &ResourceFile) -> Result<Entries, ResourceError>;
}

/// The closed set of provider kinds.
#[derive(Debug, Clone)]
pub enum Provider {
    Sprite(SpriteProvider),
    Skin(SkinProvider),
    File(FileProvider),
    Text(TextProvider),
}

impl Provider {
    pub fn from_config(
        config: &ProviderConfig,
        skin_format: SkinFormat,
    ) -> Result<Self, ResourceError> {
        let provider = match config {
            ProviderConfig::Sprite { directory } => {
                Self::Sprite(SpriteProvider::new(directory.as_str()))
            }
            ProviderConfig::Skin { directory, marker } => Self::Skin(SkinProvider::new(
                directory.as_str(),
                skin_format,
                marker.as_str(),
            )),
            ProviderConfig::File {
                directory,
                category,
                mask,
            } => Self::File(FileProvider::new(
                directory.as_str(),
                category.clone(),
                mask.as_deref(),
            )?),
            ProviderConfig::Text {
                category,
                key_to_key,
            } => Self::Text(TextProvider::new(category.as_str(), *key_to_key)?),
        };
        Ok(provider)
    }

    fn inner(&self) -> &dyn ResourceProvider {
        match self {
            Self::Sprite(p) => p,
            Self::Skin(p) => p,
            Self::File(p) => p,
            Self::Text(p) => p,
        }
    }
}

impl ResourceProvider for Provider {
    fn category(&self) -> &str {
        self.inner().category()
    }

    fn matches(&self, file: &ResourceFile) -> bool {
        self.inner().matches(file)
    }

    fn extract(&self, file: &ResourceFile) -> Result<Entries, ResourceError> {
        self.inner().extract(file)
    }
}

/// Build the ordered provider list described by `config`.
///
/// Fails if a mask does not compile or two providers share a category label.
pub fn build_registry(config: &ResourceConfig) -> Result<Vec<Provider>, ResourceError> {
    let mut seen = HashSet::new();
    let mut providers = Vec::with_capacity(config.providers.len());

    for entry in &config.providers {
        let provider = Provider::from_config(entry, config.skin_format)?;
        if !seen.insert(provider.category().to_string()) {
            return Err(ResourceError::DuplicateCategory(provider.category().to_string()));
        }
        providers.push(provider);
    }

    Ok(providers)
}

/// Case-insensitive extension check.
pub(crate) fn has_extension(file: &ResourceFile, extension: &str) -> bool {
    file.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let providers = build_registry(&ResourceConfig::default()).unwrap();
        let labels: Vec<&str> = providers.iter().map(|p| p.category()).collect();
        assert_eq!(
            labels,
            vec![
                "style", "sprite", "atlas", "sounds", "particle", "font", "skin", "locale", "color",
                "string",
            ]
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let config = ResourceConfig {
            providers: vec![
                ProviderConfig::file("sounds", ".ogg"),
                ProviderConfig::file("sounds", ".wav"),
            ],
            ..ResourceConfig::default()
        };
        let err = build_registry(&config).unwrap_err();
        match err {
            ResourceError::DuplicateCategory(label) => assert_eq!(label, "sounds"),
            _ => panic!("Expected DuplicateCategory error"),
        }
    }

    #[test]
    fn test_invalid_mask_rejected() {
        let config = ResourceConfig {
            providers: vec![ProviderConfig::file("sounds", "[")],
            ..ResourceConfig::default()
        };
        assert!(matches!(
            build_registry(&config),
            Err(ResourceError::InvalidMask { .. })
        ));
    }
}
