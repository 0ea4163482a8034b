use crate::error::ResourceError;
use crate::provider::skin::DEFAULT_MARKER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How skin files are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SkinFormat {
    /// Parse as JSON sections of named styles.
    ///
    /// Parsing is strict JSON: relaxed skin files with unquoted keys or
    /// values (such as libGDX's stock `uiskin.json`) are reported as skipped.
    /// Use [`SkinFormat::LineScanned`] for those.
    #[default]
    Structured,
    /// Scan indented text for entries inside the marker block.
    LineScanned,
}

/// One entry of the provider list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Region names from `.atlas` files directly inside `directory`.
    Sprite { directory: String },
    /// Style names from `.json` files in directories named with the `directory` prefix.
    Skin {
        directory: String,
        #[serde(default = "default_marker")]
        marker: String,
    },
    /// Relative paths of files under `directory` whose name matches `mask`.
    File {
        directory: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mask: Option<String>,
    },
    /// `category.key: value` lines from `.txt` files.
    Text {
        category: String,
        #[serde(default)]
        key_to_key: bool,
    },
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl ProviderConfig {
    pub fn sprite(directory: &str) -> Self {
        Self::Sprite {
            directory: directory.to_string(),
        }
    }

    pub fn skin(directory: &str) -> Self {
        Self::Skin {
            directory: directory.to_string(),
            marker: default_marker(),
        }
    }

    pub fn file(directory: &str, mask: &str) -> Self {
        Self::File {
            directory: directory.to_string(),
            category: None,
            mask: Some(mask.to_string()),
        }
    }

    pub fn file_as(directory: &str, category: &str, mask: &str) -> Self {
        Self::File {
            directory: directory.to_string(),
            category: Some(category.to_string()),
            mask: Some(mask.to_string()),
        }
    }

    pub fn text(category: &str, key_to_key: bool) -> Self {
        Self::Text {
            category: category.to_string(),
            key_to_key,
        }
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Namespace wrapping the generated container (`a.b` or `a::b`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Resource tree to scan.
    pub source_dir: PathBuf,
    /// Directory receiving the generated module.
    pub out_dir: PathBuf,
    /// File name of the generated module inside `out_dir`.
    pub file_name: String,
    pub skin_format: SkinFormat,
    /// Providers in output order.
    #[serde(rename = "provider")]
    pub providers: Vec<ProviderConfig>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            source_dir: PathBuf::from("core/res"),
            out_dir: PathBuf::from("core/build/generated/resources"),
            file_name: "resources.rs".to_string(),
            skin_format: SkinFormat::Structured,
            providers: vec![
                ProviderConfig::skin("skin"),
                ProviderConfig::sprite("atlas"),
                ProviderConfig::file("atlas", ".atlas"),
                ProviderConfig::file("sounds", ".ogg"),
                ProviderConfig::file("particle", ".part"),
                ProviderConfig::file("font", ".fnt"),
                ProviderConfig::file("skin", ".json"),
                ProviderConfig::file_as("values", "locale", "^strings"),
                ProviderConfig::text("color", false),
                ProviderConfig::text("string", true),
            ],
        }
    }
}

impl ResourceConfig {
    /// Load a TOML config file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let text = fs::read_to_string(path).map_err(|e| ResourceError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ResourceError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Render as TOML (the format [`ResourceConfig::load`] reads).
    pub fn to_toml(&self) -> Result<String, ResourceError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Full path of the generated module.
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}
