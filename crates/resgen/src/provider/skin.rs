use super::{has_extension, Entries, ResourceProvider};
use crate::config::SkinFormat;
use crate::error::ResourceError;
use crate::identifier::escape;
use crate::types::ResourceFile;
use regex::Regex;
use serde_json::{Map, Value};
use std::fs;
use std::sync::LazyLock;

/// Extension of skin description files.
pub const SKIN_EXTENSION: &str = "json";

/// Block header recognised by the line scanner when none is configured.
pub const DEFAULT_MARKER: &str = "com.badlogic.gdx.scenes.scene2d.ui.Label$LabelStyle";

static STYLE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"?([^\s"{}:]+)"?\s*:\s*\{"#).expect("valid style entry pattern")
});

/// Extracts UI style names from skin files.
#[derive(Debug, Clone)]
pub struct SkinProvider {
    directory: String,
    format: SkinFormat,
    marker: String,
}

impl SkinProvider {
    pub const CATEGORY: &'static str = "style";

    pub fn new(
        directory: impl Into<String>,
        format: SkinFormat,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            format,
            marker: marker.into(),
        }
    }
}

impl ResourceProvider for SkinProvider {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    fn matches(&self, file: &ResourceFile) -> bool {
        file.parent_name().starts_with(&self.directory) && has_extension(file, SKIN_EXTENSION)
    }

    fn extract(&self, file: &ResourceFile) -> Result<Entries, ResourceError> {
        let content = fs::read_to_string(&file.path)?;
        match self.format {
            SkinFormat::Structured => {
                structured_styles(&content).map_err(|e| ResourceError::Json {
                    path: file.path.clone(),
                    message: e.to_string(),
                })
            }
            SkinFormat::LineScanned => Ok(line_scanned_styles(&content, &self.marker)),
        }
    }
}

/// Style names from a structured skin document.
///
/// Every top-level section whose name contains "style" (any case) is a
/// collection of styles: either an object keyed by style name, or an array
/// of objects carrying a `name` field.
pub fn structured_styles(content: &str) -> Result<Entries, serde_json::Error> {
    let sections: Map<String, Value> = serde_json::from_str(content)?;
    let mut entries = Entries::new();

    for (section, styles) in &sections {
        if !section.to_ascii_lowercase().contains("style") {
            continue;
        }
        for name in style_names(styles) {
            entries.insert(escape(name), name.to_string());
        }
    }

    Ok(entries)
}

fn style_names(styles: &Value) -> Vec<&str> {
    match styles {
        Value::Object(map) => map.keys().map(String::as_str).collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("name").and_then(Value::as_str))
            .collect(),
        _ => Vec::new(),
    }
}

/// Style names from a plain-text skin export.
///
/// Entries of the form `name: {` are collected between a `<marker>:` line
/// and the next line starting with `}`.
pub fn line_scanned_styles(content: &str, marker: &str) -> Entries {
    let header = format!("{}:", marker);
    let quoted_header = format!("\"{}\":", marker);
    let mut entries = Entries::new();
    let mut inside = false;

    for line in content.lines() {
        if !inside {
            inside = line.starts_with(&header) || line.starts_with(&quoted_header);
            continue;
        }
        if line.starts_with('}') {
            inside = false;
            continue;
        }
        if let Some(caps) = STYLE_ENTRY.captures(line) {
            let name = &caps[1];
            entries.insert(escape(name), name.to_string());
        }
    }

    entries
}
