use super::{has_extension, Entries, ResourceProvider};
use crate::error::ResourceError;
use crate::identifier::escape;
use crate::types::ResourceFile;
use std::fs;

/// Extension of texture-atlas description files.
pub const ATLAS_EXTENSION: &str = "atlas";

/// Extracts region (sprite) names from texture-atlas text files.
#[derive(Debug, Clone)]
pub struct SpriteProvider {
    directory: String,
}

impl SpriteProvider {
    pub const CATEGORY: &'static str = "sprite";

    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ResourceProvider for SpriteProvider {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    fn matches(&self, file: &ResourceFile) -> bool {
        file.parent_name() == self.directory && has_extension(file, ATLAS_EXTENSION)
    }

    fn extract(&self, file: &ResourceFile) -> Result<Entries, ResourceError> {
        let content = fs::read_to_string(&file.path)?;
        Ok(regions(&content))
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with(char::is_whitespace)
}

/// Collect region names from atlas text.
///
/// A region name is an unindented line directly followed by an indented
/// attribute line, so the last line never qualifies.
pub fn regions(content: &str) -> Entries {
    let lines: Vec<&str> = content.lines().collect();

    lines
        .windows(2)
        .filter(|pair| !is_indented(pair[0]) && is_indented(pair[1]))
        .map(|pair| pair[0].trim())
        .filter(|name| !name.is_empty())
        .map(|name| (escape(name), name.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_regions_basic() {
        let content = "region_a\n  size: 10,10\nregion_b\n  size: 5,5";
        let entries = regions(content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("region_a").map(String::as_str), Some("region_a"));
        assert_eq!(entries.get("region_b").map(String::as_str), Some("region_b"));
    }

    #[test]
    fn test_regions_skips_page_header() {
        let content = [
            "",
            "ui.png",
            "size: 512,512",
            "format: RGBA8888",
            "filter: Linear,Linear",
            "repeat: none",
            "button-up",
            "  rotate: false",
            "  xy: 0, 0",
            "icons/heart",
            "\trotate: false",
        ]
        .join("\n");
        let entries = regions(&content);
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["button_up", "icons_heart"]);
        assert_eq!(entries["button_up"], "button-up");
        assert_eq!(entries["icons_heart"], "icons/heart");
    }

    #[test]
    fn test_regions_last_line_ignored() {
        assert!(regions("lonely").is_empty());
        assert!(regions("").is_empty());
        assert!(regions("a\nb").is_empty());
    }

    #[test]
    fn test_regions_trailing_whitespace_trimmed() {
        let entries = regions("hero  \n  xy: 1, 1\n");
        assert_eq!(entries["hero"], "hero");
    }

    #[test]
    fn test_matches_directory_and_extension() {
        let provider = SpriteProvider::new("atlas");
        let root = Path::new("/res");
        let hit = ResourceFile::new(root, root.join("atlas/ui.atlas"));
        let wrong_dir = ResourceFile::new(root, root.join("packs/ui.atlas"));
        let wrong_ext = ResourceFile::new(root, root.join("atlas/ui.png"));
        assert!(provider.matches(&hit));
        assert!(!provider.matches(&wrong_dir));
        assert!(!provider.matches(&wrong_ext));
    }
}
