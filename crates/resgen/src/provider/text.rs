use super::{has_extension, Entries, ResourceProvider};
use crate::error::ResourceError;
use crate::identifier::escape;
use crate::types::ResourceFile;
use regex::Regex;
use std::fs;

/// Extension of `category.key: value` tables.
pub const TEXT_EXTENSION: &str = "txt";

/// Extracts `<category>.<key>: <value>` lines from plain-text tables.
#[derive(Debug, Clone)]
pub struct TextProvider {
    category: String,
    key_to_key: bool,
    pattern: Regex,
}

impl TextProvider {
    /// With `key_to_key` set, each constant's value is its own key instead
    /// of the text after the colon.
    pub fn new(category: impl Into<String>, key_to_key: bool) -> Result<Self, ResourceError> {
        let category = category.into();
        let pattern = format!("{}.*:.*", regex::escape(&category));
        let pattern = Regex::new(&pattern).map_err(|source| ResourceError::InvalidMask {
            pattern,
            source,
        })?;

        Ok(Self {
            category,
            key_to_key,
            pattern,
        })
    }

    /// Collect entries from a table's content.
    pub fn entries(&self, content: &str) -> Entries {
        let prefix = format!("{}.", self.category);
        let mut entries = Entries::new();

        for found in self.pattern.find_iter(content) {
            let parts: Vec<&str> = found.as_str().split(':').collect();
            let [left, right] = parts.as_slice() else {
                continue;
            };

            let left = left.trim();
            let raw_key = left.strip_prefix(&prefix).unwrap_or(left).trim();
            if raw_key.is_empty() {
                continue;
            }

            let value = if self.key_to_key { raw_key } else { right.trim() };
            entries.insert(escape(raw_key), value.to_string());
        }

        entries
    }
}

impl ResourceProvider for TextProvider {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches(&self, file: &ResourceFile) -> bool {
        has_extension(file, TEXT_EXTENSION)
    }

    fn extract(&self, file: &ResourceFile) -> Result<Entries, ResourceError> {
        let content = fs::read_to_string(&file.path)?;
        Ok(self.entries(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRINGS: &str = "string.hello: Hello World\nstring.bye: Goodbye\n";

    fn pairs(entries: &Entries) -> Vec<(&str, &str)> {
        entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_key_to_key() {
        let provider = TextProvider::new("string", true).unwrap();
        let entries = provider.entries(STRINGS);
        assert_eq!(pairs(&entries), vec![("hello", "hello"), ("bye", "bye")]);
    }

    #[test]
    fn test_key_to_value() {
        let provider = TextProvider::new("string", false).unwrap();
        let entries = provider.entries(STRINGS);
        assert_eq!(
            pairs(&entries),
            vec![("hello", "Hello World"), ("bye", "Goodbye")]
        );
    }

    #[test]
    fn test_other_categories_ignored() {
        let provider = TextProvider::new("color", false).unwrap();
        let content = "string.title: Title\ncolor.red: #ff0000\r\ncolor.dark-blue: #000080\n";
        let entries = provider.entries(content);
        assert_eq!(
            pairs(&entries),
            vec![("red", "#ff0000"), ("dark_blue", "#000080")]
        );
    }

    #[test]
    fn test_extra_colons_discarded() {
        let provider = TextProvider::new("string", false).unwrap();
        let entries = provider.entries("string.url: http://example.com\nstring.ok: yes\n");
        assert_eq!(pairs(&entries), vec![("ok", "yes")]);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let provider = TextProvider::new("color", false).unwrap();
        let entries = provider.entries("color.a: 1\ncolor.b: 2\ncolor.a: 3\n");
        assert_eq!(pairs(&entries), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_category_with_regex_characters() {
        let provider = TextProvider::new("c++", false).unwrap();
        let entries = provider.entries("c++.x: 1\ncxx.y: 2\n");
        assert_eq!(pairs(&entries), vec![("x", "1")]);
    }
}
