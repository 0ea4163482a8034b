use crate::error::ResourceError;
use crate::types::{Diagnostic, ResourceCategory};
use std::collections::HashMap;
use std::path::{Component, Path};

/// Words that cannot be used as plain Rust identifiers.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Reserved words that are not allowed as raw identifiers either.
const NOT_RAW: &[&str] = &["self", "Self", "super", "crate"];

/// Path of `path` relative to `root`, with `/` separators and no leading separator.
///
/// Paths outside `root` are returned whole (separators still normalized).
pub fn relativize(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let joined = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    joined.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Replace every run of characters outside `[A-Za-z0-9_]` with a single `_`.
///
/// Idempotent, and non-empty whenever the input contains a word character.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            result.push(ch);
            in_run = false;
        } else if !in_run {
            result.push('_');
            in_run = true;
        }
    }

    result
}

/// Turn an escaped name into something the Rust parser accepts as an item name.
///
/// A leading digit gets a `_` prefix, keywords become raw identifiers, and
/// the few keywords that cannot be raw get a trailing `_`.
pub fn rust_ident(name: &str) -> String {
    let escaped = escape(name);

    if escaped.is_empty() || escaped == "_" {
        return "_empty".to_string();
    }
    if escaped.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{}", escaped);
    }
    if NOT_RAW.contains(&escaped.as_str()) {
        return format!("{}_", escaped);
    }
    if RESERVED.contains(&escaped.as_str()) {
        return format!("r#{}", escaped);
    }

    escaped
}

/// Drop entries whose emitted identifier is already taken in `category`.
///
/// The first key to claim an identifier keeps it; every later key is removed
/// and reported as a [`Diagnostic`] whose path is the dropped key.
pub fn check_collisions(category: &mut ResourceCategory) -> Vec<Diagnostic> {
    let label = category.label.clone();
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut diagnostics = Vec::new();

    category.entries.retain(|key, _| {
        let ident = rust_ident(key);
        if let Some(previous) = seen.get(&ident) {
            let err = ResourceError::IdentifierCollision {
                identifier: ident,
                key_a: previous.clone(),
                key_b: key.clone(),
            };
            log::warn!("[{}] {}", label, err);
            diagnostics.push(Diagnostic {
                category: label.clone(),
                path: key.clone(),
                message: err.to_string(),
            });
            return false;
        }
        seen.insert(ident, key.clone());
        true
    });

    diagnostics
}
