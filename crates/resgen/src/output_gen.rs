use crate::error::ResourceError;
use crate::identifier::rust_ident;
use crate::types::{GeneratedModule, ResourceCategory};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Name of the container module holding every category.
pub const CONTAINER: &str = "R";

const HEADER: &str = "// Auto-generated by resgen - do not edit\n";
const INDENT: &str = "    ";

/// Split a namespace written as `a.b` or `a::b` into module names.
fn namespace_segments(namespace: Option<&str>) -> Vec<String> {
    namespace
        .map(|ns| {
            ns.split("::")
                .flat_map(|part| part.split('.'))
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(rust_ident)
                .collect()
        })
        .unwrap_or_default()
}

fn render_category(category: &ResourceCategory, indent: &str) -> String {
    let name = rust_ident(&category.label);

    if category.is_empty() {
        return format!("{}pub mod {} {{}}\n", indent, name);
    }

    let mut output = format!("{}pub mod {} {{\n", indent, name);
    for (key, value) in category.iter() {
        output.push_str(&format!(
            "{}{}pub const {}: &str = {:?};\n",
            indent,
            INDENT,
            rust_ident(key),
            value.trim()
        ));
    }
    output.push_str(&format!("{}}}\n", indent));
    output
}

/// Render the module source.
///
/// Layout: optional namespace modules, then the `R` container with one
/// nested module per category, each holding `&str` constants in insertion
/// order.
pub fn render(module: &GeneratedModule) -> String {
    let segments = namespace_segments(module.namespace.as_deref());
    let mut output = String::from(HEADER);
    output.push('\n');

    for (depth, segment) in segments.iter().enumerate() {
        output.push_str(&format!("{}pub mod {} {{\n", INDENT.repeat(depth), segment));
    }

    let outer = INDENT.repeat(segments.len());
    let inner = INDENT.repeat(segments.len() + 1);

    output.push_str(&format!(
        "{}#[allow(non_snake_case, non_upper_case_globals, dead_code)]\n",
        outer
    ));
    output.push_str(&format!("{}pub mod {} {{\n", outer, CONTAINER));

    let groups: Vec<String> = module
        .categories
        .iter()
        .map(|category| render_category(category, &inner))
        .collect();
    output.push_str(&groups.join("\n"));

    output.push_str(&format!("{}}}\n", outer));

    for depth in (0..segments.len()).rev() {
        output.push_str(&format!("{}}}\n", INDENT.repeat(depth)));
    }

    output
}

/// Write `content` to `path`, replacing any previous file in one step.
///
/// The content goes to a temporary file next to `path` first, so a failed
/// write never leaves a truncated module behind.
pub fn write_module(path: &Path, content: &str) -> Result<(), ResourceError> {
    let wrap = |source: std::io::Error| ResourceError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(wrap)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(wrap)?;
    temp.write_all(content.as_bytes()).map_err(wrap)?;
    temp.as_file().sync_all().map_err(wrap)?;
    temp.persist(path).map_err(|e| wrap(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(label: &str, entries: &[(&str, &str)]) -> ResourceCategory {
        let mut category = ResourceCategory::new(label);
        for (k, v) in entries {
            category.insert(k.to_string(), v.to_string());
        }
        category
    }

    #[test]
    fn test_render_without_namespace() {
        let module = GeneratedModule {
            namespace: None,
            categories: vec![
                category("sprite", &[("region_a", "region_a"), ("hero", " hero ")]),
                category("sounds", &[]),
            ],
        };
        let expected = "\
// Auto-generated by resgen - do not edit

#[allow(non_snake_case, non_upper_case_globals, dead_code)]
pub mod R {
    pub mod sprite {
        pub const region_a: &str = \"region_a\";
        pub const hero: &str = \"hero\";
    }

    pub mod sounds {}
}
";
        assert_eq!(render(&module), expected);
    }

    #[test]
    fn test_render_with_namespace() {
        let module = GeneratedModule {
            namespace: Some("game.assets".to_string()),
            categories: vec![category("color", &[("red", "#ff0000")])],
        };
        let rendered = render(&module);
        assert!(rendered.contains("pub mod game {\n    pub mod assets {\n"));
        assert!(rendered.contains("                pub const red: &str = \"#ff0000\";\n"));
        assert!(rendered.ends_with("        }\n    }\n}\n"));
    }

    #[test]
    fn test_render_empty_namespace_is_ignored() {
        let with_empty = GeneratedModule {
            namespace: Some(String::new()),
            categories: Vec::new(),
        };
        assert_eq!(render(&with_empty), render(&GeneratedModule::default()));
    }

    #[test]
    fn test_render_escapes_literals_and_identifiers() {
        let module = GeneratedModule {
            namespace: None,
            categories: vec![category(
                "string",
                &[("type", "say \"hi\"\\"), ("1up", "one\tup")],
            )],
        };
        let rendered = render(&module);
        assert!(rendered.contains(r#"pub const r#type: &str = "say \"hi\"\\";"#));
        assert!(rendered.contains(r#"pub const _1up: &str = "one\tup";"#));
    }

    #[test]
    fn test_write_module_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build/generated/resources.rs");
        write_module(&path, "// one\n").unwrap();
        write_module(&path, "// two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "// two\n");

        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_module_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let err = write_module(&blocker.join("resources.rs"), "").unwrap_err();
        assert!(matches!(err, ResourceError::OutputWrite { .. }));
    }
}
