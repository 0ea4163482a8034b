use crate::identifier::relativize;
use crate::types::ResourceFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list every file under `root`.
///
/// Symbolic links are followed and listed under their link path. Unreadable
/// entries and link loops contribute nothing, and a missing root yields an
/// empty list. The result is sorted by root-relative `/`-separated path so that
/// everything downstream sees the same order on every platform.
pub fn scan_tree(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    files.sort_by_cached_key(|path| relativize(root, path));
    files
}

/// Scan `root` and wrap each file as a [`ResourceFile`], keeping scan order.
pub fn collect_resources(root: &Path) -> Vec<ResourceFile> {
    scan_tree(root)
        .into_iter()
        .map(|path| ResourceFile::new(root, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_tree(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_scan_sorted_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("b/nested/z.txt"), "").unwrap();
        fs::write(dir.path().join("b/a.txt"), "").unwrap();
        fs::write(dir.path().join("a/y.txt"), "").unwrap();
        fs::write(dir.path().join("root.txt"), "").unwrap();

        let relative: Vec<String> = collect_resources(dir.path())
            .into_iter()
            .map(|f| f.relative)
            .collect();
        assert_eq!(
            relative,
            vec!["a/y.txt", "b/a.txt", "b/nested/z.txt", "root.txt"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let shared = tempfile::tempdir().unwrap();
        fs::create_dir_all(shared.path().join("music")).unwrap();
        fs::write(shared.path().join("click.ogg"), "").unwrap();
        fs::write(shared.path().join("music/theme.ogg"), "").unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sounds")).unwrap();
        symlink(
            shared.path().join("click.ogg"),
            dir.path().join("sounds/click.ogg"),
        )
        .unwrap();
        symlink(shared.path().join("music"), dir.path().join("music")).unwrap();

        let relative: Vec<String> = collect_resources(dir.path())
            .into_iter()
            .map(|f| f.relative)
            .collect();
        assert_eq!(relative, vec!["music/theme.ogg", "sounds/click.ogg"]);
    }
}
