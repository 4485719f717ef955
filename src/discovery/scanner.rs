//! File system scanner for discovering scene files.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::scene::is_scene_file;

use super::manifest::Manifest;

/// Recursively collect scene files under `root`, sorted by path.
///
/// A missing root yields no files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut scenes: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_scene_file(path) && !manifest.is_excluded(path))
        .collect();

    scenes.sort();
    scenes
}

/// Scan every source listed in the manifest, relative to `base_path`.
///
/// Overlapping sources (`scenes` and `scenes/extra`) report each file once.
pub fn scan_sources(manifest: &Manifest, base_path: &Path) -> Vec<PathBuf> {
    let found: BTreeSet<PathBuf> = manifest
        .effective_sources()
        .iter()
        .flat_map(|source| {
            let source_path = if Path::new(source).is_absolute() {
                PathBuf::from(source)
            } else {
                base_path.join(source)
            };
            scan_directory(&normalize(&source_path), manifest)
        })
        .collect();

    found.into_iter().collect()
}

/// Drop `.` components so `root/./a` and `root/a` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(scan_directory(dir.path(), &Manifest::default()).is_empty());
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();

        fs::write(dir.path().join("a.scene.yaml"), "").unwrap();
        fs::write(dir.path().join("nested/b.scene.json"), "").unwrap();
        fs::write(dir.path().join("nested/deeper/c.scene.yml"), "").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();
        fs::write(dir.path().join("plain.yaml"), "").unwrap();

        let found = scan_directory(dir.path(), &Manifest::default());

        assert_eq!(found.len(), 3);
        assert!(found[0].ends_with("a.scene.yaml"));
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("keep.scene.yaml"), "").unwrap();
        fs::write(dir.path().join("drafts/skip.scene.yaml"), "").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        let found = scan_directory(dir.path(), &manifest);
        assert_eq!(found.len(), 1);
        assert!(found[0].to_string_lossy().contains("keep"));
    }

    #[test]
    fn test_scan_sources_relative_to_base() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scenes")).unwrap();
        fs::create_dir_all(dir.path().join("other")).unwrap();
        fs::write(dir.path().join("scenes/a.scene.yaml"), "").unwrap();
        fs::write(dir.path().join("other/b.scene.yaml"), "").unwrap();

        let manifest = Manifest {
            sources: vec!["scenes".to_string(), "missing".to_string()],
            ..Default::default()
        };

        let found = scan_sources(&manifest, dir.path());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("scenes/a.scene.yaml"));
    }

    #[test]
    fn test_scan_overlapping_sources_once() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scenes/extra")).unwrap();
        fs::write(dir.path().join("scenes/a.scene.yaml"), "").unwrap();
        fs::write(dir.path().join("scenes/extra/b.scene.yaml"), "").unwrap();

        let manifest = Manifest {
            sources: vec![
                "scenes".to_string(),
                "scenes/extra".to_string(),
                "./scenes/extra/".to_string(),
            ],
            ..Default::default()
        };

        let found = scan_sources(&manifest, dir.path());
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("scenes/a.scene.yaml"));
        assert!(found[1].ends_with("scenes/extra/b.scene.yaml"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        assert!(scan_directory(Path::new("/nonexistent/path"), &Manifest::default()).is_empty());
    }
}
