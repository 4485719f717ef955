//! Init command implementation.
//!
//! Writes a default `fimage.yaml` manifest, listing the directories that
//! already contain scene files as sources.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILE};
use crate::error::{FimageError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a fimage project by generating a fimage.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing fimage.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILE);

    if manifest_path.exists() && !args.force {
        return Err(FimageError::Io {
            path: manifest_path,
            message: format!("{} already exists", MANIFEST_FILE),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let scenes = scan_directory(&args.path, &Manifest::default());
    let sources = source_dirs(&args.path, &scenes);

    let manifest = Manifest {
        sources: sources.iter().cloned().collect(),
        ..Default::default()
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| FimageError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !sources.is_empty() {
        let dirs: Vec<&str> = sources.iter().map(String::as_str).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILE,
            plural(scenes.len(), "scene", "scenes")
        ),
    );

    Ok(())
}

/// Top-most directories holding scenes, relative to `root`.
///
/// Scanning is recursive, so a directory nested inside another source is
/// left out. Scenes sitting directly in `root` need no source entry, since
/// an empty source list already means the whole project.
fn source_dirs(root: &Path, scenes: &[PathBuf]) -> BTreeSet<String> {
    let dirs: BTreeSet<PathBuf> = scenes
        .iter()
        .filter_map(|scene| scene.parent())
        .map(|parent| parent.strip_prefix(root).unwrap_or(parent).to_path_buf())
        .collect();

    if dirs.iter().any(|dir| dir.as_os_str().is_empty()) {
        return BTreeSet::new();
    }

    dirs.iter()
        .filter(|dir| !dirs.iter().any(|other| other != *dir && dir.starts_with(other)))
        .map(|dir| dir.display().to_string().replace('\\', "/"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init(path: &Path, force: bool) -> Result<()> {
        let args = InitArgs {
            path: path.to_path_buf(),
            force,
        };
        run(args, &Printer::plain())
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        init(dir.path(), false).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "output: build").unwrap();

        assert!(init(dir.path(), false).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "output: build").unwrap();

        init(dir.path(), true).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_init_discovers_source_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scenes/extra")).unwrap();
        fs::write(dir.path().join("scenes/a.scene.yaml"), "").unwrap();
        fs::write(dir.path().join("scenes/extra/b.scene.json"), "").unwrap();

        init(dir.path(), false).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.sources, vec!["scenes"]);
    }

    #[test]
    fn test_source_dirs_keeps_siblings() {
        let root = Path::new("/project");
        let scenes = vec![
            root.join("art/a.scene.yaml"),
            root.join("art/deep/er/b.scene.yaml"),
            root.join("artwork/c.scene.yaml"),
        ];
        let dirs: Vec<String> = source_dirs(root, &scenes).into_iter().collect();
        assert_eq!(dirs, vec!["art", "artwork"]);
    }

    #[test]
    fn test_init_scenes_at_root_need_no_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("more")).unwrap();
        fs::write(dir.path().join("a.scene.yaml"), "").unwrap();
        fs::write(dir.path().join("more/b.scene.yaml"), "").unwrap();

        init(dir.path(), false).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(manifest.sources.is_empty());
    }
}
