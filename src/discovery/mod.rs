//! Scene discovery for fimage projects.
//!
//! A project is a directory with an optional `fimage.yaml` manifest. Scene
//! files (`*.scene.yaml`, `*.scene.yml`, `*.scene.json`) are found by
//! walking the manifest's source directories.
//!
//! # Example
//!
//! ```ignore
//! use fimage::discovery::discover;
//!
//! let project = discover("./pictures")?;
//! println!("Found {} scenes", project.scenes.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, MANIFEST_FILE};
pub use scanner::{scan_directory, scan_sources};

/// Result of discovering scenes in a project.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no fimage.yaml was found).
    pub manifest: Manifest,

    /// Whether a fimage.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered scene files, in path order.
    pub scenes: Vec<PathBuf>,
}

impl Project {
    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        if self.manifest.output.is_absolute() {
            self.manifest.output.clone()
        } else {
            self.root.join(&self.manifest.output)
        }
    }
}

/// Discover scenes in a project directory.
///
/// Reads `fimage.yaml` from `root` if present and scans its sources;
/// otherwise scans all of `root`.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILE);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scenes = scan_sources(&manifest, &root);

    Ok(Project {
        root,
        manifest,
        has_manifest,
        scenes,
    })
}
