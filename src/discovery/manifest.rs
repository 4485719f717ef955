//! Project manifest (fimage.yaml) parsing.
//!
//! The manifest says where scene files live, where rendered PNGs go, and
//! how scenes without their own `view` are framed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FimageError, Result};
use crate::render::Viewport;
use crate::types::Point;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "fimage.yaml";

/// Project manifest loaded from fimage.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for scene files. Defaults to the manifest's
    /// directory when empty.
    pub sources: Vec<String>,

    /// Output directory for rendered PNGs.
    pub output: PathBuf,

    /// Default raster width for scenes without a `view`.
    pub width: u32,

    /// Default raster height for scenes without a `view`.
    pub height: u32,

    /// Default pixel size, in plane units.
    pub pixel_size: f64,

    /// Integer upscaling applied when writing PNGs.
    pub scale: u32,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: PathBuf::from("dist"),
            width: 256,
            height: 256,
            pixel_size: 1.0,
            scale: 1,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a fimage.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FimageError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| FimageError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILE)),
        })
    }

    /// Serialize to YAML, for `fimage init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FimageError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Viewport used for scenes that do not carry their own.
    pub fn default_viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            center: Point::ORIGIN,
            pixel_size: self.pixel_size,
        }
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    ///
    /// Patterns are deliberately simple: `*.ext` matches a suffix,
    /// `dir/*` and `**/dir/*` match anything inside a directory of that
    /// name, and anything else matches as a substring.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes.iter().any(|pattern| matches_pattern(&path, pattern))
    }
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    let pattern = pattern.strip_prefix("**/").unwrap_or(pattern);

    if let Some(dir) = pattern.strip_suffix("/*") {
        let dir = format!("{}/", dir);
        return path.starts_with(&dir) || path.contains(&format!("/{}", dir));
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    path.contains(pattern)
}
