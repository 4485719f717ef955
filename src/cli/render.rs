//! Render command implementation.
//!
//! Loads one scene file, samples it over its viewport, and writes a PNG.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{FimageError, Result};
use crate::output::{display_path, Printer};
use crate::render::{image_to_ascii, rasterize, write_png, Viewport};
use crate::scene::Scene;

/// Render a single scene file to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Scene file (.scene.yaml, .scene.yml or .scene.json)
    pub scene: PathBuf,

    /// Output PNG path (default: <scene name>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Override the viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the viewport height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the pixel size in plane units
    #[arg(long)]
    pub pixel_size: Option<f64>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Print a text rendering to stdout instead of writing a PNG
    #[arg(long)]
    pub ascii: bool,
}

impl RenderArgs {
    /// Apply command-line overrides on top of a scene's viewport.
    fn viewport(&self, base: Viewport) -> Viewport {
        Viewport {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            pixel_size: self.pixel_size.unwrap_or(base.pixel_size),
            ..base
        }
    }
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let scene = Scene::load(&args.scene)?;
    let viewport = args.viewport(scene.viewport_or(Viewport::default()));
    let image = scene.build()?;

    if args.ascii {
        println!("{}", image_to_ascii(&image, &viewport)?);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", scene.display_name())));

    printer.status(
        "Rendering",
        &format!(
            "{} ({}x{})",
            scene.display_name(),
            viewport.width,
            viewport.height
        ),
    );

    let raster = rasterize(&image, &viewport)?;
    ensure_parent(&output)?;
    write_png(&raster, &output, args.scale)?;

    printer.status("Wrote", &printer.cyan(&display_path(&output)));
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| FimageError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}
