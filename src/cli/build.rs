//! Build command implementation.
//!
//! Discovers every scene in a project and renders each one to
//! `<output>/<name>.png`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::discover;
use crate::error::{FimageError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{rasterize, write_png};
use crate::scene::Scene;

/// Render every scene in a project
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root (default: current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (overrides the manifest)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Print a JSON summary to stdout
    #[arg(long)]
    pub json: bool,
}

/// One rendered scene, as reported by `build --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltScene {
    pub name: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Result of a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub scenes: Vec<BuiltScene>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let json = args.json;
    let summary = build(args, printer)?;

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| FimageError::Render {
            message: format!("Failed to serialize build summary: {}", e),
            help: None,
        })?;
        println!("{}", text);
    }

    Ok(())
}

/// Load every scene, rejecting two that would write the same output file.
fn load_scenes(paths: &[PathBuf]) -> Result<Vec<(PathBuf, Scene)>> {
    let mut seen: BTreeMap<String, &PathBuf> = BTreeMap::new();
    let mut scenes = Vec::with_capacity(paths.len());

    for path in paths {
        let scene = Scene::load(path)?;
        if let Some(first) = seen.insert(scene.display_name().to_string(), path) {
            return Err(FimageError::Scene {
                message: format!(
                    "Scenes {} and {} are both named `{}`",
                    display_path(first),
                    display_path(path),
                    scene.display_name()
                ),
                help: Some("Give one of them a distinct `name:`".to_string()),
            });
        }
        scenes.push((path.clone(), scene));
    }

    Ok(scenes)
}

/// Render all scenes of a project and report what was written.
pub fn build(args: BuildArgs, printer: &Printer) -> Result<BuildSummary> {
    let project = discover(&args.root)?;

    if !project.has_manifest {
        printer.warning(
            "Warning",
            &format!("no fimage.yaml in {}, using defaults", display_path(&args.root)),
        );
    }

    let output_dir = args.output.unwrap_or_else(|| project.output_dir());
    let scale = args.scale.unwrap_or(project.manifest.scale);
    let fallback = project.manifest.default_viewport();

    if project.scenes.is_empty() {
        printer.warning("Warning", "no scene files found");
        return Ok(BuildSummary {
            output_dir,
            scenes: Vec::new(),
        });
    }

    let scenes = load_scenes(&project.scenes)?;

    fs::create_dir_all(&output_dir).map_err(|e| FimageError::Io {
        path: output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut built = Vec::with_capacity(scenes.len());
    for (path, scene) in &scenes {
        let viewport = scene.viewport_or(fallback);
        let image = scene.build()?;

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
        let output = output_dir.join(format!("{}.png", scene.display_name()));
        write_png(&raster, &output, scale)?;

        built.push(BuiltScene {
            name: scene.display_name().to_string(),
            source: path.clone(),
            output,
            width: viewport.width,
            height: viewport.height,
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} into {}",
            plural(built.len(), "scene", "scenes"),
            printer.cyan(&display_path(&output_dir))
        ),
    );

    Ok(BuildSummary {
        output_dir,
        scenes: built,
    })
}
