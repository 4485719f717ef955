//! Demo command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::demos::{demo, DEMOS};
use crate::error::{FimageError, Result};
use crate::output::{display_path, Printer};
use crate::render::{image_to_ascii, rasterize, write_png, Viewport};

use super::render::ensure_parent;

/// Render or list the built-in demos
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Demo to render
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// List available demos
    #[arg(long)]
    pub list: bool,

    /// Output PNG path (default: <name>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Override the viewport size in pixels (square)
    #[arg(long)]
    pub size: Option<u32>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Print a text rendering to stdout instead of writing a PNG
    #[arg(long)]
    pub ascii: bool,
}

pub fn run(args: DemoArgs, printer: &Printer) -> Result<()> {
    if args.list {
        for (name, description) in DEMOS {
            println!("{:<16} {}", name, printer.dim(description));
        }
        return Ok(());
    }

    let name = args.name.as_deref().ok_or_else(|| FimageError::Scene {
        message: "No demo name given".to_string(),
        help: Some("Pass a demo name or --list".to_string()),
    })?;

    let (image, view) = demo(name)?;
    let view = match args.size {
        Some(size) => resize(view, size),
        None => view,
    };

    if args.ascii {
        println!("{}", image_to_ascii(&image, &view)?);
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", name)));

    printer.status("Rendering", &format!("{} ({}x{})", name, view.width, view.height));
    let raster = rasterize(&image, &view)?;
    ensure_parent(&output)?;
    write_png(&raster, &output, args.scale)?;
    printer.status("Wrote", &printer.cyan(&display_path(&output)));

    Ok(())
}

/// Resize a square demo viewport, keeping the same window of the plane.
fn resize(view: Viewport, size: u32) -> Viewport {
    let extent = view.width.max(1) as f64 * view.pixel_size;
    Viewport {
        width: size,
        height: size,
        pixel_size: extent / size.max(1) as f64,
        ..view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_demo_writes_png() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("demo/rings.png");
        let args = DemoArgs {
            name: Some("rings".to_string()),
            list: false,
            output: Some(output.clone()),
            size: Some(32),
            scale: 1,
            ascii: false,
        };

        run(args, &Printer::plain()).unwrap();

        let img = ::image::open(&output).unwrap();
        assert_eq!((img.width(), img.height()), (32, 32));
    }

    #[test]
    fn test_unknown_demo_fails() {
        let args = DemoArgs {
            name: Some("nope".to_string()),
            list: false,
            output: None,
            size: None,
            scale: 1,
            ascii: false,
        };
        assert!(matches!(
            run(args, &Printer::plain()),
            Err(FimageError::Scene { .. })
        ));
    }

    #[test]
    fn test_resize_keeps_extent() {
        let view = resize(Viewport::new(256, 256), 64);
        assert_eq!(view.width, 64);
        assert_eq!(view.pixel_size, 4.0);
    }
}
