//! PNG output for rasterized images.
//!
//! Encodes colour rasters as PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{FimageError, Result};
use crate::types::Colour;

use super::Raster;

/// Write a colour raster to a PNG file.
///
/// # Arguments
///
/// * `raster` - The sampled image to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(raster: &Raster<Colour>, path: &Path, scale: u32) -> Result<()> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(FimageError::Render {
            message: format!("Cannot encode an empty raster to {}", path.display()),
            help: None,
        });
    }

    let (width, height) = scaled_size(raster, scale).ok_or_else(|| FimageError::Render {
        message: format!(
            "Scaled image is too large: {}x{} at scale {}",
            raster.width(),
            raster.height(),
            scale
        ),
        help: Some("Use a smaller viewport or scale factor".to_string()),
    })?;
    let scaled = Raster::new(scale_pixels(raster.pixels(), scale));

    let img: RgbaImage = ImageBuffer::from_raw(width, height, scaled.to_rgba_buffer())
        .ok_or_else(|| FimageError::Render {
            message: format!("Raster rows are ragged ({}x{})", width, height),
            help: None,
        })?;

    img.save(path).map_err(|e| FimageError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Output dimensions after scaling, or `None` if either overflows `u32`.
fn scaled_size<T>(raster: &Raster<T>, scale: u32) -> Option<(u32, u32)> {
    let factor = scale.max(1);
    let width = u32::try_from(raster.width()).ok()?.checked_mul(factor)?;
    let height = u32::try_from(raster.height()).ok()?.checked_mul(factor)?;
    Some((width, height))
}

/// Scale a pixel grid by an integer factor.
///
/// Uses nearest-neighbour scaling, so every sample stays a hard-edged block.
/// A factor of 0 is treated as 1.
pub fn scale_pixels(pixels: &[Vec<Colour>], scale: u32) -> Vec<Vec<Colour>> {
    let factor = scale.max(1) as usize;

    pixels
        .iter()
        .flat_map(|row| {
            let wide: Vec<Colour> = row
                .iter()
                .flat_map(|&colour| std::iter::repeat(colour).take(factor))
                .collect();
            std::iter::repeat(wide).take(factor)
        })
        .collect()
}
