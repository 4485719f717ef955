//! Rasterizer - samples a continuous image over a pixel grid.
//!
//! The image core knows nothing about pixels. A `Viewport` decides which
//! window of the plane is visible and how large a pixel is; a `Raster` holds
//! the values sampled at each pixel centre.

use serde::{Deserialize, Serialize};

use crate::error::{FimageError, Result};
use crate::image::{BaseImage, Image, Region};
use crate::types::{Colour, Point};

/// Characters used by [`image_to_ascii`], darkest first.
const SHADES: &[u8] = b" .:-=+*#%@";

/// A rectangular window onto the image plane.
///
/// Row 0 is the top of the window; the plane's second axis grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Point of the plane shown at the centre of the window.
    pub center: Point,
    /// Side length of one pixel in plane units.
    pub pixel_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            center: Point::ORIGIN,
            pixel_size: 1.0,
        }
    }
}

impl Viewport {
    /// A viewport centred on the origin with unit pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the point shown at the centre.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Set the pixel size in plane units.
    pub fn with_pixel_size(mut self, pixel_size: f64) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Check that the viewport describes a non-empty, finite window.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FimageError::Render {
                message: format!("Viewport is empty: {}x{}", self.width, self.height),
                help: Some("Width and height must both be at least 1".to_string()),
            });
        }

        if !(self.pixel_size.is_finite() && self.pixel_size > 0.0) {
            return Err(FimageError::Render {
                message: format!("Invalid pixel size: {}", self.pixel_size),
                help: Some("Pixel size must be a positive number".to_string()),
            });
        }

        if !(self.center.first.is_finite() && self.center.second.is_finite()) {
            return Err(FimageError::Render {
                message: format!("Invalid viewport centre: {}", self.center),
                help: None,
            });
        }

        Ok(())
    }

    /// The plane point at the centre of pixel `(x, y)`.
    pub fn point_at(&self, x: u32, y: u32) -> Point {
        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;
        Point::new(
            self.center.first + (f64::from(x) + 0.5 - half_w) * self.pixel_size,
            self.center.second + (half_h - f64::from(y) - 0.5) * self.pixel_size,
        )
    }
}

/// A grid of sampled values (row-major: `pixels[y][x]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T> {
    pixels: Vec<Vec<T>>,
    width: usize,
    height: usize,
}

impl<T> Raster<T> {
    /// Sample `image` at every pixel centre of `viewport`.
    pub fn sample(image: &BaseImage<T>, viewport: &Viewport) -> Result<Self> {
        viewport.validate()?;

        let pixels = (0..viewport.height)
            .map(|y| {
                (0..viewport.width)
                    .map(|x| image(viewport.point_at(x, y)))
                    .collect()
            })
            .collect();

        Ok(Self::new(pixels))
    }

    /// Wrap an existing grid.
    pub fn new(pixels: Vec<Vec<T>>) -> Self {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.pixels.get(y).and_then(|row| row.get(x))
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<T>] {
        &self.pixels
    }

    /// Render each row with `glyph` and join rows with newlines.
    pub fn to_text(&self, glyph: impl Fn(&T) -> char) -> String {
        self.pixels
            .iter()
            .map(|row| row.iter().map(&glyph).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Raster<Colour> {
    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

/// Sample a colour image over `viewport`.
pub fn rasterize(image: &Image, viewport: &Viewport) -> Result<Raster<Colour>> {
    Raster::sample(image, viewport)
}

/// Draw a region as text: `#` inside, `.` outside.
pub fn region_to_ascii(region: &Region, viewport: &Viewport) -> Result<String> {
    let raster = Raster::sample(region, viewport)?;
    Ok(raster.to_text(|&inside| if inside { '#' } else { '.' }))
}

/// Draw a colour image as text, shading by lightness.
pub fn image_to_ascii(image: &Image, viewport: &Viewport) -> Result<String> {
    let raster = rasterize(image, viewport)?;
    Ok(raster.to_text(|colour| shade(colour.lightness())))
}

fn shade(lightness: f32) -> char {
    let last = SHADES.len() - 1;
    let index = (lightness.clamp(0.0, 1.0) * last as f32).round() as usize;
    SHADES[index.min(last)] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{checker, circle, constant};

    #[test]
    fn test_point_at_pixel_centres() {
        let view = Viewport::new(4, 2);
        assert_eq!(view.point_at(0, 0), Point::new(-1.5, 0.5));
        assert_eq!(view.point_at(3, 1), Point::new(1.5, -0.5));

        let view = Viewport::new(2, 2)
            .with_center(Point::new(10.0, 10.0))
            .with_pixel_size(2.0);
        assert_eq!(view.point_at(0, 0), Point::new(9.0, 11.0));
    }

    #[test]
    fn test_validate_rejects_empty_and_degenerate() {
        assert!(Viewport::new(0, 5).validate().is_err());
        assert!(Viewport::new(5, 5).with_pixel_size(0.0).validate().is_err());
        assert!(Viewport::new(5, 5).with_pixel_size(f64::NAN).validate().is_err());
        assert!(Viewport::new(5, 5).validate().is_ok());
    }

    #[test]
    fn test_sample_dimensions() {
        let raster = Raster::sample(&constant(1_u8), &Viewport::new(3, 2)).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get(2, 1), Some(&1));
        assert_eq!(raster.get(3, 0), None);
    }

    #[test]
    fn test_rasterize_checker() {
        let img = checker(1.0, Colour::BLACK, Colour::WHITE);
        let raster = rasterize(&img, &Viewport::new(2, 2)).unwrap();
        // Top-left pixel centre is (-0.5, 0.5): floor sum -1, odd.
        assert_eq!(raster.get(0, 0), Some(&Colour::WHITE));
        assert_eq!(raster.get(1, 0), Some(&Colour::BLACK));
        assert_eq!(raster.get(0, 1), Some(&Colour::BLACK));
        assert_eq!(raster.get(1, 1), Some(&Colour::WHITE));
    }

    #[test]
    fn test_region_to_ascii() {
        let disk = circle(Point::ORIGIN, 1.0, true, false);
        let text = region_to_ascii(&disk, &Viewport::new(4, 4)).unwrap();
        assert_eq!(text, "....\n.##.\n.##.\n....");
    }

    #[test]
    fn test_image_to_ascii_extremes() {
        let text = image_to_ascii(&constant(Colour::WHITE), &Viewport::new(2, 1)).unwrap();
        assert_eq!(text, "@@");
        let text = image_to_ascii(&constant(Colour::BLACK), &Viewport::new(2, 1)).unwrap();
        assert_eq!(text, "  ");
    }

    #[test]
    fn test_rgba_buffer() {
        let raster = Raster::new(vec![vec![Colour::BLACK, Colour::rgb(1, 2, 3)]]);
        assert_eq!(raster.to_rgba_buffer(), vec![0, 0, 0, 255, 1, 2, 3, 255]);
    }
}
