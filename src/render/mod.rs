//! Rendering module for fimage.
//!
//! Turns continuous images into pixels: viewports and rasters for sampling,
//! PNG files for output, and text renderings for quick inspection.

mod png;
mod raster;

pub use png::{scale_pixels, write_png};
pub use raster::{image_to_ascii, rasterize, region_to_ascii, Raster, Viewport};
