//! fimage - Continuous functional images
//!
//! An image is a function from points of the plane to values. Regions map
//! points to `bool`, colour images map them to [`Colour`], and blends map
//! them to a fraction in `[0, 1]`. Pictures are built by composing
//! generators, transformers, and pointwise combinators, then sampled over a
//! [`Viewport`] only when pixels are needed.
//!
//! ```
//! use fimage::{checker, circle, cond, Colour, Point};
//!
//! let board = checker(10.0, Colour::BLACK, Colour::WHITE);
//! let blank = fimage::constant(Colour::WHITE);
//! let image = cond(circle(Point::ORIGIN, 50.0, true, false), board, blank);
//!
//! assert_eq!(image(Point::new(5.0, 5.0)), Colour::BLACK);
//! assert_eq!(image(Point::new(100.0, 0.0)), Colour::WHITE);
//! ```

pub mod cli;
pub mod combinators;
pub mod demos;
pub mod discovery;
pub mod error;
pub mod functional;
pub mod generators;
pub mod image;
pub mod output;
pub mod render;
pub mod scene;
pub mod transform;
pub mod types;

pub use combinators::{complement, cond, darken, difference, intersection, lerp, lighten, union};
pub use discovery::{discover, Manifest, Project};
pub use error::{FimageError, Result};
pub use functional::{compose2, compose_all, identity, lift1, lift2, lift3, lift4};
pub use generators::{checker, circle, constant, polar_checker, rings, vertical_stripe};
pub use image::{from_fn, sampler, BaseImage, Blend, Fraction, Image, ImageValue, Region};
pub use render::{image_to_ascii, rasterize, region_to_ascii, write_png, Raster, Viewport};
pub use scene::{Node, Scene, SceneValue};
pub use transform::{rotate, scale, translate};
pub use types::{distance, to_polar, Colour, Point, Vector, WeightedMean};
