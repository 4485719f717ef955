//! Geometric transformers.
//!
//! Transforming an image means pulling each output point back through the
//! inverse transform and sampling the source there: rotating by `phi`
//! samples at `-phi`, translating by `v` samples at `p - v`, and so on.

use crate::functional::lift1;
use crate::image::{from_fn, sampler, BaseImage};
use crate::types::{Point, Vector};

/// Rotate `image` counter-clockwise by `phi` radians about the origin.
pub fn rotate<T: 'static>(image: BaseImage<T>, phi: f64) -> BaseImage<T> {
    let transform = move |p: Point| p.rotated(-phi);
    from_fn(lift1(sampler(image), transform))
}

/// Shift `image` by `v`.
pub fn translate<T: 'static>(image: BaseImage<T>, v: Vector) -> BaseImage<T> {
    let transform = move |p: Point| p - v;
    from_fn(lift1(sampler(image), transform))
}

/// Scale `image` uniformly by `s` about the origin. `s` must be nonzero.
pub fn scale<T: 'static>(image: BaseImage<T>, s: f64) -> BaseImage<T> {
    let transform = move |p: Point| p / s;
    from_fn(lift1(sampler(image), transform))
}
