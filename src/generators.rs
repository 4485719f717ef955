//! Primitive patterns: pure functions of space.
//!
//! Every generator is generic over the value it produces, so the same
//! `checker` gives a colour image, a region or a blend field depending on
//! the values passed in.

use std::f64::consts::PI;

use crate::image::{from_fn, BaseImage, ImageValue};
use crate::types::{distance, to_polar, Point};

/// An image that ignores the point and always yields `t`.
pub fn constant<T: ImageValue>(t: T) -> BaseImage<T> {
    from_fn(move |_| t.clone())
}

/// A closed disk: `inner` within `radius` of `center`, `outer` elsewhere.
pub fn circle<T: ImageValue>(center: Point, radius: f64, inner: T, outer: T) -> BaseImage<T> {
    from_fn(move |p| {
        if distance(p, center) <= radius {
            inner.clone()
        } else {
            outer.clone()
        }
    })
}

/// An infinite checkerboard of `d`-sized axis-aligned squares.
///
/// The cell `[0, d) x [0, d)` is `this_way`. `d` must be nonzero.
pub fn checker<T: ImageValue>(d: f64, this_way: T, that_way: T) -> BaseImage<T> {
    from_fn(move |p| {
        if is_odd((p.first / d).floor() + (p.second / d).floor()) {
            that_way.clone()
        } else {
            this_way.clone()
        }
    })
}

/// A checkerboard laid over polar coordinates: `n` angular sectors, rings
/// of width `d`.
///
/// Angles are measured in `[0, 2π)`, so the sector seam lies on the positive
/// horizontal axis. With an odd `n` the first and last sectors share a colour
/// and meet there without alternating.
pub fn polar_checker<T: ImageValue>(d: f64, n: u32, this_way: T, that_way: T) -> BaseImage<T> {
    let sectors = f64::from(n);
    let rescale = move |p: Point| Point::new(p.first, p.second * sectors * d / (2.0 * PI));
    from_fn(crate::compose!(to_polar, rescale, checker(d, this_way, that_way)))
}

/// Concentric annuli of width `d` around `center`, starting with `this_way`.
pub fn rings<T: ImageValue>(center: Point, d: f64, this_way: T, that_way: T) -> BaseImage<T> {
    from_fn(move |p| {
        if is_odd((distance(p, center) / d).floor()) {
            that_way.clone()
        } else {
            this_way.clone()
        }
    })
}

/// A single vertical band of width `d` centred on the vertical axis.
pub fn vertical_stripe<T: ImageValue>(d: f64, this_way: T, that_way: T) -> BaseImage<T> {
    from_fn(move |p| {
        if p.first.abs() <= d / 2.0 {
            this_way.clone()
        } else {
            that_way.clone()
        }
    })
}

/// Parity of an integral float. NaN counts as even.
fn is_odd(cell: f64) -> bool {
    (cell as i64).rem_euclid(2) == 1
}
