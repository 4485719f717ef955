//! Value combinators.
//!
//! Each combinator names a pointwise rule and hands it to `lift`; none of
//! them touch coordinates directly.

use crate::functional::{lift1, lift2, lift3};
use crate::generators::constant;
use crate::image::{from_fn, sampler, BaseImage, Blend, Image, ImageValue, Region};
use crate::types::{Colour, WeightedMean};

/// Pick `this_way` where `region` holds and `that_way` elsewhere.
pub fn cond<T: ImageValue>(
    region: Region,
    this_way: BaseImage<T>,
    that_way: BaseImage<T>,
) -> BaseImage<T> {
    let select = |r: bool, a: T, b: T| if r { a } else { b };
    from_fn(lift3(select, sampler(region), sampler(this_way), sampler(that_way)))
}

/// Interpolate from `this_way` (weight 0) to `that_way` (weight 1).
///
/// Weights outside `[0, 1]` saturate at the nearest endpoint.
pub fn lerp<T>(blend: Blend, this_way: BaseImage<T>, that_way: BaseImage<T>) -> BaseImage<T>
where
    T: ImageValue + WeightedMean,
{
    let mean = |a: T, b: T, w: f64| a.weighted_mean(&b, w);
    from_fn(lift3(mean, sampler(this_way), sampler(that_way), sampler(blend)))
}

/// Fade `image` toward black in proportion to `blend`.
pub fn darken(image: Image, blend: Blend) -> Image {
    lerp(blend, image, constant(Colour::BLACK))
}

/// Fade `image` toward white in proportion to `blend`.
pub fn lighten(image: Image, blend: Blend) -> Image {
    lerp(blend, image, constant(Colour::WHITE))
}

/// Points outside `region`.
pub fn complement(region: Region) -> Region {
    from_fn(lift1(|r: bool| !r, sampler(region)))
}

/// Points in either region.
pub fn union(a: Region, b: Region) -> Region {
    from_fn(lift2(|x: bool, y: bool| x || y, sampler(a), sampler(b)))
}

/// Points in both regions.
pub fn intersection(a: Region, b: Region) -> Region {
    from_fn(lift2(|x: bool, y: bool| x && y, sampler(a), sampler(b)))
}

/// Points in `a` but not in `b`.
pub fn difference(a: Region, b: Region) -> Region {
    from_fn(lift2(|x: bool, y: bool| x && !y, sampler(a), sampler(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{checker, circle, rings, vertical_stripe};
    use crate::types::Point;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::ORIGIN,
            Point::new(3.0, 3.0),
            Point::new(12.0, 3.0),
            Point::new(-7.25, 1.5),
            Point::new(1e6, -1e6),
        ]
    }

    fn pattern() -> Image {
        checker(10.0, Colour::rgb(200, 10, 10), Colour::rgb(10, 10, 200))
    }

    fn other() -> Image {
        rings(Point::ORIGIN, 4.0, Colour::WHITE, Colour::rgb(30, 120, 60))
    }

    #[test]
    fn test_cond_constant_regions() {
        let always = cond(constant(true), pattern(), other());
        let never = cond(constant(false), pattern(), other());
        let (a, b) = (pattern(), other());
        for p in sample_points() {
            assert_eq!(always(p), a(p));
            assert_eq!(never(p), b(p));
        }
    }

    #[test]
    fn test_cond_selects_by_region() {
        let img = cond(
            circle(Point::ORIGIN, 1.0, true, false),
            constant(Colour::BLACK),
            constant(Colour::WHITE),
        );
        assert_eq!(img(Point::new(0.5, 0.0)), Colour::BLACK);
        assert_eq!(img(Point::new(2.0, 0.0)), Colour::WHITE);
    }

    #[test]
    fn test_lerp_endpoints() {
        let start = lerp(constant(0.0), pattern(), other());
        let end = lerp(constant(1.0), pattern(), other());
        let (a, b) = (pattern(), other());
        for p in sample_points() {
            assert_eq!(start(p), a(p));
            assert_eq!(end(p), b(p));
        }
    }

    #[test]
    fn test_lerp_follows_blend_field() {
        let ramp: Blend = from_fn(|p: Point| p.first);
        let img = lerp(ramp, constant(Colour::BLACK), constant(Colour::WHITE));
        assert_eq!(img(Point::new(0.5, 9.0)).to_rgba(), [128, 128, 128, 255]);
        assert_eq!(img(Point::new(-3.0, 0.0)), Colour::BLACK);
        assert_eq!(img(Point::new(4.0, 0.0)), Colour::WHITE);
    }

    #[test]
    fn test_lerp_over_fractions() {
        let img = lerp(constant(0.5), constant(2.0), constant(4.0));
        assert_eq!(img(Point::ORIGIN), 3.0);
    }

    #[test]
    fn test_darken_and_lighten() {
        let grey = constant(Colour::rgb(100, 100, 100));
        let dark = darken(grey.clone(), constant(1.0));
        let light = lighten(grey.clone(), constant(1.0));
        let untouched = darken(grey.clone(), constant(0.0));
        assert_eq!(dark(Point::ORIGIN), Colour::BLACK);
        assert_eq!(light(Point::ORIGIN), Colour::WHITE);
        assert_eq!(untouched(Point::ORIGIN), Colour::rgb(100, 100, 100));

        let half = darken(grey, constant(0.5));
        assert_eq!(half(Point::ORIGIN).to_rgba(), [50, 50, 50, 255]);
    }

    #[test]
    fn test_region_algebra() {
        let disk = circle(Point::ORIGIN, 2.0, true, false);
        let band = vertical_stripe(1.0, true, false);
        let inside_band = Point::new(0.0, 1.0);
        let disk_only = Point::new(1.5, 0.0);
        let band_only = Point::new(0.0, 9.0);
        let neither = Point::new(9.0, 9.0);

        let both = intersection(disk.clone(), band.clone());
        let either = union(disk.clone(), band.clone());
        let cut = difference(disk.clone(), band.clone());
        let outside = complement(disk);

        assert!(both(inside_band) && !both(disk_only) && !both(band_only));
        assert!(either(disk_only) && either(band_only) && !either(neither));
        assert!(cut(disk_only) && !cut(inside_band));
        assert!(outside(neither) && !outside(disk_only));
    }
}
