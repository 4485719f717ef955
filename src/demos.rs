//! Built-in demo pictures.
//!
//! Each demo is a small composition exercising one or more combinators,
//! framed by a 256x256 viewport centred on the origin.

use std::f64::consts::PI;

use crate::combinators::{cond, darken, lerp, lighten};
use crate::error::{FimageError, Result};
use crate::generators::{checker, circle, constant, polar_checker, rings, vertical_stripe};
use crate::image::{from_fn, Blend, Image};
use crate::render::Viewport;
use crate::transform::{rotate, scale, translate};
use crate::types::{distance, Colour, Point, Vector};

/// Names and one-line descriptions of every demo.
pub const DEMOS: &[(&str, &str)] = &[
    ("checker", "Black and white checkerboard"),
    ("polar-checker", "Checkerboard in polar coordinates, 12 sectors"),
    ("rings", "Concentric rings around the origin"),
    ("stripe", "A single vertical stripe"),
    ("circle", "A filled disk"),
    ("rotated-checker", "Checkerboard rotated by 30 degrees"),
    ("gradient", "Horizontal blend from crimson to teal"),
    ("vignette", "Checkerboard darkened toward the edges"),
    ("spotlight", "Rings lightened inside a shifted disk"),
    ("cond-circle", "Polar checker inside a disk, rings outside"),
];

fn crimson() -> Colour {
    Colour::rgb(220, 20, 60)
}

fn teal() -> Colour {
    Colour::rgb(0, 128, 128)
}

/// Look up a demo by name.
pub fn demo(name: &str) -> Result<(Image, Viewport)> {
    let image = match name {
        "checker" => checker(16.0, Colour::BLACK, Colour::WHITE),
        "polar-checker" => polar_checker(16.0, 12, Colour::BLACK, Colour::WHITE),
        "rings" => rings(Point::ORIGIN, 16.0, Colour::BLACK, Colour::WHITE),
        "stripe" => vertical_stripe(40.0, crimson(), Colour::WHITE),
        "circle" => circle(Point::ORIGIN, 80.0, teal(), Colour::WHITE),
        "rotated-checker" => rotate(checker(24.0, Colour::BLACK, Colour::WHITE), PI / 6.0),
        "gradient" => {
            let ramp: Blend = from_fn(|p: Point| (p.first + 128.0) / 256.0);
            lerp(ramp, constant(crimson()), constant(teal()))
        }
        "vignette" => {
            let falloff: Blend = from_fn(|p: Point| distance(p, Point::ORIGIN) / 180.0);
            darken(checker(16.0, crimson(), Colour::WHITE), falloff)
        }
        "spotlight" => {
            let spot = translate(
                scale(circle(Point::ORIGIN, 1.0, 0.75, 0.0), 50.0),
                Vector::new(-30.0, 20.0),
            );
            lighten(rings(Point::ORIGIN, 12.0, teal(), Colour::BLACK), spot)
        }
        "cond-circle" => cond(
            circle(Point::ORIGIN, 90.0, true, false),
            polar_checker(16.0, 16, crimson(), Colour::WHITE),
            rings(Point::ORIGIN, 10.0, Colour::BLACK, teal()),
        ),
        _ => {
            let names: Vec<&str> = DEMOS.iter().map(|(name, _)| *name).collect();
            return Err(FimageError::Scene {
                message: format!("Unknown demo: {}", name),
                help: Some(format!("Available demos: {}", names.join(", "))),
            });
        }
    };

    Ok((image, Viewport::new(256, 256)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rasterize;

    #[test]
    fn test_every_demo_builds_and_samples() {
        for (name, _) in DEMOS {
            let (image, view) = demo(name).unwrap();
            let small = Viewport { width: 8, height: 8, ..view }.with_pixel_size(32.0);
            let raster = rasterize(&image, &small).unwrap();
            assert_eq!((raster.width(), raster.height()), (8, 8), "{}", name);
        }
    }

    #[test]
    fn test_unknown_demo() {
        assert!(matches!(demo("mandelbrot"), Err(FimageError::Scene { .. })));
    }

    #[test]
    fn test_spotlight_is_brighter_inside() {
        let (image, _) = demo("spotlight").unwrap();
        let lit = image(Point::new(-30.0, 20.0));
        let plain = image(Point::new(100.0, -100.0));
        assert!(lit.lightness() > 0.5);
        assert!(plain.lightness() < lit.lightness());
    }

    #[test]
    fn test_gradient_endpoints() {
        let (image, _) = demo("gradient").unwrap();
        assert_eq!(image(Point::new(-128.0, 0.0)), crimson());
        assert_eq!(image(Point::new(128.0, 0.0)), teal());
    }
}
