//! Points and vectors in the image plane.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Sub};

use serde::{Deserialize, Serialize};

/// A location in the image plane.
///
/// Serialized as a two-element array `[first, second]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub first: f64,
    pub second: f64,
}

/// A displacement in the image plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vector {
    pub first: f64,
    pub second: f64,
}

impl Point {
    #[inline]
    pub const fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Rotate about the origin by `phi` radians (counter-clockwise).
    #[inline]
    pub fn rotated(self, phi: f64) -> Self {
        let (sin, cos) = phi.sin_cos();
        Self::new(
            self.first * cos - self.second * sin,
            self.first * sin + self.second * cos,
        )
    }

    /// Approximate equality, for comparing the results of trigonometry.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.first - other.first).abs() <= tolerance
            && (self.second - other.second).abs() <= tolerance
    }
}

impl Vector {
    #[inline]
    pub const fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// The opposite displacement.
    #[inline]
    pub fn negated(self) -> Self {
        Self::new(-self.first, -self.second)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.first + rhs.first, self.second + rhs.second)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.first - rhs.first, self.second - rhs.second)
    }
}

impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.first - rhs.first, self.second - rhs.second)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.first / rhs, self.second / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((first, second): (f64, f64)) -> Self {
        Self::new(first, second)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((first, second): (f64, f64)) -> Self {
        Self::new(first, second)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.first, p.second)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.first, v.second)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = p.first - q.first;
    let dy = p.second - q.second;
    (dx * dx + dy * dy).sqrt()
}

/// Convert a Cartesian point to polar form `(radius, angle)`.
///
/// The angle lies in `[0, 2π)`, measured counter-clockwise from the positive
/// horizontal axis.
pub fn to_polar(p: Point) -> Point {
    let radius = p.first.hypot(p.second);
    let angle = p.second.atan2(p.first).rem_euclid(2.0 * PI);
    Point::new(radius, angle)
}
