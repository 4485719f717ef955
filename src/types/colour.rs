//! Colour type, blending and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Deserializer};

use crate::error::{FimageError, Result};

/// Values that can be linearly interpolated by a fraction.
///
/// `a.weighted_mean(b, 0.0) == a` and `a.weighted_mean(b, 1.0) == b`.
/// Weights outside `[0, 1]` are clamped to the nearest endpoint.
pub trait WeightedMean {
    fn weighted_mean(&self, other: &Self, weight: f64) -> Self;
}

impl WeightedMean for f64 {
    fn weighted_mean(&self, other: &Self, weight: f64) -> Self {
        let t = clamp_weight(weight);
        self * (1.0 - t) + other * t
    }
}

/// An RGBA colour with floating point channels in `[0, 1]`.
///
/// Channels are stored in sRGB space and blended channel-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    rgb: Srgb<f32>,
    alpha: f32,
}

impl Colour {
    /// Create a colour from 8-bit RGBA components.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgb: Srgb::new(unit(r), unit(g), unit(b)),
            alpha: unit(a),
        }
    }

    /// Create an opaque colour from 8-bit RGB components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Black.
    pub const BLACK: Self = Self {
        rgb: Srgb::new(0.0, 0.0, 0.0),
        alpha: 1.0,
    };

    /// White.
    pub const WHITE: Self = Self {
        rgb: Srgb::new(1.0, 1.0, 1.0),
        alpha: 1.0,
    };

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self {
        rgb: Srgb::new(0.0, 0.0, 0.0),
        alpha: 0.0,
    };

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    ///
    /// The names `black` and `white` are also accepted.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            [r, g, b, a] => Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::new(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                a1 << 4 | a0,
            )),
            _ => Err(FimageError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Convert to an 8-bit RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [
            byte(self.rgb.red),
            byte(self.rgb.green),
            byte(self.rgb.blue),
            byte(self.alpha),
        ]
    }

    /// HSL lightness in `[0, 1]`.
    pub fn lightness(self) -> f32 {
        let hsl: Hsl = self.rgb.into_color();
        hsl.lightness
    }
}

impl WeightedMean for Colour {
    /// Channel-wise convex combination `(1 - t) * self + t * other`.
    fn weighted_mean(&self, other: &Self, weight: f64) -> Self {
        let t = clamp_weight(weight) as f32;
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self {
            rgb: Srgb::new(
                mix(self.rgb.red, other.rgb.red),
                mix(self.rgb.green, other.rgb.green),
                mix(self.rgb.blue, other.rgb.blue),
            ),
            alpha: mix(self.alpha, other.alpha),
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Colour {
    type Err = FimageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Blend weights saturate at the endpoints; NaN falls back to the first operand.
fn clamp_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    }
}

fn unit(v: u8) -> f32 {
    v as f32 / 255.0
}

fn byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| FimageError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#ABC").unwrap(), Colour::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 0x88));
    }

    #[test]
    fn test_from_hex_names() {
        assert_eq!(Colour::from_hex("black").unwrap(), Colour::BLACK);
        assert_eq!(Colour::from_hex(" White ").unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#FF0000");
        assert_eq!(Colour::new(255, 0, 0, 128).to_string(), "#FF000080");
    }

    #[test]
    fn test_weighted_mean_endpoints() {
        let a = Colour::rgb(10, 200, 30);
        let b = Colour::new(250, 0, 90, 0);
        assert_eq!(a.weighted_mean(&b, 0.0), a);
        assert_eq!(a.weighted_mean(&b, 1.0), b);
    }

    #[test]
    fn test_weighted_mean_midpoint() {
        let grey = Colour::BLACK.weighted_mean(&Colour::WHITE, 0.5);
        assert_eq!(grey.to_rgba(), [128, 128, 128, 255]);
    }

    #[test]
    fn test_weighted_mean_clamps() {
        let a = Colour::rgb(40, 40, 40);
        assert_eq!(a.weighted_mean(&Colour::WHITE, 3.0), Colour::WHITE);
        assert_eq!(a.weighted_mean(&Colour::WHITE, -1.0), a);
        assert_eq!(a.weighted_mean(&Colour::WHITE, f64::NAN), a);
        assert_eq!(2.0_f64.weighted_mean(&4.0, 7.0), 4.0);
    }

    #[test]
    fn test_fraction_weighted_mean() {
        assert_eq!(2.0_f64.weighted_mean(&4.0, 0.25), 2.5);
    }

    #[test]
    fn test_lightness() {
        assert_eq!(Colour::BLACK.lightness(), 0.0);
        assert_eq!(Colour::WHITE.lightness(), 1.0);
    }
}
