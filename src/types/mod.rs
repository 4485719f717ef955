//! Core value types for fimage.
//!
//! - `Point` / `Vector` - Cartesian coordinates and displacements
//! - `Colour` - RGBA colour values with a linear blend law
//! - `WeightedMean` - the blend law shared by colours and fractions

mod colour;
mod coord;

pub use colour::{Colour, WeightedMean};
pub use coord::{distance, to_polar, Point, Vector};
