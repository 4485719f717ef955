//! The base image abstraction.
//!
//! An image is a total function from a [`Point`] to a value. Every generator,
//! transformer and combinator builds a new `BaseImage` by capturing its
//! inputs; nothing is ever mutated after construction, so a single image can
//! be shared across threads and sampled concurrently.

use std::sync::Arc;

use crate::types::{Colour, Point};

/// A blend weight, nominally in `[0, 1]`.
pub type Fraction = f64;

/// A function from the plane to `T`.
pub type BaseImage<T> = Arc<dyn Fn(Point) -> T + Send + Sync>;

/// A boolean mask.
pub type Region = BaseImage<bool>;

/// A colour picture.
pub type Image = BaseImage<Colour>;

/// A spatially varying blend weight.
pub type Blend = BaseImage<Fraction>;

/// Values an image can produce: freely copied and shared across threads.
pub trait ImageValue: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> ImageValue for T {}

/// Wrap a pointwise function as an image.
pub fn from_fn<T, F>(f: F) -> BaseImage<T>
where
    F: Fn(Point) -> T + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Turn an image back into a plain closure so it can be fed to
/// [`lift1`](crate::functional::lift1) and friends.
pub fn sampler<T: 'static>(image: BaseImage<T>) -> impl Fn(Point) -> T + Send + Sync + 'static {
    move |p| image(p)
}
