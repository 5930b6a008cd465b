//! Bounds-checked interleaved 8-bit rasters and channel selectors.

/// The generic raster buffer.
pub mod buffer;
/// Channel selectors.
pub mod component;

pub use self::buffer::{Bgr8Image, Bgra8Image, Raster};
pub use self::component::Component;
