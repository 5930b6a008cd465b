//! The two raster operations: displacement-map warping and alpha overlay.

/// Displacement-map filter.
pub mod displace;
/// Alpha overlay compositing.
pub mod overlay;

pub use self::displace::{DisplacementMap, displace};
pub use self::overlay::{blend, overlay};
