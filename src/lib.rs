//! dispmap warps images through displacement maps and alpha-composites the result.
//!
//! The two core operations are pure functions over owned 8-bit rasters:
//!
//! - [`displace`] / [`DisplacementMap`]: move every pixel of a BGRA target by offsets read from
//!   one channel of a same-sized BGR map.
//! - [`overlay`]: composite a BGRA foreground over a BGR background at any signed offset.
//!
//! Around them sit [`ScrollSession`], which slides a crop window across a wider map and
//! renders one frame per position into a [`FrameSink`], and the [`assets`] helpers that bridge
//! to the `image` crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod assets;
pub mod effects;
pub mod encode;
pub mod raster;
pub mod session;

pub use crate::foundation::core::{CropRect, FrameIndex, Offset};
pub use crate::foundation::error::{DispmapError, DispmapResult};

pub use crate::effects::{DisplacementMap, blend, displace, overlay};
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::raster::{Bgr8Image, Bgra8Image, Component, Raster};
pub use crate::session::{ScrollOpts, ScrollSession, ScrollStats};
