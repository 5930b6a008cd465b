//! Bridging between `image` crate buffers and dispmap rasters.

/// Decoding and conversion helpers.
pub mod decode;

pub use self::decode::{decode_map, decode_target, load_map, load_target, save_png};
