use rayon::prelude::*;

use crate::foundation::error::{DispmapError, DispmapResult};
use crate::raster::{Bgr8Image, Bgra8Image, Component};

/// Parameters of a displacement-map filter.
///
/// For an output pixel at `(row, col)` the map pixel at the same coordinate supplies two channel
/// values `cx = map[component_x]` and `cy = map[component_y]`; the output copies the target pixel
/// at
///
/// ```text
/// (row + (cx - 128) * scale_x / 256,  col + (cy - 128) * scale_y / 256)
/// ```
///
/// with integer division truncating toward zero and both coordinates clamped into the target.
/// A map value of 128 therefore means "no displacement". Note that `component_x`/`scale_x`
/// act along rows and `component_y`/`scale_y` along columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplacementMap {
    /// Map channel driving the row displacement.
    pub component_x: Component,
    /// Map channel driving the column displacement.
    pub component_y: Component,
    /// Row displacement strength.
    pub scale_x: i32,
    /// Column displacement strength.
    pub scale_y: i32,
}

impl DisplacementMap {
    /// Build a filter from raw selectors (`0` blue, `1` green, `2` red).
    pub fn new(
        component_x: i32,
        component_y: i32,
        scale_x: i32,
        scale_y: i32,
    ) -> DispmapResult<Self> {
        Ok(Self {
            component_x: Component::try_from(component_x)?,
            component_y: Component::try_from(component_y)?,
            scale_x,
            scale_y,
        })
    }

    /// Warp `target` through `map`, returning a fresh raster the size of `target`.
    ///
    /// `map` and `target` must have identical dimensions.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(width = target.width(), height = target.height())
    )]
    pub fn apply(&self, map: &Bgr8Image, target: &Bgra8Image) -> DispmapResult<Bgra8Image> {
        if map.dimensions() != target.dimensions() {
            return Err(DispmapError::dimension_mismatch(format!(
                "map is {}x{} but target is {}x{}; they must match",
                map.width(),
                map.height(),
                target.width(),
                target.height()
            )));
        }

        let mut out = Bgra8Image::new(target.width(), target.height());
        if out.is_empty() {
            return Ok(out);
        }

        let rows = i64::from(target.height());
        let cols = i64::from(target.width());
        let stride = out.row_stride();
        out.as_bytes_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(row, out_row)| {
                let row = row as u32;
                let pixels = out_row
                    .chunks_exact_mut(Bgra8Image::CHANNELS)
                    .zip(map.row(row).chunks_exact(Bgr8Image::CHANNELS));
                for (col, (dst, m)) in pixels.enumerate() {
                    let m = [m[0], m[1], m[2]];
                    let cx = self.component_x.of(&m);
                    let cy = self.component_y.of(&m);
                    let src_row = displaced(i64::from(row), cx, self.scale_x, rows);
                    let src_col = displaced(col as i64, cy, self.scale_y, cols);
                    dst.copy_from_slice(&target.pixel(src_row, src_col));
                }
            });
        Ok(out)
    }
}

/// Warp `target` through `map`; see [`DisplacementMap`].
///
/// Selectors are checked before dimensions: an out-of-range selector fails with
/// [`DispmapError::InvalidArgument`] even when the rasters also disagree in size.
pub fn displace(
    map: &Bgr8Image,
    target: &Bgra8Image,
    component_x: i32,
    component_y: i32,
    scale_x: i32,
    scale_y: i32,
) -> DispmapResult<Bgra8Image> {
    DisplacementMap::new(component_x, component_y, scale_x, scale_y)?.apply(map, target)
}

// Clamp-high goes to `len - 1`. Callers guarantee `len >= 1`.
fn displaced(pos: i64, value: u8, scale: i32, len: i64) -> u32 {
    let d = pos + (i64::from(value) - 128) * i64::from(scale) / 256;
    d.clamp(0, len - 1) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/effects/displace.rs"]
mod tests;
