use crate::foundation::error::{DispmapError, DispmapResult};

/// Absolute 0-based frame index within a scroll session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Signed placement of a foreground raster relative to a background origin.
///
/// `x` moves along columns, `y` along rows. Either may be negative.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Offset {
    /// Column offset in pixels.
    pub x: i32,
    /// Row offset in pixels.
    pub y: i32,
}

impl Offset {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create an offset from column/row components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned sub-rectangle of a raster, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in columns.
    pub width: u32,
    /// Height in rows.
    pub height: u32,
}

impl CropRect {
    /// Create a crop rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, or an error if it does not fit in `u32`.
    pub fn right(self) -> DispmapResult<u32> {
        self.x
            .checked_add(self.width)
            .ok_or_else(|| DispmapError::validation("crop rect right edge overflows u32"))
    }

    /// Exclusive bottom edge, or an error if it does not fit in `u32`.
    pub fn bottom(self) -> DispmapResult<u32> {
        self.y
            .checked_add(self.height)
            .ok_or_else(|| DispmapError::validation("crop rect bottom edge overflows u32"))
    }

    /// Fail unless the rectangle lies entirely inside a `width x height` raster.
    pub fn ensure_within(self, width: u32, height: u32) -> DispmapResult<()> {
        if self.right()? > width || self.bottom()? > height {
            return Err(DispmapError::validation(format!(
                "crop rect {}x{}+{}+{} exceeds source bounds {width}x{height}",
                self.width, self.height, self.x, self.y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
