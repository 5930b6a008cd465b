use crate::foundation::core::CropRect;
use crate::foundation::error::{DispmapError, DispmapResult};

/// Opaque blue/green/red raster, 3 bytes per pixel.
pub type Bgr8Image = Raster<3>;

/// Blue/green/red/alpha raster with straight (non-premultiplied) alpha, 4 bytes per pixel.
pub type Bgra8Image = Raster<4>;

/// Owned 8-bit raster with `C` interleaved channels per pixel.
///
/// Pixels are tightly packed and stored row-major. Coordinates are always `(row, col)` with
/// `row < height` and `col < width`. The channel count is part of the type, so a 3-channel map
/// can never be handed to an API that needs an alpha channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster<const C: usize> {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl<const C: usize> Raster<C> {
    /// Bytes (channels) per pixel.
    pub const CHANNELS: usize = C;

    /// Zero-filled raster.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * C` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixel(width, height, [0; C])
    }

    /// Raster where every pixel equals `px`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * C` overflows `usize`.
    pub fn from_pixel(width: u32, height: u32, px: [u8; C]) -> Self {
        if byte_len::<C>(width, height).is_err() {
            panic!("raster {width}x{height}x{C} overflows usize");
        }
        let data = px.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing interleaved buffer.
    ///
    /// Fails with [`DispmapError::DimensionMismatch`] unless `data.len() == width * height * C`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> DispmapResult<Self> {
        let expected = byte_len::<C>(width, height)?;
        if data.len() != expected {
            return Err(DispmapError::dimension_mismatch(format!(
                "raw buffer of {} bytes does not match {width}x{height} with {C} channels \
                 ({expected} bytes)",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Channels per pixel, always `C`.
    pub fn channels(&self) -> usize {
        C
    }

    /// `true` when the raster holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes between the starts of two consecutive rows.
    pub fn row_stride(&self) -> usize {
        self.width as usize * C
    }

    /// Borrow the interleaved bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the interleaved bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow one row of `width * C` bytes.
    pub fn row(&self, row: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = row as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |r| self.row(r))
    }

    /// Read the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the raster.
    pub fn pixel(&self, row: u32, col: u32) -> [u8; C] {
        let i = self.index_of(row, col);
        std::array::from_fn(|c| self.data[i + c])
    }

    /// Read the pixel at `(row, col)`, or `None` outside the raster.
    pub fn get(&self, row: u32, col: u32) -> Option<[u8; C]> {
        (row < self.height && col < self.width).then(|| self.pixel(row, col))
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the raster.
    pub fn put_pixel(&mut self, row: u32, col: u32, px: [u8; C]) {
        let i = self.index_of(row, col);
        self.data[i..i + C].copy_from_slice(&px);
    }

    /// Copy the sub-rectangle `rect` into a new raster.
    ///
    /// The rectangle must lie entirely inside `self`.
    pub fn crop(&self, rect: CropRect) -> DispmapResult<Self> {
        rect.ensure_within(self.width, self.height)?;

        let out_stride = rect.width as usize * C;
        let mut data = Vec::with_capacity(out_stride * rect.height as usize);
        let first = rect.x as usize * C;
        for r in rect.y..rect.y + rect.height {
            data.extend_from_slice(&self.row(r)[first..first + out_stride]);
        }
        Ok(Self {
            width: rect.width,
            height: rect.height,
            data,
        })
    }

    fn index_of(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        (row as usize * self.width as usize + col as usize) * C
    }
}

fn byte_len<const C: usize>(width: u32, height: u32) -> DispmapResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(C))
        .ok_or_else(|| DispmapError::validation("raster buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
