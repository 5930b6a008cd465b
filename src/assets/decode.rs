use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

use crate::foundation::error::{DispmapError, DispmapResult};
use crate::raster::{Bgr8Image, Bgra8Image};

impl Bgr8Image {
    /// Convert any decoded image to an opaque BGR raster; alpha, if present, is dropped.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let mut out = Self::new(width, height);
        for (dst, src) in out.as_bytes_mut().chunks_exact_mut(3).zip(rgb.pixels()) {
            dst.copy_from_slice(&[src[2], src[1], src[0]]);
        }
        out
    }

    /// Convert to an `image` RGB buffer (channel order swapped back to R, G, B).
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let [b, g, r] = self.pixel(y, x);
            Rgb([r, g, b])
        })
    }
}

impl Bgra8Image {
    /// Convert a decoded image that carries an alpha channel to a BGRA raster.
    ///
    /// Images without alpha fail with [`DispmapError::DimensionMismatch`]: a target needs a
    /// transparency layer.
    pub fn from_dynamic(img: &DynamicImage) -> DispmapResult<Self> {
        if !img.color().has_alpha() {
            return Err(DispmapError::dimension_mismatch(format!(
                "expected an image with an alpha channel, got {:?}",
                img.color()
            )));
        }
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut out = Self::new(width, height);
        for (dst, src) in out.as_bytes_mut().chunks_exact_mut(4).zip(rgba.pixels()) {
            dst.copy_from_slice(&[src[2], src[1], src[0], src[3]]);
        }
        Ok(out)
    }

    /// Convert to an `image` RGBA buffer (straight alpha).
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let [b, g, r, a] = self.pixel(y, x);
            Rgba([r, g, b, a])
        })
    }
}

/// Decode encoded image bytes into an opaque map raster.
pub fn decode_map(bytes: &[u8]) -> DispmapResult<Bgr8Image> {
    let img = image::load_from_memory(bytes).context("decode map image from memory")?;
    Ok(Bgr8Image::from_dynamic(&img))
}

/// Decode encoded image bytes into a translucent target raster.
pub fn decode_target(bytes: &[u8]) -> DispmapResult<Bgra8Image> {
    let img = image::load_from_memory(bytes).context("decode target image from memory")?;
    Bgra8Image::from_dynamic(&img)
}

/// Load and decode a map image from disk.
pub fn load_map(path: &Path) -> DispmapResult<Bgr8Image> {
    let img = image::open(path).with_context(|| format!("open map '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded map"
    );
    Ok(Bgr8Image::from_dynamic(&img))
}

/// Load and decode a target image from disk. The file must carry an alpha channel.
pub fn load_target(path: &Path) -> DispmapResult<Bgra8Image> {
    let img = image::open(path).with_context(|| format!("open target '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded target"
    );
    Bgra8Image::from_dynamic(&img)
}

/// Encode a BGR raster as PNG at `path`.
pub fn save_png(img: &Bgr8Image, path: &Path) -> DispmapResult<()> {
    img.to_rgb_image()
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
