use std::ops::Range;

use rayon::prelude::*;

use crate::foundation::core::Offset;
use crate::raster::{Bgr8Image, Bgra8Image};

/// Composite `foreground` over `background` with its top-left corner at `location`.
///
/// Returns a fresh raster the size of `background`. Only background pixels covered by the
/// placed foreground can change; a foreground alpha of `0` leaves the background untouched and
/// `255` replaces it. Any size/offset combination is legal, including offsets that push the
/// foreground partly or wholly outside the background.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(
        bg_width = background.width(),
        bg_height = background.height(),
        x = location.x,
        y = location.y
    )
)]
pub fn overlay(background: &Bgr8Image, foreground: &Bgra8Image, location: Offset) -> Bgr8Image {
    let mut out = background.clone();

    let rows = overlap(background.height(), foreground.height(), location.y);
    let cols = overlap(background.width(), foreground.width(), location.x);
    if rows.is_empty() || cols.is_empty() {
        return out;
    }

    let stride = out.row_stride();
    let first_row = rows.start as usize;
    let row_count = rows.len();
    out.as_bytes_mut()
        .par_chunks_exact_mut(stride)
        .skip(first_row)
        .take(row_count)
        .enumerate()
        .for_each(|(i, out_row)| {
            let fg_row = foreground.row(to_fg(rows.start + i as u32, location.y));
            for x in cols.clone() {
                let f = to_fg(x, location.x) as usize * Bgra8Image::CHANNELS;
                let o = x as usize * Bgr8Image::CHANNELS;
                let fg = &fg_row[f..f + Bgra8Image::CHANNELS];
                let a = fg[3];
                if a == 0 {
                    continue;
                }
                for c in 0..Bgr8Image::CHANNELS {
                    out_row[o + c] = blend(out_row[o + c], fg[c], a);
                }
            }
        });
    out
}

/// `bg * (1 - a/255) + fg * a/255`, rounded to nearest.
pub fn blend(bg: u8, fg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(bg) * (255 - a) + u32::from(fg) * a + 127) / 255) as u8
}

// Background indices along one axis that land inside the foreground once it is shifted by
// `offset`.
fn overlap(bg_len: u32, fg_len: u32, offset: i32) -> Range<u32> {
    let start = i64::from(offset).max(0);
    let end = (i64::from(offset) + i64::from(fg_len)).min(i64::from(bg_len));
    if start >= end {
        return 0..0;
    }
    start as u32..end as u32
}

fn to_fg(bg_index: u32, offset: i32) -> u32 {
    (i64::from(bg_index) - i64::from(offset)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/effects/overlay.rs"]
mod tests;
