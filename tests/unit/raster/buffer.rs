use super::*;

fn numbered(width: u32, height: u32) -> Bgr8Image {
    let mut img = Bgr8Image::new(width, height);
    for r in 0..height {
        for c in 0..width {
            img.put_pixel(r, c, [r as u8, c as u8, (r * 10 + c) as u8]);
        }
    }
    img
}

#[test]
fn from_raw_accepts_exact_length() {
    let img = Bgra8Image::from_raw(2, 3, vec![7u8; 2 * 3 * 4]).unwrap();
    assert_eq!(img.dimensions(), (2, 3));
    assert_eq!(img.channels(), 4);
    assert_eq!(img.row_stride(), 8);
    assert_eq!(img.pixel(2, 1), [7, 7, 7, 7]);
}

#[test]
fn from_raw_rejects_wrong_length() {
    let err = Bgr8Image::from_raw(2, 2, vec![0u8; 11]).unwrap_err();
    assert!(matches!(err, DispmapError::DimensionMismatch(_)));

    // A 4-channel buffer is not a 3-channel raster of the same size.
    assert!(Bgr8Image::from_raw(2, 2, vec![0u8; 16]).is_err());
}

#[test]
fn empty_rasters_are_legal() {
    let a = Bgr8Image::new(0, 5);
    let b = Bgra8Image::from_raw(3, 0, Vec::new()).unwrap();
    assert!(a.is_empty());
    assert!(b.is_empty());
    assert_eq!(a.rows().count(), 5);
    assert!(a.rows().all(|r| r.is_empty()));
}

#[test]
fn put_then_get_addresses_row_then_column() {
    let img = numbered(3, 2);
    assert_eq!(img.pixel(1, 2), [1, 2, 12]);
    assert_eq!(img.row(1), &[1, 0, 10, 1, 1, 11, 1, 2, 12]);
    assert_eq!(img.get(1, 2), Some([1, 2, 12]));
    assert_eq!(img.get(2, 0), None);
    assert_eq!(img.get(0, 3), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn pixel_past_last_column_panics_instead_of_wrapping() {
    let img = numbered(3, 2);
    let _ = img.pixel(0, 3);
}

#[test]
fn crop_copies_the_requested_window() {
    let img = numbered(5, 4);
    let crop = img.crop(CropRect::new(2, 1, 3, 2)).unwrap();
    assert_eq!(crop.dimensions(), (3, 2));
    assert_eq!(crop.pixel(0, 0), img.pixel(1, 2));
    assert_eq!(crop.pixel(1, 2), img.pixel(2, 4));
}

#[test]
fn crop_outside_bounds_is_rejected() {
    let img = numbered(5, 4);
    let err = img.crop(CropRect::new(3, 0, 3, 4)).unwrap_err();
    assert!(matches!(err, DispmapError::Validation(_)));
}

#[test]
fn from_pixel_fills_every_pixel() {
    let img = Bgra8Image::from_pixel(3, 2, [1, 2, 3, 4]);
    assert_eq!(img.as_bytes().len(), 24);
    assert!(img.as_bytes().chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
    assert_eq!(img.into_raw().len(), 24);
}
