use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dispmap_png_{name}_{}", std::process::id()))
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        frame_count: 2,
    }
}

#[test]
fn writes_zero_padded_frames() {
    let dir = scratch_dir("seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &Bgr8Image::from_pixel(2, 2, [1, 2, 3]))
        .unwrap();
    sink.push_frame(FrameIndex(7), &Bgr8Image::from_pixel(2, 2, [4, 5, 6]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("frame_00000.png"), dir.join("frame_00007.png")]
    );
    let back = crate::assets::decode::load_map(&sink.written()[1]).unwrap();
    assert_eq!(back, Bgr8Image::from_pixel(2, 2, [4, 5, 6]));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn push_before_begin_is_rejected() {
    let mut sink = PngSequenceSink::new(scratch_dir("unstarted"));
    let err = sink
        .push_frame(FrameIndex(0), &Bgr8Image::new(1, 1))
        .unwrap_err();
    assert!(matches!(err, DispmapError::Validation(_)));
    assert!(sink.end().is_err());
}

#[test]
fn out_of_order_and_wrong_size_frames_are_rejected() {
    let dir = scratch_dir("order");
    let mut sink = PngSequenceSink::new(&dir).with_prefix("shot");
    sink.begin(cfg(1, 1)).unwrap();
    sink.push_frame(FrameIndex(3), &Bgr8Image::new(1, 1)).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &Bgr8Image::new(1, 1)).is_err());
    assert!(sink.push_frame(FrameIndex(2), &Bgr8Image::new(1, 1)).is_err());

    let err = sink
        .push_frame(FrameIndex(4), &Bgr8Image::new(2, 1))
        .unwrap_err();
    assert!(matches!(err, DispmapError::DimensionMismatch(_)));
    assert_eq!(sink.path_for(FrameIndex(3)), dir.join("shot_00003.png"));

    std::fs::remove_dir_all(&dir).unwrap();
}
