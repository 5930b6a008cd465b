use super::*;
use crate::encode::sink::InMemorySink;

// Columns carry their index in the red channel so crops are easy to recognise.
fn striped_map(width: u32, height: u32) -> Bgr8Image {
    let mut img = Bgr8Image::new(width, height);
    for r in 0..height {
        for c in 0..width {
            img.put_pixel(r, c, [128, r as u8, c as u8]);
        }
    }
    img
}

fn opts_with(step_x: u32) -> ScrollOpts {
    ScrollOpts {
        step_x,
        ..ScrollOpts::default()
    }
}

#[test]
fn default_opts_match_demo_constants() {
    let o = ScrollOpts::default();
    assert_eq!((o.component_x, o.component_y), (2, 2));
    assert_eq!((o.scale_x, o.scale_y), (20, 20));
    assert_eq!(o.step_x, 3);
    assert_eq!(o.max_frames, None);
}

#[test]
fn frame_count_follows_window_span() {
    let target = Bgra8Image::new(4, 2);
    let cases = [
        (4u32, 3u32, 1u64),
        (10, 3, 2),
        (11, 3, 3),
        (5, 1, 1),
        (12, 10, 1),
    ];
    for (map_w, step, expected) in cases {
        let map = striped_map(map_w, 2);
        let s = ScrollSession::new(&map, &target, &opts_with(step)).unwrap();
        assert_eq!(s.frame_count(), expected, "map_w={map_w} step={step}");
    }
}

#[test]
fn max_frames_caps_the_count() {
    let map = striped_map(40, 2);
    let target = Bgra8Image::new(4, 2);
    let opts = ScrollOpts {
        max_frames: Some(2),
        ..opts_with(1)
    };
    assert_eq!(ScrollSession::new(&map, &target, &opts).unwrap().frame_count(), 2);

    let zero = ScrollOpts {
        max_frames: Some(0),
        ..opts_with(1)
    };
    assert!(matches!(
        ScrollSession::new(&map, &target, &zero).unwrap_err(),
        DispmapError::Validation(_)
    ));
}

#[test]
fn invalid_options_are_rejected() {
    let map = striped_map(8, 4);
    let target = Bgra8Image::new(4, 4);

    let bad_component = ScrollOpts {
        component_y: 5,
        ..ScrollOpts::default()
    };
    assert!(matches!(
        ScrollSession::new(&map, &target, &bad_component).unwrap_err(),
        DispmapError::InvalidArgument(_)
    ));
    assert!(matches!(
        ScrollSession::new(&map, &target, &opts_with(0)).unwrap_err(),
        DispmapError::InvalidArgument(_)
    ));
}

#[test]
fn target_larger_than_map_is_rejected() {
    let map = striped_map(8, 4);
    for target in [Bgra8Image::new(9, 4), Bgra8Image::new(8, 5)] {
        let err = ScrollSession::new(&map, &target, &ScrollOpts::default()).unwrap_err();
        assert!(matches!(err, DispmapError::Validation(_)));
    }
}

#[test]
fn crop_windows_advance_by_step() {
    let map = striped_map(12, 3);
    let target = Bgra8Image::new(4, 2);
    let s = ScrollSession::new(&map, &target, &opts_with(3)).unwrap();
    assert_eq!(s.frame_count(), 3);
    assert_eq!(s.crop_rect(FrameIndex(0)).unwrap(), CropRect::new(0, 0, 4, 2));
    assert_eq!(s.crop_rect(FrameIndex(2)).unwrap(), CropRect::new(6, 0, 4, 2));
    assert!(s.crop_rect(FrameIndex(3)).is_err());
    assert!(s.render_frame(FrameIndex(3)).is_err());
}

#[test]
fn transparent_target_shows_the_crop() {
    let map = striped_map(12, 3);
    let target = Bgra8Image::new(4, 3);
    let s = ScrollSession::new(&map, &target, &opts_with(3)).unwrap();
    let frame = s.render_frame(FrameIndex(1)).unwrap();
    assert_eq!(frame, map.crop(CropRect::new(3, 0, 4, 3)).unwrap());
}

#[test]
fn opaque_target_over_neutral_map_is_the_target() {
    // Red channel 128 everywhere: no displacement, and alpha 255 hides the crop.
    let map = Bgr8Image::from_pixel(9, 3, [1, 2, 128]);
    let mut target = Bgra8Image::new(5, 3);
    for r in 0..3 {
        for c in 0..5 {
            target.put_pixel(r, c, [r as u8, c as u8, 7, 255]);
        }
    }
    let s = ScrollSession::new(&map, &target, &ScrollOpts::default()).unwrap();
    let frame = s.render_frame(FrameIndex(0)).unwrap();
    for r in 0..3 {
        for c in 0..5 {
            assert_eq!(frame.pixel(r, c), [r as u8, c as u8, 7]);
        }
    }
}

#[test]
fn render_to_sink_pushes_frames_in_order() {
    let map = striped_map(10, 2);
    let target = Bgra8Image::from_pixel(4, 2, [0, 0, 0, 64]);
    let s = ScrollSession::new(&map, &target, &opts_with(3)).unwrap();

    let mut sink = InMemorySink::new();
    let stats = s.render_to_sink(&mut sink).unwrap();

    assert_eq!(stats.frames_rendered, 2);
    assert_eq!(stats.last_offset_x, 3);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frame_count), (4, 2, 2));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
    for (i, frame) in sink.frames() {
        assert_eq!(frame, &s.render_frame(*i).unwrap());
    }
}

#[test]
fn opts_load_from_partial_json() {
    let o: ScrollOpts = serde_json::from_str(r#"{"scale_x": -8, "max_frames": 4}"#).unwrap();
    assert_eq!(o.scale_x, -8);
    assert_eq!(o.max_frames, Some(4));
    assert_eq!(o.step_x, 3);
    assert!(serde_json::from_str::<ScrollOpts>(r#"{"speed": 1}"#).is_err());
}
