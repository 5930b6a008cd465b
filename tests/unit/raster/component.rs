use super::*;

#[test]
fn selectors_map_to_bgr_offsets() {
    let px = [10u8, 20, 30];
    assert_eq!(Component::try_from(0i32).unwrap().of(&px), 10);
    assert_eq!(Component::try_from(1i32).unwrap().of(&px), 20);
    assert_eq!(Component::try_from(2i32).unwrap().of(&px), 30);
    assert_eq!(Component::Red.of(&[1u8, 2, 3, 4]), 3);
}

#[test]
fn out_of_range_selectors_are_invalid_arguments() {
    for bad in [-1i32, 3, 4, i32::MAX, i32::MIN] {
        let err = Component::try_from(bad).unwrap_err();
        assert!(matches!(err, DispmapError::InvalidArgument(_)), "{bad}");
    }
}

#[test]
fn deserializes_from_plain_integers() {
    let c: Component = serde_json::from_str("1").unwrap();
    assert_eq!(c, Component::Green);
    assert!(serde_json::from_str::<Component>("7").is_err());
    assert_eq!(serde_json::to_string(&Component::Red).unwrap(), "2");
}
