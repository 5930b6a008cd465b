use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DispmapError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        DispmapError::dimension_mismatch("x")
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        DispmapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DispmapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
