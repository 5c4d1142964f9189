use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramecastError::invalid_duration("x")
            .to_string()
            .contains("invalid duration:")
    );
    assert!(
        FramecastError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramecastError::measurement("x")
            .to_string()
            .contains("measurement error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
