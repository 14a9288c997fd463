use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CropgenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CropgenError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        CropgenError::subtask_too_small(Axis::X, 10, 22)
            .to_string()
            .contains("subtask too small for reliable verification along x")
    );
}

#[test]
fn only_subtask_too_small_is_recoverable() {
    assert!(CropgenError::subtask_too_small(Axis::Y, 0, 10).is_subtask_too_small());
    assert!(!CropgenError::validation("x").is_subtask_too_small());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CropgenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
