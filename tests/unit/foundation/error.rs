use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ClockError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ClockError::render("x").to_string().contains("render error:"));
    assert!(ClockError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ClockError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_validation());
}

#[test]
fn validation_is_classified() {
    assert!(ClockError::validation("bad hour").is_validation());
    assert!(!ClockError::encode("codec").is_validation());
}
