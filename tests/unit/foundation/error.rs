use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReelError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ReelError::invalid_curve("x")
            .to_string()
            .contains("invalid curve:")
    );
    assert!(ReelError::sample("x").to_string().contains("sample error:"));
    assert!(ReelError::cue("x").to_string().contains("cue error:"));
    assert!(
        ReelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_startup_errors_are_fatal() {
    assert!(ReelError::configuration("x").is_fatal());
    assert!(ReelError::invalid_curve("x").is_fatal());
    assert!(!ReelError::cue("x").is_fatal());
    assert!(!ReelError::sample("x").is_fatal());
}
