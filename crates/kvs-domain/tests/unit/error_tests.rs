//! Error Tests

use kvs_domain::error::Error;

#[test]
fn test_error_constructors() {
    match Error::not_found("session:u1") {
        Error::NotFound { resource } => assert_eq!(resource, "session:u1"),
        other => panic!("Expected NotFound, got {other:?}"),
    }

    assert!(matches!(
        Error::invalid_state("not initialized"),
        Error::InvalidState { .. }
    ));
    assert!(matches!(
        Error::backend_unavailable("redis"),
        Error::BackendUnavailable { .. }
    ));
}

#[test]
fn test_error_display() {
    assert_eq!(Error::not_found("k").to_string(), "Not found: k");
    assert_eq!(
        Error::backend_unavailable("redis").to_string(),
        "Backend unavailable: redis"
    );
    assert_eq!(
        Error::config("bad level").to_string(),
        "Configuration error: bad level"
    );
}

#[test]
fn test_json_error_conversion() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = parse_error.into();

    assert!(matches!(error, Error::Json { .. }));
    assert!(!error.is_not_found());
}
