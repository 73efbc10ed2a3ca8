use crate::SessionConfig;

#[test]
fn given_defaults_when_validated_then_ok() {
    assert!(SessionConfig::default().validate().is_ok());
}

#[test]
fn given_zero_session_ttl_when_validated_then_error() {
    let config = SessionConfig {
        session_ttl_secs: 0,
        ..SessionConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_remember_me_shorter_than_session_when_validated_then_error() {
    let config = SessionConfig {
        session_ttl_secs: 86_400,
        remember_me_ttl_secs: 3_600,
        ..SessionConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_min_interval_beyond_timeout_when_validated_then_error() {
    let config = SessionConfig {
        restore_min_interval_ms: 30_000,
        restore_timeout_secs: 10,
        ..SessionConfig::default()
    };

    assert!(config.validate().is_err());
}
