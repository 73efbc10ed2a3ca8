use crate::Tokens;

use chrono::{Duration, Utc};

#[test]
fn test_future_expiry_is_not_expired() {
    let tokens = Tokens::new("abc".to_string(), None, Utc::now() + Duration::hours(1));

    assert!(!tokens.is_expired());
}

#[test]
fn test_past_expiry_is_expired() {
    let tokens = Tokens::new("abc".to_string(), None, Utc::now() - Duration::seconds(1));

    assert!(tokens.is_expired());
}

#[test]
fn test_expiry_boundary_is_expired() {
    let now = Utc::now();
    let tokens = Tokens::new("abc".to_string(), None, now);

    assert!(tokens.is_expired_at(now));
}
