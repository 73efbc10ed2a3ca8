use crate::{Role, User};

fn user_with_name(name: Option<&str>) -> User {
    User {
        id: 7,
        email: "jane.doe@acme.example".to_string(),
        name: name.map(String::from),
        role: Role::Admin,
        is_active: true,
        zone_id: None,
        customer_id: None,
        token_version: 1,
        last_password_change: None,
    }
}

#[test]
fn test_real_name_is_kept() {
    let user = user_with_name(Some("Jane Doe"));

    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn test_empty_name_falls_back_to_email_local_part() {
    let user = user_with_name(Some(""));

    assert_eq!(user.display_name(), "jane.doe");
}

#[test]
fn test_missing_name_falls_back_to_email_local_part() {
    let user = user_with_name(None);

    assert_eq!(user.display_name(), "jane.doe");
}

#[test]
fn test_placeholder_literal_falls_back_to_email_local_part() {
    let user = user_with_name(Some("User"));

    assert_eq!(user.display_name(), "jane.doe");
}

#[test]
fn test_placeholder_check_is_case_sensitive() {
    // Only the exact backend literal is treated as a placeholder.
    let user = user_with_name(Some("user"));

    assert_eq!(user.display_name(), "user");
}

#[test]
fn test_email_without_at_sign_is_used_whole() {
    let mut user = user_with_name(None);
    user.email = "not-an-email".to_string();

    assert_eq!(user.display_name(), "not-an-email");
}

#[test]
fn test_normalize_name_overwrites_placeholder() {
    let mut user = user_with_name(Some("User"));
    user.normalize_name();

    assert_eq!(user.name.as_deref(), Some("jane.doe"));
}

#[test]
fn test_user_deserializes_camel_case() {
    let json = r#"{
        "id": 42,
        "email": "ops@acme.example",
        "name": "Ops",
        "role": "ZONE_USER",
        "isActive": true,
        "zoneId": 3,
        "customerId": null,
        "tokenVersion": 5,
        "lastPasswordChange": null
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, 42);
    assert_eq!(user.role, Role::ZoneUser);
    assert_eq!(user.zone_id, Some(3));
    assert_eq!(user.token_version, 5);
}
