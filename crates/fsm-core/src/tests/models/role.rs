use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_round_trip() {
    for role in [
        Role::Admin,
        Role::ZoneUser,
        Role::ServicePerson,
        Role::Customer,
    ] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_unknown_role_is_rejected() {
    let result = Role::from_str("SUPERVISOR");

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_dashboard_paths_are_role_keyed() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::ZoneUser.dashboard_path(), "/zone/dashboard");
    assert_eq!(
        Role::ServicePerson.dashboard_path(),
        "/service-person/dashboard"
    );
    assert_eq!(Role::Customer.dashboard_path(), "/customer/dashboard");
}

#[test]
fn test_role_serializes_screaming_snake() {
    let json = serde_json::to_string(&Role::ServicePerson).unwrap();
    assert_eq!(json, "\"SERVICE_PERSON\"");
}
