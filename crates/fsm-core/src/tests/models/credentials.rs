use crate::{CoreError, Credentials};

#[test]
fn test_well_formed_credentials_pass() {
    assert!(Credentials::new("jane@acme.example", "hunter2").validate().is_ok());
}

#[test]
fn test_email_without_at_sign_is_rejected() {
    let result = Credentials::new("not-an-email", "hunter2").validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_empty_password_is_rejected() {
    let result = Credentials::new("jane@acme.example", "").validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
