mod manager;
mod throttle;

use fsm_core::{Role, User};

pub(crate) fn test_user(role: Role) -> User {
    User {
        id: 11,
        email: "field.tech@acme.example".to_string(),
        name: Some("Field Tech".to_string()),
        role,
        is_active: true,
        zone_id: Some(2),
        customer_id: None,
        token_version: 1,
        last_password_change: None,
    }
}
