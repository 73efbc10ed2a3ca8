use crate::models::role::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,

    /// May arrive empty or as the backend placeholder literal "User".
    /// Use [`User::display_name`] for anything user-facing.
    #[serde(default)]
    pub name: Option<String>,

    pub role: Role,
    pub is_active: bool,

    // Role-dependent scoping
    pub zone_id: Option<i64>,
    pub customer_id: Option<i64>,

    /// Incremented server-side on password change; a mismatch invalidates
    /// every outstanding token for this user.
    pub token_version: i64,
    pub last_password_change: Option<DateTime<Utc>>,
}

impl User {
    /// Resolved display name.
    ///
    /// The backend uses `"User"` (and sometimes an empty string) as a
    /// placeholder when no real name was captured at registration. Those
    /// are replaced with the email local-part, so "jane@acme.com" shows
    /// as "jane".
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !is_placeholder_name(name) => name.to_string(),
            _ => local_part(&self.email).to_string(),
        }
    }

    /// Apply the placeholder fallback in place, so every copy persisted
    /// downstream carries the resolved name.
    pub fn normalize_name(&mut self) {
        self.name = Some(self.display_name());
    }
}

/// Whether `name` is one of the backend's "no real name" sentinels.
fn is_placeholder_name(name: &str) -> bool {
    name.is_empty() || name == "User"
}

/// Substring before `@`, or the whole string when there is no `@`.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
