use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer tokens for the current session, with a client-side expiry stamp.
///
/// The expiry reflects the lifetime chosen at login (24 hours, or
/// 30 days with "remember me"). It is bookkeeping only; the backend
/// remains the authority on token validity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Tokens {
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
