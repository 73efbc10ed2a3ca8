use chrono::{DateTime, Utc};
use log::warn;

/// Development-only token source, last in the vault's priority chain.
///
/// An access token injected out of band through environment variables,
/// honored only while its explicit expiry stamp is in the future.
/// Disabled unless `storage.dev_token_source` is set.
#[derive(Debug, Clone)]
pub struct DevTokenSource {
    token_var: &'static str,
    expiry_var: &'static str,
}

impl DevTokenSource {
    pub const TOKEN_VAR: &'static str = "FSM_DEV_ACCESS_TOKEN";
    pub const EXPIRY_VAR: &'static str = "FSM_DEV_TOKEN_EXPIRY";

    pub fn from_env() -> Self {
        Self {
            token_var: Self::TOKEN_VAR,
            expiry_var: Self::EXPIRY_VAR,
        }
    }

    /// The dev token, if present and not yet expired.
    ///
    /// A token without a parseable expiry is never honored; the explicit
    /// check is the whole point of this source.
    pub fn token(&self) -> Option<(String, DateTime<Utc>)> {
        let token = std::env::var(self.token_var).ok()?;
        if token.is_empty() {
            return None;
        }

        let raw_expiry = std::env::var(self.expiry_var).ok()?;
        let expires_at = match raw_expiry.parse::<i64>() {
            Ok(secs) => DateTime::from_timestamp(secs, 0)?,
            Err(_) => {
                warn!("{} is not a unix timestamp; ignoring dev token", self.expiry_var);
                return None;
            }
        };

        if expires_at <= Utc::now() {
            return None;
        }

        Some((token, expires_at))
    }
}
