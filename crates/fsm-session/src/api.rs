use crate::Result as SessionResult;

use async_trait::async_trait;
use fsm_core::{Credentials, User};
use serde::Deserialize;

/// Payload returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Network seam for the session manager.
///
/// Implemented over HTTP by `fsm-client`; tests substitute an in-memory
/// double with a call counter.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for tokens and the user profile.
    async fn login(&self, credentials: &Credentials) -> SessionResult<LoginResponse>;

    /// Fetch the profile for the bearer of `access_token`.
    async fn fetch_profile(&self, access_token: &str) -> SessionResult<User>;

    /// Server-side session invalidation. Best-effort; callers ignore
    /// failures.
    async fn invalidate(&self, access_token: &str) -> SessionResult<()>;
}
