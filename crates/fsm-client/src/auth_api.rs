use crate::client::Client;
use crate::error::ClientError;

use async_trait::async_trait;
use fsm_core::{Credentials, User};
use fsm_session::{AuthApi, LoginResponse, Result as SessionResult, SessionError};
use reqwest::Method;

// Backend codes that mean the token itself has been revoked, as opposed
// to an ordinary unauthorized response.
const TOKEN_REJECTION_CODES: &[&str] = &["TOKEN_VERSION_MISMATCH", "TOKEN_REVOKED"];

#[async_trait]
impl AuthApi for Client {
    async fn login(&self, credentials: &Credentials) -> SessionResult<LoginResponse> {
        let req = self
            .request_without_token(Method::POST, "/auth/login")
            .json(credentials);
        let body = self.execute(req).await.map_err(map_error)?;

        serde_json::from_value(body)
            .map_err(|e| SessionError::network(format!("malformed login response: {e}")))
    }

    async fn fetch_profile(&self, access_token: &str) -> SessionResult<User> {
        let req = self.request_with_token(Method::GET, "/auth/me", access_token);
        let body = self.execute(req).await.map_err(map_error)?;

        // The backend wraps the profile as {"user": {...}} on some
        // deployments and returns it bare on others.
        let profile = match body.get("user") {
            Some(user) => user.clone(),
            None => body,
        };

        serde_json::from_value(profile)
            .map_err(|e| SessionError::network(format!("malformed profile response: {e}")))
    }

    async fn invalidate(&self, access_token: &str) -> SessionResult<()> {
        let req = self.request_with_token(Method::POST, "/auth/logout", access_token);
        self.execute(req).await.map_err(map_error)?;

        Ok(())
    }
}

/// Map transport errors onto the session taxonomy.
///
/// Only explicit token rejections and 403s become fatal; everything
/// else stays soft so a flaky connection never logs the user out.
fn map_error(err: ClientError) -> SessionError {
    match err {
        ClientError::Api {
            status: 401, code, ..
        } if TOKEN_REJECTION_CODES.contains(&code.as_str()) => SessionError::rejected(code),
        ClientError::Api {
            status: 401, code, ..
        } if code == "INVALID_CREDENTIALS" => SessionError::invalid_credentials(),
        ClientError::Api { status: 403, .. } => SessionError::forbidden(),
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => SessionError::api(status, code, message),
        ClientError::Http { message, .. } => SessionError::network(message),
        ClientError::Json { message, .. } => {
            SessionError::network(format!("invalid response: {message}"))
        }
    }
}
