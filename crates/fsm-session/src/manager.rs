use crate::api::AuthApi;
use crate::error::{Result as SessionResult, SessionError};
use crate::state::SessionState;
use crate::store::Vault;
use crate::throttle::MinIntervalGate;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use fsm_config::SessionConfig;
use fsm_core::{Credentials, Session, Tokens, User};
use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Session lifecycle coordinator.
///
/// Holds the session state machine and coordinates the two injected
/// seams: the credential [`Vault`] and the [`AuthApi`]. Restoration is
/// guarded against overlap (in-flight flag), against rapid repetition
/// (minimum-interval gate) and against hanging (safety timeout).
pub struct SessionManager {
    api: Arc<dyn AuthApi>,
    vault: Vault,
    state: RwLock<SessionState>,
    gate: MinIntervalGate,
    in_flight: AtomicBool,
    restore_timeout: Duration,
    session_ttl: Duration,
    remember_me_ttl: Duration,
}

impl SessionManager {
    pub fn new(api: Arc<dyn AuthApi>, vault: Vault, config: &SessionConfig) -> Self {
        Self {
            api,
            vault,
            state: RwLock::new(SessionState::Anonymous),
            gate: MinIntervalGate::new(Duration::from_millis(config.restore_min_interval_ms)),
            in_flight: AtomicBool::new(false),
            restore_timeout: Duration::from_secs(config.restore_timeout_secs),
            session_ttl: Duration::from_secs(config.session_ttl_secs),
            remember_me_ttl: Duration::from_secs(config.remember_me_ttl_secs),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    // ========================================================================
    // Restoration
    // ========================================================================

    /// Best-effort session restoration for a navigation to `path`.
    ///
    /// Never fails: every error degrades to the most useful state still
    /// defensible, and only hard rejections from the backend destroy
    /// the session. Returns the resulting state.
    pub async fn restore(&self, path: &str) -> SessionState {
        // Auth pages drive their own flow; restoring there loops back
        // into the login redirect.
        if is_auth_path(path) {
            debug!("Skipping restoration on auth path {path}");
            return self.state().await;
        }

        // Overlapping attempt already running.
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("Restoration already in flight; reusing current state");
            return self.state().await;
        }

        // Too soon after the last attempt.
        if !self.gate.try_pass() {
            self.in_flight.store(false, Ordering::SeqCst);
            debug!("Restoration throttled; reusing current state");
            return self.state().await;
        }

        let result = self.run_restore().await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run_restore(&self) -> SessionState {
        let previous = {
            let mut state = self.state.write().await;
            std::mem::replace(&mut *state, SessionState::Restoring)
        };

        let next = self.compute_restored_state(previous).await;
        *self.state.write().await = next.clone();
        next
    }

    async fn compute_restored_state(&self, previous: SessionState) -> SessionState {
        // Storage failures while gathering tokens are soft: treat the
        // token as absent rather than surfacing an error.
        let tokens = match self.vault.load_tokens() {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Token load failed during restoration: {e}");
                None
            }
        };

        let Some(tokens) = tokens else {
            self.purge_quietly();
            return SessionState::Anonymous;
        };

        // Optimistic restore: adopt the cached profile without a network
        // round trip when its role agrees with the role marker.
        match self.vault.adoptable_profile() {
            Ok(Some(profile)) => {
                debug!("Session restored from profile cache");
                return SessionState::Authenticated(Session::new(profile, tokens));
            }
            Ok(None) => {}
            Err(e) => warn!("Profile cache read failed: {e}"),
        }

        let fetch = self.api.fetch_profile(&tokens.access_token);
        match tokio::time::timeout(self.restore_timeout, fetch).await {
            Ok(Ok(mut user)) => {
                user.normalize_name();

                if let Err(e) = self.vault.set_cached_profile(&user) {
                    warn!("Profile cache write failed: {e}");
                }
                if let Err(e) = self.vault.set_role_marker(user.role) {
                    warn!("Role marker write failed: {e}");
                }

                info!("Session restored for {}", user.email);
                SessionState::Authenticated(Session::new(user, tokens))
            }
            Ok(Err(e)) if e.is_fatal() => {
                warn!("Session rejected by server: {e}");
                self.purge_quietly();
                SessionState::Failed {
                    reason: e.to_string(),
                }
            }
            Ok(Err(e)) => self.degrade(previous, tokens, &e),
            Err(_) => {
                let e = SessionError::timeout(self.restore_timeout.as_secs());
                self.degrade(previous, tokens, &e)
            }
        }
    }

    /// Soft-failure fallback order: last in-memory session, then cached
    /// profile, then nothing. Transient connectivity loss must never
    /// log the user out.
    fn degrade(&self, previous: SessionState, tokens: Tokens, error: &SessionError) -> SessionState {
        warn!("Profile fetch failed softly; degrading: {error}");

        if let SessionState::Authenticated(session) = previous {
            return SessionState::Authenticated(session);
        }

        match self.vault.cached_profile() {
            Ok(Some(profile)) => SessionState::Authenticated(Session::new(profile, tokens)),
            _ => {
                self.purge_quietly();
                SessionState::Anonymous
            }
        }
    }

    // ========================================================================
    // Login / logout
    // ========================================================================

    /// Exchange credentials for a session.
    ///
    /// Persists tokens with a lifetime of 30 days when `remember_me` is
    /// set, 24 hours otherwise, and returns the session together with
    /// the role-keyed landing route.
    pub async fn login(
        &self,
        credentials: &Credentials,
        remember_me: bool,
    ) -> SessionResult<(Session, &'static str)> {
        if let Err(e) = credentials.validate() {
            debug!("Rejecting login attempt before network: {e}");
            return Err(SessionError::invalid_credentials());
        }

        let response = self.api.login(credentials).await?;

        let ttl = if remember_me {
            self.remember_me_ttl
        } else {
            self.session_ttl
        };
        let expires_at = Utc::now()
            + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(24));

        let tokens = Tokens::new(response.access_token, response.refresh_token, expires_at);

        let mut user = response.user;
        user.normalize_name();

        self.vault.store_tokens(&tokens)?;
        self.vault.set_role_marker(user.role)?;
        self.vault.set_cached_profile(&user)?;

        if remember_me {
            if let Err(e) = self.vault.set_remembered_login(&credentials.email) {
                warn!("Remembered-login write failed: {e}");
            }
        }

        let route = user.role.dashboard_path();
        let session = Session::new(user, tokens);

        *self.state.write().await = SessionState::Authenticated(session.clone());
        self.gate.reset();

        info!("Logged in {} (remember_me={remember_me})", session.user.email);
        Ok((session, route))
    }

    /// End the session.
    ///
    /// Server-side invalidation is best-effort; the client-side purge
    /// always runs and preserves remembered-login and PIN quick-access
    /// data.
    pub async fn logout(&self) -> SessionResult<()> {
        match self.vault.load_tokens() {
            Ok(Some(tokens)) => {
                if let Err(e) = self.api.invalidate(&tokens.access_token).await {
                    warn!("Server-side logout failed; continuing with local purge: {e}");
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Token load failed during logout: {e}"),
        }

        self.vault.purge_session()?;
        *self.state.write().await = SessionState::Anonymous;
        self.gate.reset();

        info!("Logged out");
        Ok(())
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    fn purge_quietly(&self) {
        if let Err(e) = self.vault.purge_session() {
            warn!("Session purge failed: {e}");
        }
    }
}

/// Whether `path` belongs to the auth flow (`/auth` and below).
fn is_auth_path(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}
