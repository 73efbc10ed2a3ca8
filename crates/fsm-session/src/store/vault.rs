use crate::store::dev_store::DevTokenSource;
use crate::store::error::{Result as StoreResult, StoreError};
use crate::store::{CredentialStore, keys};

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use fsm_core::{Role, Tokens, User};
use log::{debug, warn};

/// Layered credential persistence with a fixed priority order.
///
/// Reads try the primary store, then the mirror, then the development
/// source; writes land on the primary and best-effort on the mirror.
/// Expired persisted tokens are never yielded.
pub struct Vault {
    primary: Arc<dyn CredentialStore>,
    mirror: Option<Arc<dyn CredentialStore>>,
    dev: Option<DevTokenSource>,
}

impl Vault {
    pub fn new(primary: Arc<dyn CredentialStore>) -> Self {
        Self {
            primary,
            mirror: None,
            dev: None,
        }
    }

    /// Add a mirror store, written alongside the primary.
    pub fn with_mirror(mut self, mirror: Arc<dyn CredentialStore>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Enable the development-only token source.
    pub fn with_dev_source(mut self, dev: DevTokenSource) -> Self {
        self.dev = Some(dev);
        self
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    /// Load tokens through the priority chain.
    pub fn load_tokens(&self) -> StoreResult<Option<Tokens>> {
        if let Some(tokens) = Self::tokens_from(self.primary.as_ref())? {
            return Ok(Some(tokens));
        }

        if let Some(ref mirror) = self.mirror {
            if let Some(tokens) = Self::tokens_from(mirror.as_ref())? {
                debug!("Tokens restored from mirror store");
                return Ok(Some(tokens));
            }
        }

        if let Some(ref dev) = self.dev {
            if let Some((token, expires_at)) = dev.token() {
                debug!("Tokens restored from development source");
                return Ok(Some(Tokens::new(token, None, expires_at)));
            }
        }

        Ok(None)
    }

    fn tokens_from(store: &dyn CredentialStore) -> StoreResult<Option<Tokens>> {
        let Some(access_token) = store.get(keys::ACCESS_TOKEN)? else {
            return Ok(None);
        };

        let Some(expires_at) = store
            .get(keys::TOKEN_EXPIRY)?
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
        else {
            // A token without a readable expiry stamp is unusable.
            warn!("Stored token has no valid expiry stamp; ignoring");
            return Ok(None);
        };

        if expires_at <= Utc::now() {
            debug!("Stored token expired at {expires_at}; ignoring");
            return Ok(None);
        }

        let refresh_token = store.get(keys::REFRESH_TOKEN)?;

        Ok(Some(Tokens::new(access_token, refresh_token, expires_at)))
    }

    /// Persist tokens to the primary store and mirror.
    ///
    /// The primary write is verified by reading the access token back;
    /// mirror failures are logged and swallowed.
    pub fn store_tokens(&self, tokens: &Tokens) -> StoreResult<()> {
        Self::write_tokens(self.primary.as_ref(), tokens)?;

        if self.primary.get(keys::ACCESS_TOKEN)?.as_deref() != Some(&tokens.access_token) {
            return Err(StoreError::write_verification(keys::ACCESS_TOKEN));
        }

        if let Some(ref mirror) = self.mirror {
            if let Err(e) = Self::write_tokens(mirror.as_ref(), tokens) {
                warn!("Mirror token write failed: {e}");
            }
        }

        Ok(())
    }

    fn write_tokens(store: &dyn CredentialStore, tokens: &Tokens) -> StoreResult<()> {
        store.set(keys::ACCESS_TOKEN, &tokens.access_token)?;
        store.set(keys::TOKEN_EXPIRY, &tokens.expires_at.to_rfc3339())?;

        match tokens.refresh_token {
            Some(ref refresh) => store.set(keys::REFRESH_TOKEN, refresh)?,
            None => store.remove(keys::REFRESH_TOKEN)?,
        }

        Ok(())
    }

    // ========================================================================
    // Role marker and profile cache
    // ========================================================================

    /// The role recorded alongside the tokens at login.
    pub fn role_marker(&self) -> StoreResult<Option<Role>> {
        Ok(self
            .primary
            .get(keys::USER_ROLE)?
            .and_then(|raw| Role::from_str(&raw).ok()))
    }

    pub fn set_role_marker(&self, role: Role) -> StoreResult<()> {
        self.primary.set(keys::USER_ROLE, role.as_str())?;

        if let Some(ref mirror) = self.mirror {
            if let Err(e) = mirror.set(keys::USER_ROLE, role.as_str()) {
                warn!("Mirror role write failed: {e}");
            }
        }

        Ok(())
    }

    /// Cached profile, if present and readable. Corruption is treated
    /// as a cache miss.
    pub fn cached_profile(&self) -> StoreResult<Option<User>> {
        let Some(raw) = self.primary.get(keys::CACHED_PROFILE)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Cached profile unreadable; discarding: {e}");
                self.primary.remove(keys::CACHED_PROFILE)?;
                Ok(None)
            }
        }
    }

    /// Cached profile, adopted only when its role agrees with the role
    /// marker. A disagreeing cache is discarded outright.
    pub fn adoptable_profile(&self) -> StoreResult<Option<User>> {
        let Some(profile) = self.cached_profile()? else {
            return Ok(None);
        };

        match self.role_marker()? {
            Some(marker) if marker == profile.role => Ok(Some(profile)),
            Some(_) => {
                warn!("Cached profile role disagrees with role marker; discarding cache");
                self.primary.remove(keys::CACHED_PROFILE)?;
                Ok(None)
            }
            // No marker: not adoptable optimistically, but keep the
            // cache around as a soft-failure fallback.
            None => Ok(None),
        }
    }

    pub fn set_cached_profile(&self, user: &User) -> StoreResult<()> {
        let json = serde_json::to_string(user)?;
        self.primary.set(keys::CACHED_PROFILE, &json)
    }

    // ========================================================================
    // Convenience artifacts
    // ========================================================================

    pub fn remembered_login(&self) -> StoreResult<Option<String>> {
        self.primary.get(keys::REMEMBERED_LOGIN)
    }

    pub fn set_remembered_login(&self, email: &str) -> StoreResult<()> {
        self.primary.set(keys::REMEMBERED_LOGIN, email)
    }

    pub fn clear_remembered_login(&self) -> StoreResult<()> {
        self.primary.remove(keys::REMEMBERED_LOGIN)
    }

    // ========================================================================
    // Purge
    // ========================================================================

    /// Remove every session artifact from every layer, preserving
    /// remembered-login and PIN quick-access data.
    pub fn purge_session(&self) -> StoreResult<()> {
        self.primary.clear_session_artifacts()?;

        if let Some(ref mirror) = self.mirror {
            if let Err(e) = mirror.clear_session_artifacts() {
                warn!("Mirror purge failed: {e}");
            }
        }

        Ok(())
    }
}
