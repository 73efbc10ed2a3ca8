pub(crate) mod dev_store;
pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;
pub(crate) mod vault;

pub use dev_store::DevTokenSource;
pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use vault::Vault;

/// Well-known credential keys.
///
/// Session artifacts are purged on logout and fatal rejection;
/// convenience artifacts (remembered login, PIN quick-access data)
/// survive both.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER_ROLE: &str = "user_role";
    pub const TOKEN_EXPIRY: &str = "token_expiry";
    pub const CACHED_PROFILE: &str = "cached_profile";

    pub const REMEMBERED_LOGIN: &str = "remembered_login";
    pub const PIN_SESSION: &str = "pin_session";
    pub const PIN_ACCESS_SESSION: &str = "pin_access_session";
    pub const PIN_LOCKOUT_INFO: &str = "pin_lockout_info";

    /// Everything that belongs to the current session.
    pub const SESSION_ARTIFACTS: &[&str] = &[
        ACCESS_TOKEN,
        REFRESH_TOKEN,
        USER_ROLE,
        TOKEN_EXPIRY,
        CACHED_PROFILE,
    ];
}

/// One credential storage surface.
///
/// Every surface is the same string key/value contract so the [`Vault`]
/// can layer them by priority.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Remove session artifacts only, leaving convenience keys intact.
    fn clear_session_artifacts(&self) -> StoreResult<()> {
        for key in keys::SESSION_ARTIFACTS {
            self.remove(key)?;
        }
        Ok(())
    }
}
