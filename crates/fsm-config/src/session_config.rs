use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REMEMBER_ME_TTL_SECS, DEFAULT_RESTORE_MIN_INTERVAL_MS,
    DEFAULT_RESTORE_TIMEOUT_SECS, DEFAULT_SESSION_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Token lifetime for a plain login.
    pub session_ttl_secs: u64,
    /// Token lifetime when "remember me" was requested.
    pub remember_me_ttl_secs: u64,
    /// Minimum gap between restoration attempts; calls inside the window
    /// reuse the last known state instead of hitting the network.
    pub restore_min_interval_ms: u64,
    /// Hard ceiling on a single restoration attempt, so callers never
    /// hang on a stalled profile fetch.
    pub restore_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            remember_me_ttl_secs: DEFAULT_REMEMBER_ME_TTL_SECS,
            restore_min_interval_ms: DEFAULT_RESTORE_MIN_INTERVAL_MS,
            restore_timeout_secs: DEFAULT_RESTORE_TIMEOUT_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_ttl_secs == 0 {
            return Err(ConfigError::session("session.session_ttl_secs must be > 0"));
        }

        if self.remember_me_ttl_secs < self.session_ttl_secs {
            return Err(ConfigError::session(format!(
                "session.remember_me_ttl_secs must be >= session_ttl_secs ({}), got {}",
                self.session_ttl_secs, self.remember_me_ttl_secs
            )));
        }

        if self.restore_timeout_secs == 0 {
            return Err(ConfigError::session(
                "session.restore_timeout_secs must be > 0",
            ));
        }

        if self.restore_min_interval_ms / 1000 > self.restore_timeout_secs {
            return Err(ConfigError::session(format!(
                "session.restore_min_interval_ms ({} ms) must not exceed restore_timeout_secs ({} s)",
                self.restore_min_interval_ms, self.restore_timeout_secs
            )));
        }

        Ok(())
    }
}
