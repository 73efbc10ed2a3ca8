mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// Session lifetimes: 24 hours, or 30 days with "remember me".
const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;
const DEFAULT_REMEMBER_ME_TTL_SECS: u64 = 2_592_000;

const DEFAULT_RESTORE_MIN_INTERVAL_MS: u64 = 2_000;
const DEFAULT_RESTORE_TIMEOUT_SECS: u64 = 10;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
