use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, SessionConfig,
    StorageConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for FSM_CONFIG_DIR env var, else use ./.fsm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FSM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FSM_CONFIG_DIR env var > ./.fsm/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("FSM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".fsm"))
    }

    /// Apply FSM_* environment variable overrides on top of file values.
    ///
    /// An unrecognized FSM_LOG_LEVEL is an error, not a silent fallback.
    pub fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        if let Ok(url) = std::env::var("FSM_API_BASE_URL") {
            self.api.base_url = url;
        }

        if let Ok(level) = std::env::var("FSM_LOG_LEVEL") {
            self.logging.level = LogLevel::from_str(&level)?;
        }

        if let Ok(dir) = std::env::var("FSM_DATA_DIR") {
            self.storage.data_dir = Some(dir);
        }

        if let Ok(flag) = std::env::var("FSM_DEV_TOKEN_SOURCE") {
            self.storage.dev_token_source = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.storage.validate()?;

        Ok(())
    }
}
