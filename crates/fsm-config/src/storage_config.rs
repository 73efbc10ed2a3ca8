use crate::{ConfigError, ConfigErrorResult};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the credential data directory.
    /// Default: platform data dir + "fsm", else ./.fsm/data.
    pub data_dir: Option<String>,
    /// Allow the development-only token source (environment variables
    /// with an explicit expiry stamp). Never enable in production.
    pub dev_token_source: bool,
}

impl StorageConfig {
    /// Resolve the directory credential files live in.
    pub fn resolve_data_dir(&self) -> ConfigErrorResult<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            if dir.is_empty() {
                return Err(ConfigError::storage("storage.data_dir must not be empty"));
            }
            return Ok(PathBuf::from(dir));
        }

        if let Some(base) = dirs::data_dir() {
            return Ok(base.join("fsm"));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::storage("Cannot determine current working directory"))?;
        Ok(cwd.join(".fsm").join("data"))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref dir) = self.data_dir {
            if dir.is_empty() {
                return Err(ConfigError::storage("storage.data_dir must not be empty"));
            }
        }

        Ok(())
    }
}
