use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROFILE_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Profile directory holding the persisted keys, relative to the config dir
    pub profile_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profile_dir: String::from(DEFAULT_PROFILE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.profile_dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.profile_dir cannot be empty"));
        }

        if Path::new(&self.profile_dir).is_absolute() || self.profile_dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.profile_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
