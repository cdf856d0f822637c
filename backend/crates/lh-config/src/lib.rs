mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

use lh_core::{DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_SIMULATED_DELAY_MS};

const CONFIG_DIR_ENV: &str = "LH_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".learnhub";
const CONFIG_FILENAME: &str = "config.toml";

const MAX_SIMULATED_DELAY_MS: u64 = 10_000;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;

const DEFAULT_PROFILE_DIR: &str = "profile";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
