use lh_auth::AuthError;
use lh_config::ConfigError;
use lh_core::CoreError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Route(#[from] CoreError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Short message for stderr, without source locations
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(e) => format!("{} ({})", e.user_message(), e.error_code()),
            Self::Route(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
