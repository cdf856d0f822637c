use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_SIMULATED_DELAY_MS,
    MAX_MIN_PASSWORD_LENGTH, MAX_SIMULATED_DELAY_MS, MIN_MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Pause before login/signup resolve (0 = none)
    pub simulated_delay_ms: u64,
    /// Minimum password length accepted at signup
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.simulated_delay_ms > MAX_SIMULATED_DELAY_MS {
            return Err(ConfigError::auth(format!(
                "auth.simulated_delay_ms must be 0-{}, got {}",
                MAX_SIMULATED_DELAY_MS, self.simulated_delay_ms
            )));
        }

        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }
}
