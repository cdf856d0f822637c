use lh_core::{DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_SIMULATED_DELAY_MS};

use std::time::Duration;

/// Tunables of the session manager
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Pause before login/signup resolve, standing in for a network round trip
    pub simulated_delay: Duration,
    /// Minimum password length accepted by the signup form
    pub min_password_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            simulated_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl SessionConfig {
    /// Config with no artificial latency
    pub fn immediate() -> Self {
        Self {
            simulated_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
