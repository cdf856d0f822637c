use crate::{CliError, session_config};

use lh_auth::{AuthError, SessionConfig};
use lh_config::AuthConfig;

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn test_session_config_from_auth_config() {
    let auth = AuthConfig {
        simulated_delay_ms: 250,
        min_password_length: 8,
    };

    let config = session_config(&auth);

    assert_eq!(config.simulated_delay, Duration::from_millis(250));
    assert_eq!(config.min_password_length, 8);
}

#[test]
fn given_default_auth_config_when_converted_then_matches_session_defaults() {
    let from_config = session_config(&AuthConfig::default());
    let defaults = SessionConfig::default();

    assert_eq!(from_config.simulated_delay, defaults.simulated_delay);
    assert_eq!(
        from_config.min_password_length,
        defaults.min_password_length
    );
}

#[test]
fn given_auth_error_when_user_message_then_includes_code_without_location() {
    let err = CliError::from(AuthError::InvalidCredentials {
        location: error_location_here(),
    });

    let message = err.user_message();

    assert_that!(
        message.as_str(),
        eq("Invalid email or password (INVALID_CREDENTIALS)")
    );
}

#[track_caller]
fn error_location_here() -> error_location::ErrorLocation {
    error_location::ErrorLocation::from(std::panic::Location::caller())
}
