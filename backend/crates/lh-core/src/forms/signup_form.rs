use crate::forms::require;
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Input of the account creation screen
#[derive(Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check the form before any account is created.
    ///
    /// Order: required fields, then password confirmation, then length.
    /// Length is counted in characters, not bytes.
    #[track_caller]
    pub fn validate(&self, min_password_length: usize) -> CoreErrorResult<()> {
        require("name", "Full name", &self.name)?;
        require("email", "Email", &self.email)?;
        require("password", "Password", &self.password)?;

        if self.password != self.confirm_password {
            return Err(CoreError::Validation {
                field: "confirm_password",
                message: "Passwords do not match".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.password.chars().count() < min_password_length {
            return Err(CoreError::Validation {
                field: "password",
                message: format!("Password must be at least {min_password_length} characters"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
