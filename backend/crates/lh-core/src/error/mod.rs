use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown route: {path} {location}")]
    InvalidRoute {
        path: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidRoute { .. } => None,
        }
    }

    /// Message without the source location, suitable for showing to a user
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRoute { path, .. } => format!("Page not found: {path}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
