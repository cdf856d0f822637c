use lh_core::CoreError;
use lh_storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User already exists with this email: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Malformed persisted state under '{key}': {message} {location}")]
    MalformedPersistedState {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl From<StorageError> for AuthError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl AuthError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::MalformedPersistedState { .. } => "MALFORMED_PERSISTED_STATE",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// Message shown next to the form that triggered the error
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateEmail { .. } => "User already exists with this email".to_string(),
            Self::InvalidCredentials { .. } => "Invalid email or password".to_string(),
            Self::MalformedPersistedState { .. } => {
                "Saved account data is corrupted".to_string()
            }
            Self::Validation { source } => source.user_message(),
            Self::Storage { .. } => "Could not access local storage".to_string(),
        }
    }

    /// Form field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateEmail { .. } => Some("email"),
            Self::Validation { source } => source.field(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
