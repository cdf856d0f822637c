pub mod login_form;
pub mod signup_form;

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Reject empty or whitespace-only input for a required field
#[track_caller]
pub(crate) fn require(field: &'static str, label: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            field,
            message: format!("{label} is required"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
