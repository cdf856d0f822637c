pub mod error;
pub mod forms;
pub mod models;

pub use error::{CoreError, Result};
pub use forms::login_form::LoginForm;
pub use forms::signup_form::SignupForm;
pub use models::app_route::AppRoute;
pub use models::credential_record::CredentialRecord;
pub use models::session_record::SessionRecord;

/// Minimum password length enforced by the signup screen.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
/// Pause before login/signup resolve, standing in for a network round trip.
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1000;

#[cfg(test)]
mod tests;
