pub mod credential_store;
pub mod error;
pub mod navigation;
pub mod route_guard;
pub mod session_config;
pub mod session_manager;
pub mod session_state;

pub use credential_store::CredentialStore;
pub use error::{AuthError, Result};
pub use navigation::Navigation;
pub use route_guard::RouteGuard;
pub use session_config::SessionConfig;
pub use session_manager::SessionManager;
pub use session_state::SessionState;

/// Persistence key of the registered credential collection
pub const USERS_KEY: &str = "users";
/// Persistence key of the active session record
pub const SESSION_KEY: &str = "user";

#[cfg(test)]
mod tests;
