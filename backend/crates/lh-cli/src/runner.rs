//! Executes one command against a profile.
//!
//! Each process invocation is one "page load": the session manager is
//! rehydrated from the profile, a single operation runs, and the result is
//! returned as JSON.

use crate::{CliErrorResult, Commands};

use lh_auth::{Navigation, RouteGuard, SessionConfig, SessionManager, SessionState};
use lh_config::AuthConfig;
use lh_core::{LoginForm, SessionRecord, SignupForm};

use std::time::Duration;

use serde_json::{Value, json};

/// Session settings derived from the `[auth]` config section
pub fn session_config(auth: &AuthConfig) -> SessionConfig {
    SessionConfig {
        simulated_delay: Duration::from_millis(auth.simulated_delay_ms),
        min_password_length: auth.min_password_length,
    }
}

pub struct Runner<'a> {
    session: &'a SessionManager,
}

impl<'a> Runner<'a> {
    pub fn new(session: &'a SessionManager) -> Self {
        Self { session }
    }

    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Signup {
                name,
                email,
                confirm_password,
                password,
            } => {
                let form = SignupForm {
                    name,
                    email,
                    confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                    password,
                };
                let session = self.session.signup_form(&form).await?;
                Ok(Self::signed_in(session))
            }

            Commands::Login { email, password } => {
                let form = LoginForm { email, password };
                let session = self.session.login_form(&form).await?;
                Ok(Self::signed_in(session))
            }

            Commands::Logout => {
                self.session.logout();
                Ok(json!({
                    "status": SessionState::Unauthenticated.as_str(),
                    "navigate": Navigation::after_logout().target().path(),
                }))
            }

            Commands::Whoami => {
                let state = self.session.state();
                Ok(json!({
                    "status": state.as_str(),
                    "user": state.user(),
                }))
            }

            Commands::Visit { path } => {
                let navigation = RouteGuard::new(self.session).visit(&path)?;
                Ok(json!({
                    "path": path,
                    "decision": if navigation.is_redirect() { "redirect" } else { "allow" },
                    "route": navigation.target().path(),
                }))
            }

            Commands::Users => {
                let users: Vec<SessionRecord> = self
                    .session
                    .credentials()
                    .records()?
                    .iter()
                    .map(SessionRecord::from)
                    .collect();
                Ok(json!(users))
            }
        }
    }

    fn signed_in(session: SessionRecord) -> Value {
        let state = SessionState::Authenticated(session);
        json!({
            "status": state.as_str(),
            "user": state.user(),
            "navigate": Navigation::after_sign_in().target().path(),
        })
    }
}
