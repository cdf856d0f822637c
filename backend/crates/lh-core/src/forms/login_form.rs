use crate::Result as CoreErrorResult;
use crate::forms::require;

/// Input of the login screen
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("email", "Email", &self.email)?;
        require("password", "Password", &self.password)?;
        Ok(())
    }
}
