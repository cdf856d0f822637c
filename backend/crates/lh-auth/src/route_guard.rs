use crate::{Navigation, SessionManager};

use lh_core::{AppRoute, Result as CoreErrorResult};

use std::str::FromStr;

use log::debug;

/// Gate in front of protected views. Holds no state of its own; every
/// decision is a fresh query against the session manager.
pub struct RouteGuard<'a> {
    session: &'a SessionManager,
}

impl<'a> RouteGuard<'a> {
    pub fn new(session: &'a SessionManager) -> Self {
        Self { session }
    }

    /// True iff a session is currently authenticated
    pub fn can_enter(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Decide whether `route` may be rendered. Public routes always pass;
    /// protected ones redirect to login while unauthenticated.
    pub fn check(&self, route: &AppRoute) -> Navigation {
        if !route.is_protected() || self.can_enter() {
            return Navigation::Allow(route.clone());
        }

        debug!("Denied {route}, redirecting to {}", AppRoute::Login);
        Navigation::Redirect(AppRoute::Login)
    }

    /// Resolve `path` and check it
    #[track_caller]
    pub fn visit(&self, path: &str) -> CoreErrorResult<Navigation> {
        let route = AppRoute::from_str(path)?;
        Ok(self.check(&route))
    }
}
