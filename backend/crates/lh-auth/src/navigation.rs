use lh_core::AppRoute;

/// Outcome of asking to enter a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested route
    Allow(AppRoute),
    /// Render this route instead
    Redirect(AppRoute),
}

impl Navigation {
    /// Where a successful login or signup lands
    pub fn after_sign_in() -> Self {
        Self::Redirect(AppRoute::Dashboard)
    }

    /// Where logout lands
    pub fn after_logout() -> Self {
        Self::Redirect(AppRoute::Login)
    }

    /// Route that ends up rendered
    pub fn target(&self) -> &AppRoute {
        match self {
            Self::Allow(route) | Self::Redirect(route) => route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}
