//! Navigable views of the learning platform.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// A view reachable by path. Everything except the login and signup
/// screens sits behind the route guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Signup,
    Dashboard,
    Library,
    Video { id: String },
    Tutor,
    LiveChat,
    Progress,
    Profile,
}

impl AppRoute {
    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Dashboard => "/".to_string(),
            Self::Library => "/library".to_string(),
            Self::Video { id } => format!("/video/{id}"),
            Self::Tutor => "/tutor".to_string(),
            Self::LiveChat => "/live-chat".to_string(),
            Self::Progress => "/progress".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// Whether entering this route requires an authenticated session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    /// Map a path to a route. A single trailing slash is tolerated;
    /// unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match trimmed {
            "/" | "" => Some(Self::Dashboard),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/library" => Some(Self::Library),
            "/tutor" => Some(Self::Tutor),
            "/live-chat" => Some(Self::LiveChat),
            "/progress" => Some(Self::Progress),
            "/profile" => Some(Self::Profile),
            other => {
                let id = other.strip_prefix("/video/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Self::Video { id: id.to_string() })
            }
        }
    }
}

impl FromStr for AppRoute {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::InvalidRoute {
            path: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
