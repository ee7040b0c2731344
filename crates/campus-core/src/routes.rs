//! Client-side routes and the navigation links a session can see.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::SessionUser;

/// One page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Directory,
    Events,
    Mentorship,
    Donate,
    Admin,
}

impl Route {
    pub const ALL: [Self; 6] = [
        Self::Landing,
        Self::Directory,
        Self::Events,
        Self::Mentorship,
        Self::Donate,
        Self::Admin,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Directory => "/directory",
            Self::Events => "/events",
            Self::Mentorship => "/mentorship",
            Self::Donate => "/donate",
            Self::Admin => "/admin",
        }
    }

    /// Resolve an exact path. Unknown paths have no route.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Directory => "Directory",
            Self::Events => "Events",
            Self::Mentorship => "Mentorship",
            Self::Donate => "Donate",
            Self::Admin => "Admin Dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A navigation entry as rendered in the top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NavLink {
    pub label: String,
    pub path: String,
    pub active: bool,
}

/// Navigation links for `user`, marking the one matching `current_path`.
///
/// The admin link only appears for an admin session.
#[must_use]
pub fn nav_links(user: Option<&SessionUser>, current_path: &str) -> Vec<NavLink> {
    let show_admin = user.is_some_and(SessionUser::is_admin);
    Route::ALL
        .into_iter()
        .filter(|route| *route != Route::Admin || show_admin)
        .map(|route| NavLink {
            label: route.nav_label().to_string(),
            path: route.path().to_string(),
            active: route.path() == current_path,
        })
        .collect()
}
