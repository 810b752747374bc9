//! Views, their paths, and who may see them.
//!
//! The router asks [`authorize`] before it builds a protected view and acts
//! on the returned [`Access`] value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Login,
    Overview,
    Analytics,
    Transactions,
    Users,
    Settings,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Login,
        View::Overview,
        View::Analytics,
        View::Transactions,
        View::Users,
        View::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Overview => "/dashboard",
            View::Analytics => "/dashboard/analytics",
            View::Transactions => "/dashboard/transactions",
            View::Users => "/dashboard/users",
            View::Settings => "/dashboard/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::Overview => "Overview",
            View::Analytics => "Analytics",
            View::Transactions => "Transactions",
            View::Users => "Users",
            View::Settings => "Settings",
        }
    }

    /// Everything except the login page needs a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, View::Login)
    }

    /// Exact path lookup, ignoring one trailing slash.
    pub fn from_path(path: &str) -> Option<View> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|view| view.path() == trimmed)
    }

    /// Resolves any path to a view. The root and unknown paths land on the
    /// overview.
    pub fn resolve(path: &str) -> View {
        Self::from_path(path).unwrap_or(View::Overview)
    }
}

/// Outcome of the access check for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(View),
}

/// Decides whether `view` may be shown. Signed-out visitors are sent to the
/// login page; signed-in visitors skip it.
pub fn authorize(view: View, authenticated: bool) -> Access {
    match (view.is_protected(), authenticated) {
        (true, false) => Access::Redirect(View::Login),
        (false, true) => Access::Redirect(View::Overview),
        _ => Access::Render,
    }
}

/// Sidebar entries, in display order.
pub const NAV_ITEMS: [View; 5] = [
    View::Overview,
    View::Analytics,
    View::Transactions,
    View::Users,
    View::Settings,
];

/// Whether a sidebar entry is highlighted for `current_path`. The overview
/// matches only its exact path; the other entries also cover sub-paths.
pub fn is_active(item: View, current_path: &str) -> bool {
    match item {
        View::Overview => current_path == item.path(),
        _ => current_path.starts_with(item.path()),
    }
}
