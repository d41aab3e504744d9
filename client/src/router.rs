//! Route table, auth guards, and in-memory navigation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never touch the route table; they ask a [`Navigator`] to go somewhere
//! and the hosting layer calls [`resolve`] to decide what to render. Guards
//! read the login state at resolve time, so a logout followed by a navigation
//! lands on `/login` without any extra wiring.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const SESSIONS_PATH: &str = "/sessions";
pub const NOT_FOUND_PATH: &str = "/404";

/// A screen of the studio app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`: landing on the app root shows the login screen.
    Home,
    Login,
    Register,
    Sessions,
    SessionDetail(u64),
    SessionCreate,
    SessionUpdate(u64),
    Me,
    NotFound,
}

/// Access rule attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Open,
    /// Requires a logged-in user; otherwise redirect to `/login`.
    Auth,
    /// Requires no logged-in user; otherwise redirect to `/sessions`.
    Unauth,
}

impl Route {
    /// Match a path, ignoring query, fragment and trailing slashes.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["sessions"] => Some(Self::Sessions),
            ["sessions", "create"] => Some(Self::SessionCreate),
            ["sessions", "detail", id] => id.parse().map(Self::SessionDetail).ok(),
            ["sessions", "update", id] => id.parse().map(Self::SessionUpdate).ok(),
            ["me"] => Some(Self::Me),
            ["404"] => Some(Self::NotFound),
            _ => None,
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Sessions => SESSIONS_PATH.to_owned(),
            Self::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Self::SessionCreate => "/sessions/create".to_owned(),
            Self::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Self::Me => "/me".to_owned(),
            Self::NotFound => NOT_FOUND_PATH.to_owned(),
        }
    }

    pub fn guard(self) -> Guard {
        match self {
            Self::Home | Self::Login | Self::Register => Guard::Unauth,
            Self::Sessions | Self::SessionDetail(_) | Self::SessionCreate | Self::SessionUpdate(_) | Self::Me => {
                Guard::Auth
            }
            Self::NotFound => Guard::Open,
        }
    }
}

/// Outcome of resolving a path against the route table and guards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(String),
}

/// Resolve `path` for the current login state.
pub fn resolve(path: &str, session: &SessionState) -> Resolution {
    let Some(route) = Route::parse(path) else {
        debug!(path, "unknown route");
        return Resolution::Redirect(NOT_FOUND_PATH.to_owned());
    };
    match (route.guard(), session.is_logged_in()) {
        (Guard::Auth, false) => Resolution::Redirect(LOGIN_PATH.to_owned()),
        (Guard::Unauth, true) => Resolution::Redirect(SESSIONS_PATH.to_owned()),
        _ => Resolution::Render(route),
    }
}

/// Follow redirects until a route renders. Redirect targets always render,
/// so this settles within two hops.
pub fn settle(path: &str, session: &SessionState) -> Route {
    let mut current = path.to_owned();
    loop {
        match resolve(&current, session) {
            Resolution::Render(route) => return route,
            Resolution::Redirect(next) => current = next,
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Navigation collaborator used by pages.
pub trait Navigator: Send + Sync {
    /// Go to `path`. Relative paths (`"sessions"`) are taken from the root.
    fn navigate(&self, path: &str);

    /// Return to the previous entry.
    fn back(&self);
}

/// In-memory navigation stack, starting at `/`.
#[derive(Debug)]
pub struct History {
    entries: Mutex<Vec<String>>,
}

impl Default for History {
    fn default() -> Self {
        Self { entries: Mutex::new(vec!["/".to_owned()]) }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `path` as the only entry.
    #[must_use]
    pub fn at(path: &str) -> Self {
        Self { entries: Mutex::new(vec![absolute(path)]) }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> String {
        self.lock().last().cloned().unwrap_or_else(|| "/".to_owned())
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }
}

impl Navigator for History {
    fn navigate(&self, path: &str) {
        let path = absolute(path);
        debug!(%path, "navigate");
        self.lock().push(path);
    }

    fn back(&self) {
        let mut entries = self.lock();
        if entries.len() > 1 {
            entries.pop();
        }
        debug!(path = entries.last().map(String::as_str), "navigate back");
    }
}

fn absolute(path: &str) -> String {
    if path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}
