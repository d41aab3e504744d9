//! Application context and navigation shell.
//!
//! ARCHITECTURE
//! ============
//! `AppContext` is built once at startup and cloned into every page. It owns
//! the single [`SessionState`] plus one handle per collaborator seam, so pages
//! receive their dependencies explicitly and tests can swap any of them.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use tracing::info;

use crate::net::{ApiClient, AuthApi, SessionApi, TeacherApi, UserApi};
use crate::router::Navigator;
use crate::state::session::{LoginStream, SessionState};
use crate::util::snackbar::Notifier;

#[derive(Clone)]
pub struct AppContext {
    pub session: SessionState,
    pub auth: Arc<dyn AuthApi>,
    pub sessions: Arc<dyn SessionApi>,
    pub users: Arc<dyn UserApi>,
    pub teachers: Arc<dyn TeacherApi>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Wire every API seam to one HTTP client bound to `session`.
    pub fn from_client(
        client: ApiClient,
        session: SessionState,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let client = Arc::new(client.with_session(session.clone()));
        Self {
            session,
            auth: client.clone(),
            sessions: client.clone(),
            users: client.clone(),
            teachers: client,
            navigator,
            notifier,
        }
    }
}

/// A link in the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Target path; `None` for the logout action.
    pub path: Option<&'static str>,
}

const LOGGED_IN_LINKS: &[NavLink] = &[
    NavLink { label: "Sessions", path: Some("/sessions") },
    NavLink { label: "Account", path: Some("/me") },
    NavLink { label: "Logout", path: None },
];

const LOGGED_OUT_LINKS: &[NavLink] = &[
    NavLink { label: "Login", path: Some("/login") },
    NavLink { label: "Register", path: Some("/register") },
];

/// Top-level shell: follows the login stream to pick its navigation links.
pub struct App {
    ctx: AppContext,
    logins: LoginStream,
    logged: bool,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        let mut logins = ctx.session.subscribe();
        let logged = logins.try_next().unwrap_or(false);
        Self { ctx, logins, logged }
    }

    /// Apply login-state changes emitted since the last call.
    pub fn refresh(&mut self) {
        if let Some(last) = self.logins.drain().into_iter().last() {
            self.logged = last;
        }
    }

    pub fn is_logged(&self) -> bool {
        self.logged
    }

    pub fn nav_links(&self) -> &'static [NavLink] {
        if self.logged { LOGGED_IN_LINKS } else { LOGGED_OUT_LINKS }
    }

    /// Log out and return to the app root.
    pub fn logout(&mut self) {
        info!("logout requested");
        self.ctx.session.log_out();
        self.ctx.navigator.navigate("/");
        self.refresh();
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }
}
