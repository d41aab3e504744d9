//! Login state for the current studio user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at startup and handed by clone to every consumer: the
//! navigation shell, route guards, the bearer interceptor and the pages. The
//! login page is the only writer of a fresh record; logout comes from the app
//! shell or the account page.
//!
//! DESIGN
//! ======
//! The logged flag is derived from whether a record is stored, so the two can
//! never disagree. Subscribers each own an unbounded channel; `log_in` and
//! `log_out` push into every live channel before returning, which keeps the
//! fan-out synchronous and in call order without an async runtime. A channel
//! whose receiver was dropped is pruned on the next publish.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::net::types::SessionInformation;

/// Shared handle to the login state. Cloning yields another handle to the
/// same state.
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    information: Option<SessionInformation>,
    subscribers: Vec<mpsc::UnboundedSender<bool>>,
}

impl Inner {
    fn publish(&mut self, logged: bool) {
        self.subscribers.retain(|tx| tx.send(logged).is_ok());
        debug!(logged, subscribers = self.subscribers.len(), "login state published");
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every critical section leaves `Inner` consistent, so a poisoned lock
        // still holds valid state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `information` as the current session and notify subscribers
    /// with `true`. The record is trusted as-is.
    pub fn log_in(&self, information: SessionInformation) {
        let mut inner = self.lock();
        info!(user_id = information.id, admin = information.admin, "user logged in");
        inner.information = Some(information);
        inner.publish(true);
    }

    /// Clear the current session and notify subscribers with `false`.
    ///
    /// Emits even when nobody is logged in.
    pub fn log_out(&self) {
        let mut inner = self.lock();
        if let Some(previous) = inner.information.take() {
            info!(user_id = previous.id, "user logged out");
        }
        inner.publish(false);
    }

    /// Whether a session record is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.lock().information.is_some()
    }

    /// Snapshot of the current session record, if any.
    pub fn session_information(&self) -> Option<SessionInformation> {
        self.lock().information.clone()
    }

    /// Id of the logged-in user.
    pub fn user_id(&self) -> Option<u64> {
        self.lock().information.as_ref().map(|info| info.id)
    }

    /// Whether the logged-in user is an admin. `false` when logged out.
    pub fn is_admin(&self) -> bool {
        self.lock().information.as_ref().is_some_and(|info| info.admin)
    }

    /// Bearer credential of the logged-in user.
    pub fn token(&self) -> Option<String> {
        self.lock().information.as_ref().map(|info| info.token.clone())
    }

    /// Subscribe to login-state changes.
    ///
    /// The returned stream yields the current flag first, then one value per
    /// later `log_in`/`log_out` call.
    pub fn subscribe(&self) -> LoginStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.lock();
        let logged = inner.information.is_some();
        if tx.send(logged).is_ok() {
            inner.subscribers.push(tx);
        }
        LoginStream { rx }
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionState")
            .field("logged", &inner.information.is_some())
            .field("user_id", &inner.information.as_ref().map(|info| info.id))
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Receiving side of a [`SessionState::subscribe`] call.
///
/// Does not end while any `SessionState` handle is alive.
#[derive(Debug)]
pub struct LoginStream {
    rx: mpsc::UnboundedReceiver<bool>,
}

impl LoginStream {
    /// Wait for the next emission. `None` once every state handle is gone.
    pub async fn next(&mut self) -> Option<bool> {
        self.rx.recv().await
    }

    /// Take the next emission if one is already queued.
    pub fn try_next(&mut self) -> Option<bool> {
        match self.rx.try_recv() {
            Ok(logged) => Some(logged),
            Err(_) => None,
        }
    }

    /// Take every queued emission, oldest first.
    pub fn drain(&mut self) -> Vec<bool> {
        let mut values = Vec::new();
        while let Some(logged) = self.try_next() {
            values.push(logged);
        }
        values
    }
}
